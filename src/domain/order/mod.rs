//! Order Context - 订单限界上下文
//!
//! 职责:
//! - 订单聚合管理（商品列表、状态机、账单）
//! - 商品变体（基础商品 / 图像推理商品）

mod aggregate;
mod errors;
mod product;
mod value_objects;

pub use aggregate::Order;
pub use errors::OrderError;
pub use product::{BasicProduct, Classification, InferenceImageProduct, Product};
pub use value_objects::OrderStatus;
