//! Domain Layer - 领域层
//!
//! 单一限界上下文:
//! - Order Context: 订单与商品管理

pub mod order;
