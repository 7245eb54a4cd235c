//! Data Transfer Objects
//!
//! 对外 JSON 结构，字段布局与既有客户端兼容:
//! 商品为扁平记录，订单状态为整数码

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::order::{BasicProduct, Order, OrderError, OrderStatus, Product};

/// 商品记录
///
/// 反序列化时除 name/price 外均有默认值
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDto {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub output: Option<serde_json::Value>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl ProductDto {
    pub fn from_domain(product: &Product) -> Self {
        Self {
            id: product.id(),
            name: product.name().to_string(),
            price: product.price(),
            output: product.output_json(),
            created_at: product.created_at(),
            updated_at: product.updated_at(),
        }
    }

    /// 进入领域层
    ///
    /// PATCH 提交的商品不携带图像载荷，一律作为基础商品
    pub fn into_domain(self) -> Result<Product, OrderError> {
        Ok(Product::Basic(BasicProduct::from_record(
            self.id,
            self.name,
            self.price,
            self.output,
            self.created_at,
            self.updated_at,
        )?))
    }
}

/// 订单响应
#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub id: Uuid,
    pub products: Vec<ProductDto>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Order> for OrderResponse {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id(),
            products: order.products().iter().map(ProductDto::from_domain).collect(),
            status: order.status(),
            created_at: order.created_at(),
            updated_at: order.updated_at(),
        }
    }
}

/// 订单更新请求体
#[derive(Debug, Deserialize)]
pub struct OrderUpdateRequest {
    #[serde(default)]
    pub products: Vec<ProductDto>,
}
