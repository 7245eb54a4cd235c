//! Order Context - Domain Errors

use thiserror::Error;

/// 订单领域错误
#[derive(Debug, Error)]
pub enum OrderError {
    /// 商品价格为负数
    #[error("Product price cannot be negative: {0}")]
    NegativePrice(f64),
}
