//! Classifier Port - 图像分类推理引擎抽象
//!
//! 外部推理函数对本服务不透明，这里只约定调用签名，
//! 具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::order::Classification;

/// 推理错误
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Classifier Port
#[async_trait]
pub trait ClassifierPort: Send + Sync {
    /// 对一张图像执行分类推理，返回分类结果列表
    async fn classify(&self, image: &[u8]) -> Result<Vec<Classification>, ClassifierError>;

    /// 检查推理服务是否可用
    async fn health_check(&self) -> bool {
        true // 默认实现
    }
}
