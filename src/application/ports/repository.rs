//! Repository Port - 出站端口
//!
//! 定义订单存储的抽象接口，具体实现在 infrastructure/memory 层
//!
//! 写路径为显式的 `replace`，不依赖共享可变引用别名更新

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::order::Order;

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Order not found: {0}")]
    NotFound(Uuid),

    /// 插入后立即回读失败，视为致命的内部一致性错误
    #[error("Repository inconsistency: order {0} missing right after insertion")]
    Inconsistent(Uuid),
}

/// Order Repository Port
#[async_trait]
pub trait OrderRepositoryPort: Send + Sync {
    /// 保存新订单，返回其 id
    ///
    /// 插入后按 id 回读校验，回读失败返回 `Inconsistent`
    async fn add(&self, order: Order) -> Result<Uuid, RepositoryError>;

    /// 根据 id 查找订单
    async fn get(&self, id: Uuid) -> Result<Option<Order>, RepositoryError>;

    /// 获取所有订单（当前内容快照，按插入顺序）
    async fn get_all(&self) -> Result<Vec<Order>, RepositoryError>;

    /// 以新值整体替换指定订单
    async fn replace(&self, id: Uuid, order: Order) -> Result<(), RepositoryError>;
}
