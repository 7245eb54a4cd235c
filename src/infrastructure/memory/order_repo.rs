//! In-Memory Order Repository Implementation
//!
//! 无索引的顺序存储，每次查找都是线性扫描。
//! 仅作演示用，未做任何性能优化

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::application::ports::{OrderRepositoryPort, RepositoryError};
use crate::domain::order::Order;

/// 内存订单仓储
pub struct InMemoryOrderRepository {
    /// 按插入顺序保存
    items: RwLock<Vec<Order>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryOrderRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderRepositoryPort for InMemoryOrderRepository {
    async fn add(&self, order: Order) -> Result<Uuid, RepositoryError> {
        let id = order.id();
        let mut items = self.items.write().await;
        items.push(order);

        // 插入后回读校验，失败视为致命的一致性错误
        let stored = items
            .iter()
            .find(|item| item.id() == id)
            .ok_or(RepositoryError::Inconsistent(id))?;

        tracing::debug!(order_id = %stored.id(), total = items.len(), "Order stored");
        Ok(id)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Order>, RepositoryError> {
        let items = self.items.read().await;
        Ok(items.iter().find(|item| item.id() == id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<Order>, RepositoryError> {
        let items = self.items.read().await;
        Ok(items.clone())
    }

    async fn replace(&self, id: Uuid, order: Order) -> Result<(), RepositoryError> {
        let mut items = self.items.write().await;
        let slot = items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or(RepositoryError::NotFound(id))?;
        *slot = order;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::OrderStatus;

    #[tokio::test]
    async fn test_get_unknown_id_is_none() {
        let repo = InMemoryOrderRepository::new();
        assert!(repo.get(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_add_then_get() {
        let repo = InMemoryOrderRepository::new();
        let order = Order::new(vec![]);
        let id = repo.add(order).await.unwrap();

        let found = repo.get(id).await.unwrap().unwrap();
        assert_eq!(found.id(), id);
    }

    #[tokio::test]
    async fn test_get_all_reflects_insertion_order() {
        let repo = InMemoryOrderRepository::new();
        let mut ids = Vec::new();
        for _ in 0..3 {
            ids.push(repo.add(Order::new(vec![])).await.unwrap());
        }

        let all = repo.get_all().await.unwrap();
        let stored_ids: Vec<Uuid> = all.iter().map(|o| o.id()).collect();
        assert_eq!(stored_ids, ids);
    }

    #[tokio::test]
    async fn test_replace_updates_stored_value() {
        let repo = InMemoryOrderRepository::new();
        let order = Order::new(vec![]);
        let id = repo.add(order.clone()).await.unwrap();

        let mut updated = order;
        updated.update_status(OrderStatus::Done);
        repo.replace(id, updated).await.unwrap();

        let found = repo.get(id).await.unwrap().unwrap();
        assert_eq!(found.status(), OrderStatus::Done);
    }

    #[tokio::test]
    async fn test_replace_unknown_id_fails() {
        let repo = InMemoryOrderRepository::new();
        let result = repo.replace(Uuid::new_v4(), Order::new(vec![])).await;
        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
    }
}
