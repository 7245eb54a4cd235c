//! Order Command Handlers

use std::sync::Arc;

use uuid::Uuid;

use crate::application::commands::order_commands::{CreateOrder, UpdateOrder};
use crate::application::error::ApplicationError;
use crate::application::ports::{JobTrackerPort, OrderRepositoryPort};
use crate::domain::order::{InferenceImageProduct, Order, Product};

/// CreateOrder Handler - 创建订单并调度后台预测
pub struct CreateOrderHandler {
    order_repo: Arc<dyn OrderRepositoryPort>,
    job_tracker: Arc<dyn JobTrackerPort>,
}

impl CreateOrderHandler {
    pub fn new(
        order_repo: Arc<dyn OrderRepositoryPort>,
        job_tracker: Arc<dyn JobTrackerPort>,
    ) -> Self {
        Self {
            order_repo,
            job_tracker,
        }
    }

    pub async fn handle(&self, cmd: CreateOrder) -> Result<Uuid, ApplicationError> {
        if cmd.files.is_empty() {
            return Err(ApplicationError::validation("At least one file is required"));
        }

        let products: Vec<Product> = cmd
            .files
            .into_iter()
            .map(|file| {
                tracing::debug!(
                    filename = ?file.filename,
                    size = file.bytes.len(),
                    "Building inference image product"
                );
                Product::InferenceImage(InferenceImageProduct::new(file.bytes))
            })
            .collect();

        let order = Order::new(products);
        let order_id = self.order_repo.add(order).await?;

        // 先落库再入队，worker 拿到 id 时订单一定可见
        self.job_tracker
            .submit(order_id)
            .map_err(|e| ApplicationError::InternalError(e.to_string()))?;

        tracing::info!(order_id = %order_id, "Order created and prediction scheduled");
        Ok(order_id)
    }
}

/// UpdateOrder Handler - 向订单追加商品
pub struct UpdateOrderHandler {
    order_repo: Arc<dyn OrderRepositoryPort>,
}

impl UpdateOrderHandler {
    pub fn new(order_repo: Arc<dyn OrderRepositoryPort>) -> Self {
        Self { order_repo }
    }

    /// 订单不存在时返回 Ok(None)
    pub async fn handle(&self, cmd: UpdateOrder) -> Result<Option<Order>, ApplicationError> {
        let Some(mut order) = self.order_repo.get(cmd.order_id).await? else {
            return Ok(None);
        };

        let mut added = 0usize;
        for product in cmd.products {
            if order.add_product(product) {
                added += 1;
            }
        }

        if added > 0 {
            self.order_repo.replace(cmd.order_id, order.clone()).await?;
        }

        tracing::debug!(order_id = %cmd.order_id, added = added, "Order updated");
        Ok(Some(order))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::commands::order_commands::UploadedImage;
    use crate::domain::order::{BasicProduct, OrderStatus};
    use crate::infrastructure::memory::{InMemoryJobTracker, InMemoryOrderRepository};
    use tokio::sync::mpsc;

    fn handlers() -> (
        CreateOrderHandler,
        UpdateOrderHandler,
        Arc<InMemoryOrderRepository>,
        mpsc::Receiver<Uuid>,
    ) {
        let (tx, rx) = mpsc::channel(16);
        let repo = Arc::new(InMemoryOrderRepository::new());
        let tracker = Arc::new(InMemoryJobTracker::new(tx));
        (
            CreateOrderHandler::new(repo.clone(), tracker),
            UpdateOrderHandler::new(repo.clone()),
            repo,
            rx,
        )
    }

    #[tokio::test]
    async fn test_create_order_stores_and_enqueues() {
        let (create, _, repo, mut rx) = handlers();

        let order_id = create
            .handle(CreateOrder {
                files: vec![
                    UploadedImage {
                        filename: Some("a.jpg".to_string()),
                        bytes: vec![1, 2, 3],
                    },
                    UploadedImage {
                        filename: Some("b.jpg".to_string()),
                        bytes: vec![4, 5, 6],
                    },
                ],
            })
            .await
            .unwrap();

        let order = repo.get(order_id).await.unwrap().unwrap();
        assert_eq!(order.status(), OrderStatus::Pending);
        assert_eq!(order.products().len(), 2);
        assert_eq!(order.bill(), 200.0);

        // 订单 id 已进入 worker 队列
        assert_eq!(rx.try_recv().unwrap(), order_id);
    }

    #[tokio::test]
    async fn test_create_order_requires_files() {
        let (create, _, _, _rx) = handlers();
        let result = create.handle(CreateOrder { files: vec![] }).await;
        assert!(matches!(
            result,
            Err(ApplicationError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn test_update_missing_order_returns_none() {
        let (_, update, _, _rx) = handlers();
        let result = update
            .handle(UpdateOrder {
                order_id: Uuid::new_v4(),
                products: vec![],
            })
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_update_with_empty_products_is_unchanged() {
        let (create, update, repo, _rx) = handlers();
        let order_id = create
            .handle(CreateOrder {
                files: vec![UploadedImage {
                    filename: None,
                    bytes: vec![1],
                }],
            })
            .await
            .unwrap();
        let before = repo.get(order_id).await.unwrap().unwrap();

        let updated = update
            .handle(UpdateOrder {
                order_id,
                products: vec![],
            })
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.products().len(), before.products().len());
        assert_eq!(updated.status(), before.status());
        assert_eq!(updated.updated_at(), before.updated_at());
    }

    #[tokio::test]
    async fn test_update_readds_existing_product_as_noop() {
        let (create, update, repo, _rx) = handlers();
        let order_id = create
            .handle(CreateOrder {
                files: vec![UploadedImage {
                    filename: None,
                    bytes: vec![1],
                }],
            })
            .await
            .unwrap();

        let existing = repo.get(order_id).await.unwrap().unwrap().products()[0].clone();
        let new_product = Product::Basic(BasicProduct::new("extra", 50.0).unwrap());

        let updated = update
            .handle(UpdateOrder {
                order_id,
                products: vec![existing, new_product],
            })
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.products().len(), 2);
        assert_eq!(updated.bill(), 150.0);
    }
}
