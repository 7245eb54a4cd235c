//! Prediction Command Handler
//!
//! 订单预测生命周期状态机，单次执行，无重试:
//! 读取订单 → IN_PROGRESS → 固定延迟 → 逐商品推理 → 重读合并 → DONE
//!
//! 任一商品推理失败会中止整个订单，订单停留在 IN_PROGRESS

use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use crate::application::commands::order_commands::RunPrediction;
use crate::application::error::ApplicationError;
use crate::application::ports::{ClassifierPort, OrderRepositoryPort};
use crate::domain::order::OrderStatus;

/// PredictOrder Handler - 执行一个订单的预测生命周期
pub struct PredictOrderHandler {
    order_repo: Arc<dyn OrderRepositoryPort>,
    classifier: Arc<dyn ClassifierPort>,
    /// 处理前的固定延迟（模拟排队）
    queue_delay: Duration,
}

impl PredictOrderHandler {
    pub fn new(
        order_repo: Arc<dyn OrderRepositoryPort>,
        classifier: Arc<dyn ClassifierPort>,
        queue_delay: Duration,
    ) -> Self {
        Self {
            order_repo,
            classifier,
            queue_delay,
        }
    }

    /// 订单不存在时返回 Ok(None)，对外无感知，仅记录日志
    pub async fn handle(&self, cmd: RunPrediction) -> Result<Option<Uuid>, ApplicationError> {
        let Some(mut order) = self.order_repo.get(cmd.order_id).await? else {
            tracing::warn!(order_id = %cmd.order_id, "Order not found, skipping prediction");
            return Ok(None);
        };

        // 先发布 IN_PROGRESS，延迟期间对读取方可见
        order.update_status(OrderStatus::InProgress);
        self.order_repo.replace(cmd.order_id, order.clone()).await?;

        tokio::time::sleep(self.queue_delay).await;

        // 无图像载荷的商品跳过
        let images: Vec<(Uuid, Vec<u8>)> = order
            .products()
            .iter()
            .filter_map(|p| p.image().map(|img| (p.id(), img.to_vec())))
            .collect();

        let mut outputs = Vec::with_capacity(images.len());
        for (product_id, image) in images {
            let results = self.classifier.classify(&image).await?;
            tracing::debug!(
                order_id = %cmd.order_id,
                product_id = %product_id,
                results = results.len(),
                "Product classified"
            );
            outputs.push((product_id, results));
        }

        // 重新读取后合并：延迟期间通过 PATCH 追加的商品必须保留
        let Some(mut stored) = self.order_repo.get(cmd.order_id).await? else {
            tracing::warn!(order_id = %cmd.order_id, "Order removed during prediction");
            return Ok(None);
        };
        for product in order.products() {
            stored.add_product(product.clone());
        }
        for (product_id, results) in outputs {
            stored.attach_output(product_id, results);
        }

        stored.update_status(OrderStatus::Done);
        self.order_repo.replace(cmd.order_id, stored).await?;

        tracing::info!(order_id = %cmd.order_id, "Prediction completed");
        Ok(Some(cmd.order_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::ClassifierError;
    use crate::domain::order::{BasicProduct, Classification, InferenceImageProduct, Order, Product};
    use crate::infrastructure::adapters::FakeClassifier;
    use crate::infrastructure::memory::InMemoryOrderRepository;
    use async_trait::async_trait;

    struct FailingClassifier;

    #[async_trait]
    impl ClassifierPort for FailingClassifier {
        async fn classify(&self, _image: &[u8]) -> Result<Vec<Classification>, ClassifierError> {
            Err(ClassifierError::ServiceError("model exploded".to_string()))
        }
    }

    fn image_order(n: usize) -> Order {
        let products = (0..n)
            .map(|i| Product::InferenceImage(InferenceImageProduct::new(vec![i as u8; 4])))
            .collect();
        Order::new(products)
    }

    #[tokio::test]
    async fn test_completed_order_has_all_outputs() {
        let repo = Arc::new(InMemoryOrderRepository::new());
        let handler = PredictOrderHandler::new(
            repo.clone(),
            Arc::new(FakeClassifier::default()),
            Duration::from_millis(0),
        );

        let order_id = repo.add(image_order(3)).await.unwrap();
        let result = handler.handle(RunPrediction { order_id }).await.unwrap();
        assert_eq!(result, Some(order_id));

        let order = repo.get(order_id).await.unwrap().unwrap();
        assert_eq!(order.status(), OrderStatus::Done);
        assert!(order.products().iter().all(|p| p.output_json().is_some()));
    }

    #[tokio::test]
    async fn test_missing_order_is_silent_noop() {
        let repo = Arc::new(InMemoryOrderRepository::new());
        let handler = PredictOrderHandler::new(
            repo,
            Arc::new(FakeClassifier::default()),
            Duration::from_millis(0),
        );

        let result = handler
            .handle(RunPrediction {
                order_id: Uuid::new_v4(),
            })
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_products_added_during_delay_survive_completion() {
        let repo = Arc::new(InMemoryOrderRepository::new());
        let handler = PredictOrderHandler::new(
            repo.clone(),
            Arc::new(FakeClassifier::default()),
            Duration::from_millis(300),
        );

        let order_id = repo.add(image_order(1)).await.unwrap();
        let run = tokio::spawn(async move { handler.handle(RunPrediction { order_id }).await });

        // 延迟期间向订单追加商品
        tokio::time::sleep(Duration::from_millis(100)).await;
        let mut order = repo.get(order_id).await.unwrap().unwrap();
        assert_eq!(order.status(), OrderStatus::InProgress);
        assert!(order.add_product(Product::Basic(
            BasicProduct::new("patched_mug", 50.0).unwrap()
        )));
        repo.replace(order_id, order).await.unwrap();

        let result = run.await.unwrap().unwrap();
        assert_eq!(result, Some(order_id));

        let done = repo.get(order_id).await.unwrap().unwrap();
        assert_eq!(done.status(), OrderStatus::Done);
        assert_eq!(done.products().len(), 2);
        assert_eq!(done.bill(), 150.0);
        // 图像商品带输出，追加的基础商品没有
        assert!(done.products()[0].output_json().is_some());
        assert!(done.products()[1].output_json().is_none());
    }

    #[tokio::test]
    async fn test_classifier_failure_leaves_order_in_progress() {
        let repo = Arc::new(InMemoryOrderRepository::new());
        let handler = PredictOrderHandler::new(
            repo.clone(),
            Arc::new(FailingClassifier),
            Duration::from_millis(0),
        );

        let order_id = repo.add(image_order(2)).await.unwrap();
        let result = handler.handle(RunPrediction { order_id }).await;
        assert!(matches!(result, Err(ApplicationError::InferenceError(_))));

        let order = repo.get(order_id).await.unwrap().unwrap();
        assert_eq!(order.status(), OrderStatus::InProgress);
        assert!(order.products().iter().all(|p| p.output_json().is_none()));
    }
}
