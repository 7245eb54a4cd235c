//! Predict Worker - Background Order Prediction Processor
//!
//! 显式的后台任务执行器，取代“调度后无人观察”的分离协程:
//! 完成与失败都会落到 JobTracker 与日志里，HTTP 侧仍然立即返回

use std::sync::Arc;
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::application::commands::RunPrediction;
use crate::application::ports::JobTrackerPort;
use crate::application::PredictOrderHandler;

/// Worker 配置
#[derive(Debug, Clone)]
pub struct PredictWorkerConfig {
    /// 最大并发预测数
    pub max_concurrent: usize,
}

impl Default for PredictWorkerConfig {
    fn default() -> Self {
        Self { max_concurrent: 1 }
    }
}

/// 预测 Worker
///
/// 从队列消费订单 id 并执行预测生命周期
pub struct PredictWorker {
    config: PredictWorkerConfig,
    queue_receiver: mpsc::Receiver<Uuid>,
    job_tracker: Arc<dyn JobTrackerPort>,
    predict_handler: Arc<PredictOrderHandler>,
}

impl PredictWorker {
    pub fn new(
        config: PredictWorkerConfig,
        queue_receiver: mpsc::Receiver<Uuid>,
        job_tracker: Arc<dyn JobTrackerPort>,
        predict_handler: Arc<PredictOrderHandler>,
    ) -> Self {
        Self {
            config,
            queue_receiver,
            job_tracker,
            predict_handler,
        }
    }

    /// 启动 Worker
    pub async fn run(mut self) {
        tracing::info!(
            max_concurrent = self.config.max_concurrent,
            "PredictWorker started"
        );

        // 使用 semaphore 控制并发
        let semaphore = Arc::new(tokio::sync::Semaphore::new(self.config.max_concurrent));

        while let Some(order_id) = self.queue_receiver.recv().await {
            let permit = match semaphore.clone().acquire_owned().await {
                Ok(permit) => permit,
                Err(_) => {
                    tracing::error!("Failed to acquire semaphore permit");
                    continue;
                }
            };

            let job_tracker = self.job_tracker.clone();
            let predict_handler = self.predict_handler.clone();

            tokio::spawn(async move {
                let _permit = permit; // 持有 permit 直到任务完成
                Self::process_order(order_id, job_tracker, predict_handler).await;
            });
        }

        tracing::info!("PredictWorker stopped");
    }

    /// 处理单个订单
    ///
    /// 失败时 Job 停留在 STARTED、订单停留在 IN_PROGRESS，
    /// 不做恢复，只记录日志
    async fn process_order(
        order_id: Uuid,
        job_tracker: Arc<dyn JobTrackerPort>,
        predict_handler: Arc<PredictOrderHandler>,
    ) {
        if let Err(e) = job_tracker.mark_started(order_id) {
            tracing::warn!(order_id = %order_id, error = %e, "Failed to mark job started");
        }

        match predict_handler.handle(RunPrediction { order_id }).await {
            Ok(Some(result)) => {
                if let Err(e) = job_tracker.mark_done(order_id, result) {
                    tracing::warn!(order_id = %order_id, error = %e, "Failed to mark job done");
                }
                tracing::info!(order_id = %order_id, "Prediction job completed");
            }
            Ok(None) => {
                tracing::warn!(order_id = %order_id, "Order disappeared, job left started");
            }
            Err(e) => {
                tracing::error!(order_id = %order_id, error = %e, "Prediction job failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{JobStatus, OrderRepositoryPort};
    use crate::domain::order::{InferenceImageProduct, Order, OrderStatus, Product};
    use crate::infrastructure::adapters::FakeClassifier;
    use crate::infrastructure::memory::{InMemoryJobTracker, InMemoryOrderRepository};
    use std::time::Duration;

    async fn wait_for_done(tracker: &InMemoryJobTracker, order_id: Uuid) -> bool {
        for _ in 0..100 {
            if let Some(job) = tracker.get(order_id) {
                if job.status == JobStatus::Done {
                    return true;
                }
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        false
    }

    #[tokio::test]
    async fn test_worker_drives_job_to_done() {
        let (tx, rx) = mpsc::channel(16);
        let repo = Arc::new(InMemoryOrderRepository::new());
        let tracker = Arc::new(InMemoryJobTracker::new(tx));
        let handler = Arc::new(PredictOrderHandler::new(
            repo.clone(),
            Arc::new(FakeClassifier::default()),
            Duration::from_millis(0),
        ));

        let worker = PredictWorker::new(
            PredictWorkerConfig::default(),
            rx,
            tracker.clone(),
            handler,
        );
        tokio::spawn(worker.run());

        let order = Order::new(vec![Product::InferenceImage(InferenceImageProduct::new(
            vec![1, 2, 3],
        ))]);
        let order_id = repo.add(order).await.unwrap();
        tracker.submit(order_id).unwrap();

        assert!(wait_for_done(&tracker, order_id).await);

        let job = tracker.get(order_id).unwrap();
        assert_eq!(job.result, Some(order_id));

        let stored = repo.get(order_id).await.unwrap().unwrap();
        assert_eq!(stored.status(), OrderStatus::Done);
    }

    #[tokio::test]
    async fn test_missing_order_leaves_job_started() {
        let (tx, rx) = mpsc::channel(16);
        let repo = Arc::new(InMemoryOrderRepository::new());
        let tracker = Arc::new(InMemoryJobTracker::new(tx));
        let handler = Arc::new(PredictOrderHandler::new(
            repo,
            Arc::new(FakeClassifier::default()),
            Duration::from_millis(0),
        ));

        let worker = PredictWorker::new(
            PredictWorkerConfig::default(),
            rx,
            tracker.clone(),
            handler,
        );
        tokio::spawn(worker.run());

        // 订单从未入库
        let order_id = Uuid::new_v4();
        tracker.submit(order_id).unwrap();

        tokio::time::sleep(Duration::from_millis(200)).await;
        let job = tracker.get(order_id).unwrap();
        assert_eq!(job.status, JobStatus::Started);
        assert!(job.result.is_none());
    }
}
