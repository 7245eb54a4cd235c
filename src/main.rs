//! Ordel - 图像推理订单服务
//!
//! - Domain: order/ (Bounded Context)
//! - Application: commands, queries, ports
//! - Infrastructure: http, memory, worker, adapters

use std::sync::Arc;
use std::time::Duration;

use ordel::application::{ClassifierPort, PredictOrderHandler};
use ordel::config::{load_config, print_config, ClassifierBackend};
use ordel::infrastructure::adapters::{
    FakeClassifier, FakeClassifierConfig, HttpClassifier, HttpClassifierConfig,
};
use ordel::infrastructure::http::{AppState, HttpServer, ServerConfig};
use ordel::infrastructure::memory::{InMemoryJobTracker, InMemoryOrderRepository};
use ordel::infrastructure::worker::{PredictWorker, PredictWorkerConfig};
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},ordel={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Ordel - 图像推理订单服务");
    print_config(&config);

    // 创建内存存储
    let order_repo = Arc::new(InMemoryOrderRepository::new());

    // 创建分类器
    let classifier: Arc<dyn ClassifierPort> = match config.classifier.backend {
        ClassifierBackend::Http => {
            let classifier_config = HttpClassifierConfig::new(config.classifier.url.clone())
                .with_timeout(config.classifier.timeout_secs);
            Arc::new(HttpClassifier::new(classifier_config)?)
        }
        ClassifierBackend::Fake => Arc::new(FakeClassifier::new(FakeClassifierConfig::default())),
    };

    // 创建预测任务队列
    let (job_tx, job_rx) = mpsc::channel(config.worker.queue_capacity);
    let job_tracker = Arc::new(InMemoryJobTracker::new(job_tx));

    // 创建预测命令处理器
    let predict_handler = Arc::new(PredictOrderHandler::new(
        order_repo.clone(),
        classifier,
        Duration::from_secs(config.worker.queue_delay_secs),
    ));

    // 创建并启动 PredictWorker
    let worker_config = PredictWorkerConfig {
        max_concurrent: config.worker.max_concurrent,
    };
    let worker = PredictWorker::new(worker_config, job_rx, job_tracker.clone(), predict_handler);
    tokio::spawn(worker.run());

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(order_repo, job_tracker);

    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for ctrl-c: {}", e);
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
