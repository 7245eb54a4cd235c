//! Worker Layer - Background Task Processing
//!
//! 实现 PredictWorker，处理订单预测任务

mod predict_worker;

pub use predict_worker::{PredictWorker, PredictWorkerConfig};
