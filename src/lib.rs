//! Ordel - 图像推理订单服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Order Context: 订单聚合、商品、状态机
//!
//! 应用层 (application/):
//! - Ports: 端口定义（OrderRepository, JobTracker, Classifier）
//! - Commands: CQRS 命令处理器（创建/更新订单、执行预测）
//! - Queries: CQRS 查询处理器（订单查询、账单计算）
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Memory: OrderRepository, JobTracker 内存实现
//! - Worker: PredictWorker 后台预测处理
//! - Adapters: 图像分类器客户端（HTTP / Fake）

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
