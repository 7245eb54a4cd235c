//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（Repository、JobTracker、Classifier）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    // Commands
    CreateOrder,
    RunPrediction,
    UpdateOrder,
    UploadedImage,
    // Handlers
    handlers::{CreateOrderHandler, PredictOrderHandler, UpdateOrderHandler},
};

pub use error::ApplicationError;

pub use ports::{
    // Classifier
    ClassifierError,
    ClassifierPort,
    // Job tracker
    Job,
    JobError,
    JobStatus,
    JobTrackerPort,
    // Repository
    OrderRepositoryPort,
    RepositoryError,
};

pub use queries::{
    // Queries
    GetBill,
    GetOrder,
    ListOrders,
    // Handlers
    handlers::{GetBillHandler, GetOrderHandler, ListOrdersHandler},
};
