//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod classifier;
mod job_tracker;
mod repository;

pub use classifier::{ClassifierError, ClassifierPort};
pub use job_tracker::{Job, JobError, JobStatus, JobTrackerPort};
pub use repository::{OrderRepositoryPort, RepositoryError};
