//! Job Tracker Port - 预测任务簿记
//!
//! Job 与 Order 共享同一 id，独立镜像后台处理进度:
//! PENDING（已入队）→ STARTED（worker 开始处理）→ DONE（记录结果）
//!
//! 处理失败时 Job 停留在 STARTED，与订单自身状态无事务关联

use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

/// Job Tracker 错误
#[derive(Debug, Error)]
pub enum JobError {
    #[error("Job not found: {0}")]
    NotFound(Uuid),

    #[error("Prediction queue is full, job {0} rejected")]
    QueueFull(Uuid),
}

/// 任务状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum JobStatus {
    /// 已入队等待
    Pending,
    /// 处理中
    Started,
    /// 已完成
    Done,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Pending => "pending",
            JobStatus::Started => "started",
            JobStatus::Done => "done",
        }
    }
}

/// 预测任务记录
#[derive(Debug, Clone)]
pub struct Job {
    /// 与订单共享的 id
    pub id: Uuid,
    pub status: JobStatus,
    /// 完成订单的 id，仅在 Done 时填充
    pub result: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Job {
    pub fn new(order_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: order_id,
            status: JobStatus::Pending,
            result: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Job Tracker Port
///
/// 显式的任务存储对象，服务启动时创建并交给调度方，
/// 取代进程级全局 map
pub trait JobTrackerPort: Send + Sync {
    /// 以 Pending 状态登记任务并入队，返回任务 id
    ///
    /// 队列满时撤销登记并返回 `QueueFull`
    fn submit(&self, order_id: Uuid) -> Result<Uuid, JobError>;

    /// 标记任务开始处理
    fn mark_started(&self, order_id: Uuid) -> Result<(), JobError>;

    /// 标记任务完成并记录结果
    fn mark_done(&self, order_id: Uuid, result: Uuid) -> Result<(), JobError>;

    /// 查询任务
    fn get(&self, order_id: Uuid) -> Option<Job>;
}
