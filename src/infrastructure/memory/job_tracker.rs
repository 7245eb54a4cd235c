//! In-Memory Job Tracker Implementation

use chrono::Utc;
use dashmap::DashMap;
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::application::ports::{Job, JobError, JobStatus, JobTrackerPort};

/// 内存任务簿记
///
/// 已完成的 Job 常驻内存不清理，保留原系统行为（见 DESIGN.md）
pub struct InMemoryJobTracker {
    /// order_id -> Job
    jobs: DashMap<Uuid, Job>,
    /// 任务队列发送端
    queue_sender: mpsc::Sender<Uuid>,
}

impl InMemoryJobTracker {
    pub fn new(queue_sender: mpsc::Sender<Uuid>) -> Self {
        Self {
            jobs: DashMap::new(),
            queue_sender,
        }
    }
}

impl JobTrackerPort for InMemoryJobTracker {
    fn submit(&self, order_id: Uuid) -> Result<Uuid, JobError> {
        self.jobs.insert(order_id, Job::new(order_id));

        // 入队失败时撤销登记，任务不能停留在无人消费的 Pending
        if let Err(e) = self.queue_sender.try_send(order_id) {
            self.jobs.remove(&order_id);
            tracing::warn!(order_id = %order_id, error = %e, "Failed to enqueue prediction job");
            return Err(JobError::QueueFull(order_id));
        }

        tracing::debug!(order_id = %order_id, "Prediction job submitted");
        Ok(order_id)
    }

    fn mark_started(&self, order_id: Uuid) -> Result<(), JobError> {
        let mut job = self
            .jobs
            .get_mut(&order_id)
            .ok_or(JobError::NotFound(order_id))?;
        job.status = JobStatus::Started;
        job.updated_at = Utc::now();
        Ok(())
    }

    fn mark_done(&self, order_id: Uuid, result: Uuid) -> Result<(), JobError> {
        let mut job = self
            .jobs
            .get_mut(&order_id)
            .ok_or(JobError::NotFound(order_id))?;
        job.status = JobStatus::Done;
        job.result = Some(result);
        job.updated_at = Utc::now();
        Ok(())
    }

    fn get(&self, order_id: Uuid) -> Option<Job> {
        self.jobs.get(&order_id).map(|job| job.clone())
    }
}
