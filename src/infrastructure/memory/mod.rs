//! Memory Layer - In-Memory State Management
//!
//! 实现 OrderRepository 和 JobTracker 的内存版本

mod job_tracker;
mod order_repo;

pub use job_tracker::InMemoryJobTracker;
pub use order_repo::InMemoryOrderRepository;
