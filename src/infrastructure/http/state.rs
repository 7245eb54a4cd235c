//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateOrderHandler, UpdateOrderHandler,
    // Query handlers
    GetBillHandler, GetOrderHandler, ListOrdersHandler,
    // Ports
    JobTrackerPort, OrderRepositoryPort,
};

/// 应用状态
pub struct AppState {
    // ========== Command Handlers ==========
    pub create_order_handler: CreateOrderHandler,
    pub update_order_handler: UpdateOrderHandler,

    // ========== Query Handlers ==========
    pub get_order_handler: GetOrderHandler,
    pub list_orders_handler: ListOrdersHandler,
    pub get_bill_handler: GetBillHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        order_repo: Arc<dyn OrderRepositoryPort>,
        job_tracker: Arc<dyn JobTrackerPort>,
    ) -> Self {
        Self {
            create_order_handler: CreateOrderHandler::new(order_repo.clone(), job_tracker),
            update_order_handler: UpdateOrderHandler::new(order_repo.clone()),

            get_order_handler: GetOrderHandler::new(order_repo.clone()),
            list_orders_handler: ListOrdersHandler::new(order_repo.clone()),
            get_bill_handler: GetBillHandler::new(order_repo),
        }
    }
}
