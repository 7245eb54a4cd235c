//! Order Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::OrderRepositoryPort;
use crate::application::queries::order_queries::{GetBill, GetOrder, ListOrders};
use crate::domain::order::Order;

/// GetOrder Handler
pub struct GetOrderHandler {
    order_repo: Arc<dyn OrderRepositoryPort>,
}

impl GetOrderHandler {
    pub fn new(order_repo: Arc<dyn OrderRepositoryPort>) -> Self {
        Self { order_repo }
    }

    pub async fn handle(&self, query: GetOrder) -> Result<Option<Order>, ApplicationError> {
        Ok(self.order_repo.get(query.order_id).await?)
    }
}

/// ListOrders Handler
pub struct ListOrdersHandler {
    order_repo: Arc<dyn OrderRepositoryPort>,
}

impl ListOrdersHandler {
    pub fn new(order_repo: Arc<dyn OrderRepositoryPort>) -> Self {
        Self { order_repo }
    }

    pub async fn handle(&self, _query: ListOrders) -> Result<Vec<Order>, ApplicationError> {
        Ok(self.order_repo.get_all().await?)
    }
}

/// GetBill Handler - 账单由当前商品价格实时计算
pub struct GetBillHandler {
    order_repo: Arc<dyn OrderRepositoryPort>,
}

impl GetBillHandler {
    pub fn new(order_repo: Arc<dyn OrderRepositoryPort>) -> Self {
        Self { order_repo }
    }

    pub async fn handle(&self, query: GetBill) -> Result<Option<f64>, ApplicationError> {
        Ok(self
            .order_repo
            .get(query.order_id)
            .await?
            .map(|order| order.bill()))
    }
}
