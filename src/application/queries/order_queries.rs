//! Order Queries

use uuid::Uuid;

/// 查询单个订单
#[derive(Debug, Clone)]
pub struct GetOrder {
    pub order_id: Uuid,
}

/// 查询所有订单
#[derive(Debug, Clone)]
pub struct ListOrders;

/// 计算订单账单
#[derive(Debug, Clone)]
pub struct GetBill {
    pub order_id: Uuid,
}
