//! Order Context - Aggregate Root

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::product::{Classification, Product};
use super::value_objects::OrderStatus;

/// Order 聚合根
///
/// 不变量:
/// - 商品 id 在订单内唯一，重复添加为 no-op
/// - 商品保持插入顺序
/// - 状态只向前推进，不回退
/// - bill 始终可由当前商品重新计算
#[derive(Debug, Clone)]
pub struct Order {
    id: Uuid,
    products: Vec<Product>,
    status: OrderStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Order {
    /// 创建新订单，初始状态为 Pending
    pub fn new(products: Vec<Product>) -> Self {
        let now = Utc::now();
        let mut order = Self {
            id: Uuid::new_v4(),
            products: Vec::new(),
            status: OrderStatus::Pending,
            created_at: now,
            updated_at: now,
        };
        for product in products {
            order.add_product(product);
        }
        order
    }

    // Getters
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// 账单 = 当前商品价格之和
    pub fn bill(&self) -> f64 {
        self.products.iter().map(|p| p.price()).sum()
    }

    /// 添加商品，按 id 幂等
    ///
    /// 返回 false 表示同 id 商品已存在，本次调用未做任何修改
    pub fn add_product(&mut self, product: Product) -> bool {
        if self.products.iter().any(|p| p.id() == product.id()) {
            return false;
        }
        self.products.push(product);
        self.updated_at = Utc::now();
        true
    }

    /// 推进订单状态
    ///
    /// 回退方向的转换被忽略
    pub fn update_status(&mut self, status: OrderStatus) {
        if status < self.status {
            return;
        }
        self.status = status;
        self.updated_at = Utc::now();
    }

    /// 为指定商品记录推理结果
    ///
    /// 返回 false 表示商品不存在
    pub fn attach_output(&mut self, product_id: Uuid, output: Vec<Classification>) -> bool {
        match self.products.iter_mut().find(|p| p.id() == product_id) {
            Some(product) => {
                product.update_output(output);
                self.updated_at = Utc::now();
                true
            }
            None => false,
        }
    }
}
