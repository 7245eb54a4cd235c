//! HTTP Routes
//!
//! API Endpoints:
//! - /order        GET    订单列表
//! - /order        POST   创建订单（multipart 文件列表，后台执行预测）
//! - /order/{id}   GET    订单详情
//! - /order/{id}   PATCH  追加商品
//! - /bill/{id}    GET    账单
//! - /ping         GET    健康检查

use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route(
            "/order",
            get(handlers::list_orders).post(handlers::make_order),
        )
        .route(
            "/order/:order_id",
            get(handlers::get_order).patch(handlers::update_order),
        )
        .route("/bill/:order_id", get(handlers::get_bill))
}
