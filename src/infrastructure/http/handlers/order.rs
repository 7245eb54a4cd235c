//! Order HTTP Handlers

use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::{CreateOrder, GetOrder, ListOrders, UpdateOrder, UploadedImage};
use crate::domain::order::Product;
use crate::infrastructure::http::dto::{OrderResponse, OrderUpdateRequest};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 获取订单列表
pub async fn list_orders(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<OrderResponse>>, ApiError> {
    let orders = state.list_orders_handler.handle(ListOrders).await?;
    Ok(Json(orders.iter().map(OrderResponse::from).collect()))
}

/// 获取单个订单
pub async fn get_order(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<Uuid>,
) -> Result<Json<OrderResponse>, ApiError> {
    let order = state
        .get_order_handler
        .handle(GetOrder { order_id })
        .await?
        .ok_or(ApiError::OrderNotFound)?;
    Ok(Json(OrderResponse::from(&order)))
}

/// 创建订单
///
/// multipart 中每个文件生成一个图像推理商品；
/// 立即返回订单 id，预测在后台队列中执行
pub async fn make_order(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<Uuid>, ApiError> {
    let mut files = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let filename = field.file_name().map(|s| s.to_string());
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read file: {}", e)))?;

        files.push(UploadedImage {
            filename,
            bytes: bytes.to_vec(),
        });
    }

    let order_id = state.create_order_handler.handle(CreateOrder { files }).await?;
    Ok(Json(order_id))
}

/// 更新订单（按 id 幂等地追加商品）
pub async fn update_order(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<Uuid>,
    Json(request): Json<OrderUpdateRequest>,
) -> Result<Json<OrderResponse>, ApiError> {
    let products: Vec<Product> = request
        .products
        .into_iter()
        .map(|dto| dto.into_domain())
        .collect::<Result<_, _>>()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let order = state
        .update_order_handler
        .handle(UpdateOrder { order_id, products })
        .await?
        .ok_or(ApiError::OrderNotFound)?;
    Ok(Json(OrderResponse::from(&order)))
}
