//! Bill HTTP Handler

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::GetBill;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 计算订单账单
pub async fn get_bill(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<Uuid>,
) -> Result<Json<f64>, ApiError> {
    let bill = state
        .get_bill_handler
        .handle(GetBill { order_id })
        .await?
        .ok_or(ApiError::OrderNotFound)?;
    Ok(Json(bill))
}
