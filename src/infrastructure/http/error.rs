//! HTTP Error Handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;

/// 订单未找到的用户提示文案（保持既有 API 文案不变）
pub const ORDER_NOT_FOUND_MESSAGE: &str = "주문 정보를 찾을 수 없습니다";

/// message 响应体
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    /// 订单不存在。既有契约：以 HTTP 200 + message 体返回，而非 404
    OrderNotFound,
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::OrderNotFound => {
                tracing::warn!("Order not found");
                (
                    StatusCode::OK,
                    Json(MessageResponse::new(ORDER_NOT_FOUND_MESSAGE)),
                )
                    .into_response()
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!(error = %msg, "Bad request");
                (StatusCode::BAD_REQUEST, Json(MessageResponse::new(msg))).into_response()
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(MessageResponse::new(msg)),
                )
                    .into_response()
            }
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::NotFound { .. } => ApiError::OrderNotFound,
            ApplicationError::ValidationError(msg) => ApiError::BadRequest(msg),
            ApplicationError::RepositoryError(msg)
            | ApplicationError::InferenceError(msg)
            | ApplicationError::InternalError(msg) => ApiError::Internal(msg),
        }
    }
}
