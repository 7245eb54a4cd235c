//! Command Handlers

mod order_handlers;
mod predict_handlers;

pub use order_handlers::{CreateOrderHandler, UpdateOrderHandler};
pub use predict_handlers::PredictOrderHandler;
