//! Query Handlers

mod order_handlers;

pub use order_handlers::{GetBillHandler, GetOrderHandler, ListOrdersHandler};
