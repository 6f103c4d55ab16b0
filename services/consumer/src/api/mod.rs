//! HTTP API 层

mod category_handlers;
mod product_handlers;
mod routes;

pub use routes::{AppState, api_routes};
