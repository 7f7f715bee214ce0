//! HTTP exposure: extractors, handlers and router

pub mod extract;
pub mod handlers;
pub mod router;

pub use extract::{ApiQuery, ValidatedJson};
pub use handlers::AppState;
pub use router::build_order_routes;
