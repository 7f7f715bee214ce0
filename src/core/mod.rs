//! Core module containing the order domain: model, validation, filtering,
//! storage seam and service

pub mod dto;
pub mod error;
pub mod filter;
pub mod model;
pub mod query;
pub mod service;
pub mod store;

pub use dto::{CreateOrderRequest, OrderResponse, UpdateOrderRequest};
pub use error::{ApiError, OrdersError};
pub use filter::{OrderClause, OrderFilter};
pub use model::{NewOrder, Order, OrderStatus};
pub use query::{ListOrdersParams, PagedResponse};
pub use service::OrderService;
pub use store::{OrderPage, OrderStore};
