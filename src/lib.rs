//! # Orders API
//!
//! A CRUD API for managing orders: create, fetch-by-id, list with
//! pagination and filtering, update and delete.
//!
//! The heart of the crate is the listing pipeline:
//!
//! 1. [`ListOrdersParams::validate`](core::query::ListOrdersParams::validate)
//!    checks pagination bounds and filter-range consistency
//! 2. [`OrderFilter::build`](core::filter::OrderFilter::build) turns the
//!    present filter inputs into an AND-combined clause list
//! 3. [`OrderStore::query`](core::store::OrderStore::query) retrieves one
//!    page, always ordered by creation time descending
//! 4. [`OrderService::list`](core::service::OrderService::list) shapes the
//!    result into the paged response envelope
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use orders_api::prelude::*;
//!
//! let store = Arc::new(InMemoryOrderStore::new());
//! let service = OrderService::new(store);
//! let app = build_order_routes(AppState { service });
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        dto::{CreateOrderRequest, OrderResponse, UpdateOrderRequest},
        error::{ApiError, OrdersError},
        filter::{OrderClause, OrderFilter},
        model::{NewOrder, Order, OrderStatus},
        query::{ListOrdersParams, PagedResponse},
        service::OrderService,
        store::{OrderPage, OrderStore},
    };

    // === Storage ===
    pub use crate::storage::InMemoryOrderStore;

    // === Server ===
    pub use crate::server::{AppState, build_order_routes};

    // === Config ===
    pub use crate::config::ServerConfig;

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, NaiveDate, Utc};
    pub use rust_decimal::Decimal;
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;
}
