//! Typed error handling for the orders API
//!
//! Three error kinds cover everything the core can surface:
//!
//! - [`OrdersError::InvalidArgument`]: caller-supplied filter, pagination or
//!   body values violating a stated constraint (400, never retried, never
//!   logged as a fault)
//! - [`OrdersError::NotFound`]: referenced order id does not exist (404)
//! - [`OrdersError::Internal`]: any other fault; surfaced as a generic 500
//!   with a fixed message, the triggering detail stays in the log
//!
//! [`ApiError`] is the HTTP error body every failure path produces:
//! timestamp, numeric status, reason phrase, message, originating path and
//! optional structured details (e.g. a field-to-violation map).

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// The error type surfaced by the order service
#[derive(Debug)]
pub enum OrdersError {
    /// Caller-supplied value violates a stated constraint
    InvalidArgument(String),

    /// Referenced order does not exist
    NotFound { id: Uuid },

    /// Any other fault (store failure, serialization fault, ...)
    Internal(String),
}

impl fmt::Display for OrdersError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrdersError::InvalidArgument(msg) => write!(f, "{}", msg),
            OrdersError::NotFound { id } => write!(f, "Order not found: {}", id),
            OrdersError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for OrdersError {}

impl OrdersError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            OrdersError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            OrdersError::NotFound { .. } => StatusCode::NOT_FOUND,
            OrdersError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            OrdersError::InvalidArgument(_) => "INVALID_ARGUMENT",
            OrdersError::NotFound { .. } => "ORDER_NOT_FOUND",
            OrdersError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// The message exposed to callers
    ///
    /// Internal faults get a fixed message; the detail goes to the log only.
    pub fn public_message(&self) -> String {
        match self {
            OrdersError::Internal(_) => "An unexpected error occurred".to_string(),
            other => other.to_string(),
        }
    }

    /// Convert into the HTTP error body, recording the originating path
    pub fn into_api_error(self, path: &str) -> ApiError {
        if let OrdersError::Internal(detail) = &self {
            tracing::error!(path, %detail, "unhandled fault");
        }
        ApiError::new(self.status_code(), self.public_message(), path)
    }
}

impl From<anyhow::Error> for OrdersError {
    fn from(err: anyhow::Error) -> Self {
        OrdersError::Internal(err.to_string())
    }
}

/// Error response body returned on every failure path
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Moment the error response was produced
    pub timestamp: DateTime<Utc>,
    /// Numeric HTTP status code
    pub status: u16,
    /// Short reason phrase ("Bad Request", "Not Found", ...)
    pub error: String,
    /// Human-readable message
    pub message: String,
    /// Originating request path
    pub path: String,
    /// Optional structured details (e.g. field name -> violation message)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Create an error body without details
    pub fn new(status: StatusCode, message: impl Into<String>, path: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Unknown").to_string(),
            message: message.into(),
            path: path.to_string(),
            details: None,
        }
    }

    /// Attach structured details to the body
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}
