//! Request and response projections for the order endpoints
//!
//! Inbound constraints live here as `validator` derives and are enforced by
//! the [`ValidatedJson`](crate::server::extract::ValidatedJson) extractor
//! before a request reaches the service. Wire field names are camelCase.

use crate::core::model::{Order, OrderStatus};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Body of `POST /orders`
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[validate(custom(function = non_blank))]
    pub customer_name: String,

    /// Defaults to [`OrderStatus::New`] when absent
    pub status: Option<OrderStatus>,

    #[validate(custom(function = positive_amount))]
    pub amount: Decimal,
}

/// Body of `PUT /orders/{id}`
///
/// Every field is independently optional: a present field overwrites the
/// stored value, an absent field leaves it unchanged. There is no way to
/// clear a field.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderRequest {
    #[validate(length(max = 255, message = "customerName must be at most 255 characters"))]
    pub customer_name: Option<String>,

    #[validate(custom(function = positive_amount))]
    pub amount: Option<Decimal>,

    pub status: Option<OrderStatus>,
}

/// Projection of an [`Order`] returned by every endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: Uuid,
    pub customer_name: String,
    pub status: OrderStatus,
    pub amount: Decimal,
    pub created_at: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            customer_name: order.customer_name,
            status: order.status,
            amount: order.amount,
            created_at: order.created_at,
        }
    }
}

fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("non_blank");
        err.message = Some("customerName must not be blank".into());
        return Err(err);
    }
    Ok(())
}

fn positive_amount(value: &Decimal) -> Result<(), ValidationError> {
    if *value <= Decimal::ZERO {
        let mut err = ValidationError::new("positive");
        err.message = Some("amount must be greater than 0".into());
        return Err(err);
    }
    Ok(())
}
