//! Order entity and status enumeration

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of an order
///
/// Plain attribute, not a state machine: any status may transition to any
/// other via update. Wire form is UPPERCASE (`"NEW"`, `"PAID"`, `"CANCELLED"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    #[default]
    New,
    Paid,
    Cancelled,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::New => write!(f, "NEW"),
            OrderStatus::Paid => write!(f, "PAID"),
            OrderStatus::Cancelled => write!(f, "CANCELLED"),
        }
    }
}

/// Persisted order record
///
/// `id` and `created_at` are assigned by the store on insert and never
/// mutated afterwards. `amount` is an exact decimal, strictly positive.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: Uuid,
    pub customer_name: String,
    pub status: OrderStatus,
    pub amount: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Fields needed to mint a new [`Order`]
///
/// The store assigns `id` and `created_at` when inserting.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub customer_name: String,
    pub status: OrderStatus,
    pub amount: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_form_is_uppercase() {
        assert_eq!(serde_json::to_string(&OrderStatus::New).unwrap(), "\"NEW\"");
        assert_eq!(
            serde_json::to_string(&OrderStatus::Cancelled).unwrap(),
            "\"CANCELLED\""
        );

        let status: OrderStatus = serde_json::from_str("\"PAID\"").unwrap();
        assert_eq!(status, OrderStatus::Paid);
    }

    #[test]
    fn test_status_defaults_to_new() {
        assert_eq!(OrderStatus::default(), OrderStatus::New);
    }

    #[test]
    fn test_malformed_status_is_rejected() {
        let result: Result<OrderStatus, _> = serde_json::from_str("\"SHIPPED\"");
        assert!(result.is_err());
    }
}
