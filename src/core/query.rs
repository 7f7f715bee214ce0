//! List parameters, filter validation rules and the page envelope

use crate::core::error::OrdersError;
use crate::core::model::OrderStatus;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Query parameters of `GET /orders`
///
/// Pagination is 1-based. Filters are all optional; absent filters do not
/// restrict the result in any way.
///
/// ```text
/// GET /orders?page=2&limit=10
/// GET /orders?status=NEW&minAmount=50.00&dateFrom=2026-01-01&dateTo=2026-01-31
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListOrdersParams {
    /// Page number (starts at 1)
    #[serde(default = "default_page")]
    pub page: i64,

    /// Number of items per page, in [1, 100]
    #[serde(default = "default_limit")]
    pub limit: i64,

    pub status: Option<OrderStatus>,
    pub min_amount: Option<Decimal>,
    pub max_amount: Option<Decimal>,

    /// Inclusive lower calendar date (ISO `yyyy-MM-dd`)
    pub date_from: Option<NaiveDate>,

    /// Inclusive upper calendar date (ISO `yyyy-MM-dd`)
    pub date_to: Option<NaiveDate>,
}

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    10
}

impl Default for ListOrdersParams {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
            status: None,
            min_amount: None,
            max_amount: None,
            date_from: None,
            date_to: None,
        }
    }
}

impl ListOrdersParams {
    /// Check pagination bounds and filter-range consistency
    ///
    /// Pure checks, no side effects. Must run before any query execution.
    pub fn validate(&self) -> Result<(), OrdersError> {
        if self.page < 1 {
            return Err(OrdersError::InvalidArgument(
                "page must be at least 1".to_string(),
            ));
        }
        if self.limit < 1 || self.limit > 100 {
            return Err(OrdersError::InvalidArgument(
                "limit must be between 1 and 100".to_string(),
            ));
        }
        if let (Some(min), Some(max)) = (self.min_amount, self.max_amount)
            && min > max
        {
            return Err(OrdersError::InvalidArgument(
                "minAmount cannot be greater than maxAmount".to_string(),
            ));
        }
        if let (Some(from), Some(to)) = (self.date_from, self.date_to)
            && from > to
        {
            return Err(OrdersError::InvalidArgument(
                "dateFrom cannot be after dateTo".to_string(),
            ));
        }
        Ok(())
    }
}

/// Paged response envelope
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResponse<T> {
    pub items: Vec<T>,
    /// The requested page (1-based), echoed back
    pub page: i64,
    pub limit: i64,
    pub total_items: u64,
    pub total_pages: u64,
}

/// Total page count for a result set: `ceil(total / limit)`, 0 when empty
pub fn total_pages(total_items: u64, limit: u64) -> u64 {
    if total_items == 0 {
        0
    } else {
        total_items.div_ceil(limit.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn params() -> ListOrdersParams {
        ListOrdersParams::default()
    }

    #[test]
    fn test_defaults_pass_validation() {
        let p = params();
        assert_eq!(p.page, 1);
        assert_eq!(p.limit, 10);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_page_below_one_is_rejected() {
        for page in [0, -1, -100] {
            let p = ListOrdersParams { page, ..params() };
            let err = p.validate().unwrap_err();
            assert_eq!(err.to_string(), "page must be at least 1");
        }
    }

    #[test]
    fn test_limit_bounds_are_inclusive() {
        for limit in [1, 50, 100] {
            let p = ListOrdersParams { limit, ..params() };
            assert!(p.validate().is_ok());
        }
        for limit in [0, -1, 101, 1000] {
            let p = ListOrdersParams { limit, ..params() };
            let err = p.validate().unwrap_err();
            assert_eq!(err.to_string(), "limit must be between 1 and 100");
        }
    }

    #[test]
    fn test_inverted_amount_range_is_rejected() {
        let p = ListOrdersParams {
            min_amount: Some(dec!(100.00)),
            max_amount: Some(dec!(50.00)),
            ..params()
        };
        assert!(p.validate().is_err());

        // Equal bounds are a valid (single-value) range
        let p = ListOrdersParams {
            min_amount: Some(dec!(50.00)),
            max_amount: Some(dec!(50.00)),
            ..params()
        };
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_inverted_date_range_is_rejected() {
        let from = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let p = ListOrdersParams {
            date_from: Some(from),
            date_to: Some(to),
            ..params()
        };
        let err = p.validate().unwrap_err();
        assert_eq!(err.to_string(), "dateFrom cannot be after dateTo");
    }

    #[test]
    fn test_one_sided_ranges_are_valid() {
        let p = ListOrdersParams {
            min_amount: Some(dec!(10.00)),
            date_to: Some(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()),
            ..params()
        };
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_total_pages_is_ceiling_division() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(145, 20), 8);
    }

    #[test]
    fn test_query_string_deserialization() {
        let p: ListOrdersParams = serde_urlencoded_like(
            "page=2&limit=25&status=PAID&minAmount=10.50&dateFrom=2026-01-01",
        );
        assert_eq!(p.page, 2);
        assert_eq!(p.limit, 25);
        assert_eq!(p.status, Some(OrderStatus::Paid));
        assert_eq!(p.min_amount, Some(dec!(10.50)));
        assert_eq!(
            p.date_from,
            Some(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap())
        );
        assert_eq!(p.date_to, None);
    }

    // axum's Query extractor goes through the same serde path
    fn serde_urlencoded_like(query: &str) -> ListOrdersParams {
        let pairs: Vec<(String, String)> = query
            .split('&')
            .map(|kv| {
                let (k, v) = kv.split_once('=').unwrap();
                (k.to_string(), v.to_string())
            })
            .collect();
        let json = serde_json::Map::from_iter(pairs.iter().map(|(k, v)| {
            let value = match k.as_str() {
                "page" | "limit" => serde_json::json!(v.parse::<i64>().unwrap()),
                _ => serde_json::Value::String(v.clone()),
            };
            (k.clone(), value)
        }));
        serde_json::from_value(serde_json::Value::Object(json)).unwrap()
    }
}
