//! Predicate builder for order listing
//!
//! A filter is an ordered list of clauses, one per present input, combined
//! with logical AND. An empty list matches every record, so omitted filters
//! never restrict the result.

use crate::core::model::{Order, OrderStatus};
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;

/// A single boolean condition over order fields
#[derive(Debug, Clone, PartialEq)]
pub enum OrderClause {
    /// `status == value`
    StatusEq(OrderStatus),
    /// `amount >= value`
    AmountGte(Decimal),
    /// `amount <= value`
    AmountLte(Decimal),
    /// `created_at >= value` (start of a calendar day, UTC)
    CreatedFrom(DateTime<Utc>),
    /// `created_at <= value` (last instant of a calendar day, UTC)
    CreatedTo(DateTime<Utc>),
}

impl OrderClause {
    fn matches(&self, order: &Order) -> bool {
        match self {
            OrderClause::StatusEq(status) => order.status == *status,
            OrderClause::AmountGte(min) => order.amount >= *min,
            OrderClause::AmountLte(max) => order.amount <= *max,
            OrderClause::CreatedFrom(from) => order.created_at >= *from,
            OrderClause::CreatedTo(to) => order.created_at <= *to,
        }
    }
}

/// Composed filter condition for order queries
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    clauses: Vec<OrderClause>,
}

impl OrderFilter {
    /// Build the combined condition from the optional filter inputs
    ///
    /// Only present inputs contribute a clause. Calendar dates are widened
    /// to full UTC days: `date_from` becomes an inclusive start-of-day lower
    /// bound, `date_to` an inclusive bound at the instant immediately before
    /// the following day starts.
    pub fn build(
        status: Option<OrderStatus>,
        min_amount: Option<Decimal>,
        max_amount: Option<Decimal>,
        date_from: Option<NaiveDate>,
        date_to: Option<NaiveDate>,
    ) -> Self {
        let mut clauses = Vec::new();

        if let Some(status) = status {
            clauses.push(OrderClause::StatusEq(status));
        }
        if let Some(min) = min_amount {
            clauses.push(OrderClause::AmountGte(min));
        }
        if let Some(max) = max_amount {
            clauses.push(OrderClause::AmountLte(max));
        }
        if let Some(from) = date_from {
            clauses.push(OrderClause::CreatedFrom(start_of_day_utc(from)));
        }
        if let Some(to) = date_to {
            clauses.push(OrderClause::CreatedTo(end_of_day_utc(to)));
        }

        Self { clauses }
    }

    /// Evaluate the condition against a record (AND of all clauses)
    pub fn matches(&self, order: &Order) -> bool {
        self.clauses.iter().all(|clause| clause.matches(order))
    }

    /// Whether the filter restricts anything at all
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// The clauses in build order
    pub fn clauses(&self) -> &[OrderClause] {
        &self.clauses
    }
}

fn start_of_day_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

fn end_of_day_utc(date: NaiveDate) -> DateTime<Utc> {
    match date.succ_opt() {
        Some(next_day) => start_of_day_utc(next_day) - Duration::nanoseconds(1),
        // NaiveDate::MAX has no following day
        None => DateTime::<Utc>::MAX_UTC,
    }
}
