//! Storage trait for order records

use crate::core::filter::OrderFilter;
use crate::core::model::{NewOrder, Order};
use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// One page of a query result
#[derive(Debug, Clone)]
pub struct OrderPage {
    pub items: Vec<Order>,
    /// Number of records matching the filter across all pages
    pub total_items: u64,
    /// `ceil(total_items / limit)`, 0 when nothing matches
    pub total_pages: u64,
}

/// Persistence seam for order records
///
/// Implementations own id and `created_at` assignment on insert. Single-
/// record atomicity comes from the backing store; no coordination happens
/// above this trait.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persist a new order, assigning its id and creation timestamp
    async fn insert(&self, new_order: NewOrder) -> Result<Order>;

    /// Replace an existing record (keyed by `order.id`)
    async fn save(&self, order: Order) -> Result<Order>;

    /// Fetch a record by id
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Order>>;

    /// Whether a record with this id exists
    async fn exists_by_id(&self, id: &Uuid) -> Result<bool>;

    /// Remove a record; absent ids are not an error here, callers check
    /// existence first to tell "deleted" from "already absent"
    async fn delete_by_id(&self, id: &Uuid) -> Result<()>;

    /// Run a filtered, paged query
    ///
    /// `page0` is 0-based. Results are always ordered by `created_at`
    /// descending (newest first); the ordering is not configurable.
    async fn query(&self, filter: &OrderFilter, page0: usize, limit: usize) -> Result<OrderPage>;
}
