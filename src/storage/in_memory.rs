//! In-memory implementation of OrderStore for testing and development

use crate::core::filter::OrderFilter;
use crate::core::model::{NewOrder, Order};
use crate::core::query::total_pages;
use crate::core::store::{OrderPage, OrderStore};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// In-memory order store
///
/// Useful for testing and development. Uses RwLock for thread-safe access.
#[derive(Clone)]
pub struct InMemoryOrderStore {
    orders: Arc<RwLock<HashMap<Uuid, Order>>>,
}

impl InMemoryOrderStore {
    /// Create a new in-memory order store
    pub fn new() -> Self {
        Self {
            orders: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryOrderStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn insert(&self, new_order: NewOrder) -> Result<Order> {
        let mut orders = self
            .orders
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let order = Order {
            id: Uuid::new_v4(),
            customer_name: new_order.customer_name,
            status: new_order.status,
            amount: new_order.amount,
            created_at: Utc::now(),
        };
        orders.insert(order.id, order.clone());

        Ok(order)
    }

    async fn save(&self, order: Order) -> Result<Order> {
        let mut orders = self
            .orders
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        orders
            .get_mut(&order.id)
            .ok_or_else(|| anyhow!("Order not present in store: {}", order.id))?;

        orders.insert(order.id, order.clone());

        Ok(order)
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Order>> {
        let orders = self
            .orders
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(orders.get(id).cloned())
    }

    async fn exists_by_id(&self, id: &Uuid) -> Result<bool> {
        let orders = self
            .orders
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(orders.contains_key(id))
    }

    async fn delete_by_id(&self, id: &Uuid) -> Result<()> {
        let mut orders = self
            .orders
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        orders.remove(id);

        Ok(())
    }

    async fn query(&self, filter: &OrderFilter, page0: usize, limit: usize) -> Result<OrderPage> {
        let orders = self
            .orders
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        let mut matching: Vec<Order> = orders
            .values()
            .filter(|order| filter.matches(order))
            .cloned()
            .collect();

        // Fixed ordering: newest first; id as deterministic tiebreak for
        // records created in the same instant
        matching.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });

        let total_items = matching.len() as u64;
        let items: Vec<Order> = matching
            .into_iter()
            .skip(page0.saturating_mul(limit))
            .take(limit)
            .collect();

        Ok(OrderPage {
            items,
            total_items,
            total_pages: total_pages(total_items, limit as u64),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::OrderStatus;
    use rust_decimal_macros::dec;

    fn new_order(name: &str, amount: rust_decimal::Decimal) -> NewOrder {
        NewOrder {
            customer_name: name.to_string(),
            status: OrderStatus::New,
            amount,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_timestamp() {
        let store = InMemoryOrderStore::new();
        let before = Utc::now();

        let order = store.insert(new_order("Acme", dec!(10.00))).await.unwrap();

        assert_eq!(order.customer_name, "Acme");
        assert_eq!(order.amount, dec!(10.00));
        assert!(order.created_at >= before);
        assert!(order.created_at <= Utc::now());
    }

    #[tokio::test]
    async fn test_find_by_id_round_trip() {
        let store = InMemoryOrderStore::new();
        let order = store.insert(new_order("Acme", dec!(10.00))).await.unwrap();

        let found = store.find_by_id(&order.id).await.unwrap();
        assert_eq!(found, Some(order));

        let missing = store.find_by_id(&Uuid::new_v4()).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_save_replaces_existing_record() {
        let store = InMemoryOrderStore::new();
        let mut order = store.insert(new_order("Acme", dec!(10.00))).await.unwrap();

        order.status = OrderStatus::Paid;
        store.save(order.clone()).await.unwrap();

        let found = store.find_by_id(&order.id).await.unwrap().unwrap();
        assert_eq!(found.status, OrderStatus::Paid);
    }

    #[tokio::test]
    async fn test_save_unknown_id_fails() {
        let store = InMemoryOrderStore::new();
        let order = Order {
            id: Uuid::new_v4(),
            customer_name: "Nobody".to_string(),
            status: OrderStatus::New,
            amount: dec!(1.00),
            created_at: Utc::now(),
        };

        assert!(store.save(order).await.is_err());
    }

    #[tokio::test]
    async fn test_exists_and_delete() {
        let store = InMemoryOrderStore::new();
        let order = store.insert(new_order("Acme", dec!(10.00))).await.unwrap();

        assert!(store.exists_by_id(&order.id).await.unwrap());

        store.delete_by_id(&order.id).await.unwrap();
        assert!(!store.exists_by_id(&order.id).await.unwrap());

        // Deleting an absent id is a no-op at this layer
        store.delete_by_id(&order.id).await.unwrap();
    }

    #[tokio::test]
    async fn test_query_sorts_newest_first() {
        let store = InMemoryOrderStore::new();
        let first = store.insert(new_order("a", dec!(1))).await.unwrap();
        let second = store.insert(new_order("b", dec!(2))).await.unwrap();
        let third = store.insert(new_order("c", dec!(3))).await.unwrap();

        let page = store
            .query(&OrderFilter::default(), 0, 10)
            .await
            .unwrap();

        assert_eq!(page.total_items, 3);
        assert_eq!(page.total_pages, 1);

        // Insertion order ascending, so newest (or id-tiebroken) first;
        // verify the ordering key directly
        let ids: Vec<Uuid> = page.items.iter().map(|o| o.id).collect();
        assert!(ids.contains(&first.id) && ids.contains(&second.id) && ids.contains(&third.id));
        for pair in page.items.windows(2) {
            assert!(
                pair[0].created_at > pair[1].created_at
                    || (pair[0].created_at == pair[1].created_at && pair[0].id < pair[1].id)
            );
        }
    }

    #[tokio::test]
    async fn test_query_pages_slice_the_result() {
        let store = InMemoryOrderStore::new();
        for i in 0..5 {
            store
                .insert(new_order(&format!("c{}", i), dec!(1)))
                .await
                .unwrap();
        }

        let page0 = store.query(&OrderFilter::default(), 0, 2).await.unwrap();
        let page1 = store.query(&OrderFilter::default(), 1, 2).await.unwrap();
        let page2 = store.query(&OrderFilter::default(), 2, 2).await.unwrap();
        let page3 = store.query(&OrderFilter::default(), 3, 2).await.unwrap();

        assert_eq!(page0.items.len(), 2);
        assert_eq!(page1.items.len(), 2);
        assert_eq!(page2.items.len(), 1);
        assert_eq!(page3.items.len(), 0);
        assert_eq!(page0.total_items, 5);
        assert_eq!(page0.total_pages, 3);
    }

    #[tokio::test]
    async fn test_query_empty_store_has_zero_pages() {
        let store = InMemoryOrderStore::new();
        let page = store.query(&OrderFilter::default(), 0, 10).await.unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.total_items, 0);
        assert_eq!(page.total_pages, 0);
    }

    #[tokio::test]
    async fn test_query_applies_the_filter() {
        let store = InMemoryOrderStore::new();
        store.insert(new_order("cheap", dec!(5))).await.unwrap();
        store.insert(new_order("mid", dec!(50))).await.unwrap();
        store.insert(new_order("dear", dec!(500))).await.unwrap();

        let filter = OrderFilter::build(None, Some(dec!(10)), Some(dec!(100)), None, None);
        let page = store.query(&filter, 0, 10).await.unwrap();

        assert_eq!(page.total_items, 1);
        assert_eq!(page.items[0].customer_name, "mid");
    }
}
