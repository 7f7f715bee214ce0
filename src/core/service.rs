//! Order service: orchestrates validation, filtering, pagination and CRUD

use crate::core::dto::{CreateOrderRequest, OrderResponse, UpdateOrderRequest};
use crate::core::error::OrdersError;
use crate::core::filter::OrderFilter;
use crate::core::model::NewOrder;
use crate::core::query::{ListOrdersParams, PagedResponse};
use crate::core::store::OrderStore;
use std::sync::Arc;
use uuid::Uuid;

/// Application service owning the order CRUD semantics
///
/// Holds no state beyond the shared store handle; every call is handled
/// independently. Read-modify-write during update relies on the store's
/// single-record guarantees (last write wins).
#[derive(Clone)]
pub struct OrderService {
    store: Arc<dyn OrderStore>,
}

impl OrderService {
    /// Create a service over the given store
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self { store }
    }

    /// Create a new order; status defaults to NEW when absent
    pub async fn create(&self, request: CreateOrderRequest) -> Result<OrderResponse, OrdersError> {
        let new_order = NewOrder {
            customer_name: request.customer_name,
            status: request.status.unwrap_or_default(),
            amount: request.amount,
        };

        let order = self.store.insert(new_order).await?;
        tracing::info!(id = %order.id, status = %order.status, "order created");

        Ok(OrderResponse::from(order))
    }

    /// List orders with pagination and optional filters
    ///
    /// Validation runs before any query execution; the combined filter is
    /// the AND of the clauses whose input is present.
    pub async fn list(
        &self,
        params: ListOrdersParams,
    ) -> Result<PagedResponse<OrderResponse>, OrdersError> {
        params.validate()?;

        let filter = OrderFilter::build(
            params.status,
            params.min_amount,
            params.max_amount,
            params.date_from,
            params.date_to,
        );

        // The API is 1-based, the store addresses pages from 0; this is the
        // single place the conversion happens.
        let page0 = (params.page - 1) as usize;
        let result = self
            .store
            .query(&filter, page0, params.limit as usize)
            .await?;

        Ok(PagedResponse {
            items: result.items.into_iter().map(OrderResponse::from).collect(),
            page: params.page,
            limit: params.limit,
            total_items: result.total_items,
            total_pages: result.total_pages,
        })
    }

    /// Fetch a single order by id
    pub async fn get_by_id(&self, id: &Uuid) -> Result<OrderResponse, OrdersError> {
        let order = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(OrdersError::NotFound { id: *id })?;

        Ok(OrderResponse::from(order))
    }

    /// Partially update an order: only fields present in the request change
    pub async fn update(
        &self,
        id: &Uuid,
        request: UpdateOrderRequest,
    ) -> Result<OrderResponse, OrdersError> {
        let mut order = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(OrdersError::NotFound { id: *id })?;

        if let Some(customer_name) = request.customer_name {
            order.customer_name = customer_name;
        }
        if let Some(amount) = request.amount {
            order.amount = amount;
        }
        if let Some(status) = request.status {
            order.status = status;
        }

        let saved = self.store.save(order).await?;
        tracing::info!(id = %saved.id, "order updated");

        Ok(OrderResponse::from(saved))
    }

    /// Hard-delete an order
    pub async fn delete(&self, id: &Uuid) -> Result<(), OrdersError> {
        if !self.store.exists_by_id(id).await? {
            return Err(OrdersError::NotFound { id: *id });
        }

        self.store.delete_by_id(id).await?;
        tracing::info!(%id, "order deleted");

        Ok(())
    }
}
