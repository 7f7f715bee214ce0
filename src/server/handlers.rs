//! Order HTTP handlers
//!
//! Handlers stay thin: extract, delegate to [`OrderService`], map the error
//! taxonomy into the HTTP error body. All business logic lives in the
//! service.

use crate::core::dto::{CreateOrderRequest, OrderResponse, UpdateOrderRequest};
use crate::core::error::ApiError;
use crate::core::query::{ListOrdersParams, PagedResponse};
use crate::core::service::OrderService;
use crate::server::extract::{ApiQuery, ValidatedJson};
use axum::extract::{OriginalUri, Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde_json::{Value, json};
use uuid::Uuid;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub service: OrderService,
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn create_order(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    ValidatedJson(payload): ValidatedJson<CreateOrderRequest>,
) -> Result<(StatusCode, Json<OrderResponse>), ApiError> {
    let response = state
        .service
        .create(payload)
        .await
        .map_err(|e| e.into_api_error(uri.path()))?;

    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn list_orders(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    ApiQuery(params): ApiQuery<ListOrdersParams>,
) -> Result<Json<PagedResponse<OrderResponse>>, ApiError> {
    let response = state
        .service
        .list(params)
        .await
        .map_err(|e| e.into_api_error(uri.path()))?;

    Ok(Json(response))
}

pub async fn get_order(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
) -> Result<Json<OrderResponse>, ApiError> {
    let id = parse_order_id(&id, uri.path())?;

    let response = state
        .service
        .get_by_id(&id)
        .await
        .map_err(|e| e.into_api_error(uri.path()))?;

    Ok(Json(response))
}

pub async fn update_order(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateOrderRequest>,
) -> Result<Json<OrderResponse>, ApiError> {
    let id = parse_order_id(&id, uri.path())?;

    let response = state
        .service
        .update(&id, payload)
        .await
        .map_err(|e| e.into_api_error(uri.path()))?;

    Ok(Json(response))
}

pub async fn delete_order(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_order_id(&id, uri.path())?;

    state
        .service
        .delete(&id)
        .await
        .map_err(|e| e.into_api_error(uri.path()))?;

    Ok(StatusCode::NO_CONTENT)
}

fn parse_order_id(raw: &str, path: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| {
        ApiError::new(
            StatusCode::BAD_REQUEST,
            format!("invalid order id: {}", raw),
            path,
        )
    })
}
