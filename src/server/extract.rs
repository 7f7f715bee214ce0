//! Axum extractors that reject malformed input with the API error body
//!
//! These run the inbound validation layer before a request reaches a
//! handler: `ValidatedJson<T>` parses the body and applies the `validator`
//! constraints declared on the DTO; `ApiQuery<T>` parses the query string.
//! Both reject with a 400 carrying the [`ApiError`] shape.

use crate::core::error::ApiError;
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use serde_json::json;
use validator::Validate;

/// JSON body extractor that validates the payload before the handler runs
///
/// ```rust,ignore
/// pub async fn create_order(
///     ValidatedJson(payload): ValidatedJson<CreateOrderRequest>,
/// ) -> ... {
///     // payload is already validated
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let path = req.uri().path().to_string();

        let Json(payload): Json<T> = Json::from_request(req, state)
            .await
            .map_err(|rejection| {
                ApiError::new(StatusCode::BAD_REQUEST, rejection.body_text(), &path)
            })?;

        if let Err(errors) = payload.validate() {
            let mut field_errors = serde_json::Map::new();
            for (field, violations) in errors.field_errors() {
                let message = violations
                    .first()
                    .and_then(|v| v.message.as_ref())
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "invalid value".to_string());
                field_errors.insert(field.to_string(), json!(message));
            }

            return Err(
                ApiError::new(StatusCode::BAD_REQUEST, "Validation failed", &path)
                    .with_details(json!({ "fieldErrors": field_errors })),
            );
        }

        Ok(ValidatedJson(payload))
    }
}

/// Query-string extractor that rejects malformed values with the error body
///
/// Covers request-shape failures such as an unknown status value or a bad
/// date; range and bound checks stay in the service layer.
pub struct ApiQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let path = parts.uri.path().to_string();

        let Query(params) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                ApiError::new(StatusCode::BAD_REQUEST, rejection.body_text(), &path)
            })?;

        Ok(ApiQuery(params))
    }
}
