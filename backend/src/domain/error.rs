//! Translation of store failures into response envelopes.
//!
//! All entity services funnel [`StoreError`] through [`translate_store_error`]
//! so every unexpected store failure renders the same `500` triple. The auth
//! service keeps its historical finer-grained mapping via
//! [`translate_auth_store_error`].

use crate::models::ApiResponse;

use super::ports::StoreError;

/// Map a store failure to the uniform entity-service envelope.
///
/// Entity endpoints deliberately collapse every store failure to `500`; the
/// message distinguishes the three variants without leaking adapter detail.
pub fn translate_store_error(error: &StoreError) -> ApiResponse {
    tracing::error!(error = %error, "store operation failed");
    match error {
        StoreError::QueryFailed { .. } => ApiResponse::internal_error("Error executing query"),
        StoreError::Timeout => ApiResponse::internal_error("Timeout error"),
        StoreError::Unknown { .. } => ApiResponse::internal_error("Unknown error"),
    }
}

/// Map a store failure to the auth-service envelope.
///
/// Auth endpoints distinguish client-visible classes: a rejected query maps
/// to `400`, a timeout to `504`, everything else to `500`.
pub fn translate_auth_store_error(error: &StoreError) -> ApiResponse {
    tracing::error!(error = %error, "auth store operation failed");
    match error {
        StoreError::QueryFailed { .. } => {
            ApiResponse::bad_request("Database query error", serde_json::Value::Null)
        }
        StoreError::Timeout => ApiResponse::gateway_timeout("Database timeout"),
        StoreError::Unknown { .. } => ApiResponse::internal_error("Internal database error"),
    }
}
