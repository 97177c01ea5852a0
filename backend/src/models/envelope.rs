//! The uniform response envelope every endpoint returns.
//!
//! Handlers and services never build raw `HttpResponse` bodies; they return
//! an [`ApiResponse`] and the transport status code is applied from the
//! envelope's own `status` field when it is rendered.

use actix_web::body::BoxBody;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder, ResponseError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Response envelope: status code, success flag, message, payload.
///
/// Invariant: `success` is true iff `status` is in the 2xx range. Every
/// constructor enforces this; the struct is never mutated after it is
/// built. `data` is always serialized, including when it is JSON null.
///
/// # Examples
/// ```
/// use backend::models::ApiResponse;
/// use serde_json::json;
///
/// let envelope = ApiResponse::created("Conference created successfully", json!({"id": 1}));
/// assert!(envelope.success);
/// assert_eq!(envelope.status, 201);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// HTTP status code the transport layer must apply.
    pub status: u16,
    /// True iff `status` is 2xx.
    pub success: bool,
    /// Human-readable outcome description.
    pub message: String,
    /// Payload; JSON null for every failure produced by the core.
    pub data: Value,
}

impl ApiResponse {
    /// Build an envelope; `success` is derived from the status code.
    pub fn new(status: StatusCode, message: impl Into<String>, data: Value) -> Self {
        Self {
            status: status.as_u16(),
            success: status.is_success(),
            message: message.into(),
            data,
        }
    }

    /// `200 OK` with payload.
    pub fn ok(message: impl Into<String>, data: Value) -> Self {
        Self::new(StatusCode::OK, message, data)
    }

    /// `201 Created` with the created record.
    pub fn created(message: impl Into<String>, data: Value) -> Self {
        Self::new(StatusCode::CREATED, message, data)
    }

    /// `400 Bad Request`; `data` carries the violation list when there is one.
    pub fn bad_request(message: impl Into<String>, data: Value) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message, data)
    }

    /// `401 Unauthorized`, data null.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message, Value::Null)
    }

    /// `404 Not Found`, data null.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message, Value::Null)
    }

    /// `500 Internal Server Error`, data null.
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message, Value::Null)
    }

    /// `504 Gateway Timeout`, data null.
    pub fn gateway_timeout(message: impl Into<String>) -> Self {
        Self::new(StatusCode::GATEWAY_TIMEOUT, message, Value::Null)
    }

    /// Status code parsed back from the stored integer.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl Responder for ApiResponse {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}

/// Short-circuit carrier for validator and gate rejections.
///
/// Validators return `Result<T, Rejection>`; the dispatch pipeline stops on
/// the rejection variant and renders the wrapped envelope without invoking
/// the business handler.
#[derive(Debug, Clone, Error)]
#[error("{}", .0.message)]
pub struct Rejection(pub ApiResponse);

impl ResponseError for Rejection {
    fn status_code(&self) -> StatusCode {
        self.0.status_code()
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.0.status_code()).json(&self.0)
    }
}

/// Handler result alias: either an envelope or a rejection envelope.
pub type ApiResult = Result<ApiResponse, Rejection>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(ApiResponse::ok("ok", Value::Null), 200, true)]
    #[case(ApiResponse::created("made", json!({"id": 1})), 201, true)]
    #[case(ApiResponse::bad_request("bad", Value::Null), 400, false)]
    #[case(ApiResponse::unauthorized("no"), 401, false)]
    #[case(ApiResponse::not_found("gone"), 404, false)]
    #[case(ApiResponse::internal_error("boom"), 500, false)]
    #[case(ApiResponse::gateway_timeout("slow"), 504, false)]
    fn success_tracks_status_range(
        #[case] envelope: ApiResponse,
        #[case] status: u16,
        #[case] success: bool,
    ) {
        assert_eq!(envelope.status, status);
        assert_eq!(envelope.success, success);
    }

    #[test]
    fn null_data_is_serialized() {
        let body = serde_json::to_value(ApiResponse::not_found("Conference not found"))
            .expect("envelope serializes");
        assert_eq!(
            body,
            json!({
                "status": 404,
                "success": false,
                "message": "Conference not found",
                "data": null
            })
        );
    }

    #[test]
    fn rejection_renders_envelope_status() {
        let rejection = Rejection(ApiResponse::bad_request(
            "Invalid ID",
            json!({"errors": ["Invalid ID"]}),
        ));
        assert_eq!(rejection.status_code(), StatusCode::BAD_REQUEST);
        let response = rejection.error_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
