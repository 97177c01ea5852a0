//! App assembly: route registration and payload configuration shared by
//! the binary and the test harnesses.

pub mod config;

use actix_web::{Error, web};
use serde_json::json;

use crate::api;
use crate::models::{ApiResponse, Rejection};

pub use self::config::ServerConfig;

/// Register the full route tree: health probes plus the `/api` scope.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(api::health::scope()).service(
        web::scope("/api")
            .service(api::auth::scope())
            .service(api::researcher::scope())
            .service(api::conference::scope())
            .service(api::edition::scope())
            .service(api::article::scope())
            .service(api::author::scope()),
    );
}

/// JSON extractor configuration: malformed payloads render the standard
/// `Validation failed` envelope instead of the framework default.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let envelope = ApiResponse::bad_request(
            "Validation failed",
            json!({ "errors": [err.to_string()] }),
        );
        Error::from(Rejection(envelope))
    })
}
