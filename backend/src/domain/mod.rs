//! Domain core: entity services, ports, and failure translation.
//!
//! Services orchestrate the store ports and always answer with a complete
//! [`ApiResponse`](crate::models::ApiResponse) envelope; HTTP handlers only
//! validate input and forward. Every store failure is logged and translated
//! here, never in the adapters and never in the handlers.

pub mod auth;
pub mod error;
pub mod ports;

mod article;
mod auth_service;
mod author;
mod conference;
mod edition;
mod researcher;

pub use self::article::ArticleService;
pub use self::auth::{Claims, Credentials, Identity};
pub use self::auth_service::AuthService;
pub use self::author::AuthorService;
pub use self::conference::ConferenceService;
pub use self::edition::EditionService;
pub use self::researcher::ResearcherService;

use serde::Serialize;
use serde_json::Value;

/// Serialize a record into an envelope payload. Entity records are plain
/// data and cannot fail to serialize; a failure degrades to a null payload
/// rather than a panic.
pub(crate) fn to_payload<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}
