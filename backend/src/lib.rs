//! Research metadata service.
//!
//! A token-gated CRUD API over researchers, conferences, editions,
//! articles, and authorship links. Every endpoint answers with one
//! envelope shape; request validation and failure translation are
//! centralised so handlers stay thin.

pub mod api;
pub mod domain;
pub mod middleware;
pub mod models;
pub mod outbound;
pub mod server;

pub use crate::middleware::BearerAuth;
