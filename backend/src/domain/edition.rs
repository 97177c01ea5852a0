//! Edition service: CRUD with counted listings.
//!
//! Store failures here translate through the shared translator like every
//! other entity; no failure is ever swallowed into an empty success.

use std::sync::Arc;

use pagination::PageRequest;
use serde_json::json;

use crate::models::{ApiResponse, EditionPatch, NewEdition};

use super::error::translate_store_error;
use super::ports::EditionStore;
use super::to_payload;

/// Business operations over edition records.
#[derive(Clone)]
pub struct EditionService {
    store: Arc<dyn EditionStore>,
}

impl EditionService {
    /// Build a service over the given store.
    pub fn new(store: Arc<dyn EditionStore>) -> Self {
        Self { store }
    }

    /// Create an edition and return the stored record.
    pub async fn create(&self, new: NewEdition) -> ApiResponse {
        match self.store.insert(new).await {
            Ok(record) => {
                ApiResponse::created("Edition created successfully", to_payload(&record))
            }
            Err(error) => translate_store_error(&error),
        }
    }

    /// Fetch one page of editions; the payload is `[records, total]`.
    pub async fn get_all(&self, page: PageRequest) -> ApiResponse {
        match self.store.find_and_count(page).await {
            Ok((records, _)) if records.is_empty() => ApiResponse::not_found("No editions found"),
            Ok((records, total)) => ApiResponse::ok(
                "Editions retrieved successfully",
                json!([to_payload(&records), total]),
            ),
            Err(error) => translate_store_error(&error),
        }
    }

    /// Fetch one edition by id.
    pub async fn get_by_id(&self, id: i64) -> ApiResponse {
        match self.store.find_by_id(id).await {
            Ok(Some(record)) => {
                ApiResponse::ok("Edition retrieved successfully", to_payload(&record))
            }
            Ok(None) => ApiResponse::not_found("Edition not found"),
            Err(error) => translate_store_error(&error),
        }
    }

    /// Patch an existing edition. Missing id is a 404 before any write.
    pub async fn update(&self, id: i64, patch: EditionPatch) -> ApiResponse {
        match self.store.find_by_id(id).await {
            Ok(Some(_)) => {}
            Ok(None) => return ApiResponse::not_found("Edition not found"),
            Err(error) => return translate_store_error(&error),
        }
        match self.store.update(id, patch).await {
            Ok(()) => ApiResponse::ok("Edition updated successfully", serde_json::Value::Null),
            Err(error) => translate_store_error(&error),
        }
    }

    /// Delete by id; deleting an absent id is a 404.
    pub async fn delete(&self, id: i64) -> ApiResponse {
        match self.store.delete(id).await {
            Ok(0) => ApiResponse::not_found("Edition not found"),
            Ok(_) => ApiResponse::ok("Edition deleted successfully", serde_json::Value::Null),
            Err(error) => translate_store_error(&error),
        }
    }
}
