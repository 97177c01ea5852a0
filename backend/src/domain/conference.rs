//! Conference service: CRUD with counted listings and the editions view.

use std::sync::Arc;

use pagination::PageRequest;
use serde_json::json;

use crate::models::{ApiResponse, Conference, ConferencePatch};

use super::error::translate_store_error;
use super::ports::ConferenceStore;
use super::to_payload;

/// Business operations over conference records.
#[derive(Clone)]
pub struct ConferenceService {
    store: Arc<dyn ConferenceStore>,
}

impl ConferenceService {
    /// Build a service over the given store.
    pub fn new(store: Arc<dyn ConferenceStore>) -> Self {
        Self { store }
    }

    /// Create a conference. The id is client-assigned; a duplicate surfaces
    /// as a store constraint failure and translates like any other.
    pub async fn create(&self, new: Conference) -> ApiResponse {
        match self.store.insert(new).await {
            Ok(record) => {
                ApiResponse::created("Conference created successfully", to_payload(&record))
            }
            Err(error) => translate_store_error(&error),
        }
    }

    /// Fetch one page of conferences; the payload is `[records, total]`.
    pub async fn get_all(&self, page: PageRequest) -> ApiResponse {
        match self.store.find_and_count(page).await {
            Ok((records, _)) if records.is_empty() => {
                ApiResponse::not_found("No conferences found")
            }
            Ok((records, total)) => ApiResponse::ok(
                "Conferences retrieved successfully",
                json!([to_payload(&records), total]),
            ),
            Err(error) => translate_store_error(&error),
        }
    }

    /// Fetch one conference by id.
    pub async fn get_by_id(&self, id: i64) -> ApiResponse {
        match self.store.find_by_id(id).await {
            Ok(Some(record)) => {
                ApiResponse::ok("Conference retrieved successfully", to_payload(&record))
            }
            Ok(None) => ApiResponse::not_found("Conference not found"),
            Err(error) => translate_store_error(&error),
        }
    }

    /// Fetch a conference together with its editions.
    pub async fn editions(&self, id: i64) -> ApiResponse {
        match self.store.find_with_editions(id).await {
            Ok(Some(view)) => ApiResponse::ok(
                "Conference editions retrieved successfully",
                to_payload(&view),
            ),
            Ok(None) => ApiResponse::not_found("Conference not found"),
            Err(error) => translate_store_error(&error),
        }
    }

    /// Patch an existing conference. Missing id is a 404 before any write.
    pub async fn update(&self, id: i64, patch: ConferencePatch) -> ApiResponse {
        match self.store.find_by_id(id).await {
            Ok(Some(_)) => {}
            Ok(None) => return ApiResponse::not_found("Conference not found"),
            Err(error) => return translate_store_error(&error),
        }
        match self.store.update(id, patch).await {
            Ok(()) => ApiResponse::ok("Conference updated successfully", serde_json::Value::Null),
            Err(error) => translate_store_error(&error),
        }
    }

    /// Delete by id; deleting an absent id is a 404.
    pub async fn delete(&self, id: i64) -> ApiResponse {
        match self.store.delete(id).await {
            Ok(0) => ApiResponse::not_found("Conference not found"),
            Ok(_) => ApiResponse::ok("Conference removed successfully", serde_json::Value::Null),
            Err(error) => translate_store_error(&error),
        }
    }
}
