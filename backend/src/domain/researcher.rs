//! Researcher service: CRUD, column search, and the authorship expansion.

use std::sync::Arc;

use pagination::PageRequest;

use crate::models::{ApiResponse, NewResearcher, ResearcherPatch};

use super::error::translate_store_error;
use super::ports::{ResearcherField, ResearcherStore};
use super::to_payload;

/// Business operations over researcher records.
#[derive(Clone)]
pub struct ResearcherService {
    store: Arc<dyn ResearcherStore>,
}

impl ResearcherService {
    /// Build a service over the given store.
    pub fn new(store: Arc<dyn ResearcherStore>) -> Self {
        Self { store }
    }

    /// Create a researcher and return the stored record.
    pub async fn create(&self, new: NewResearcher) -> ApiResponse {
        match self.store.insert(new).await {
            Ok(record) => {
                ApiResponse::created("Researcher created successfully", to_payload(&record))
            }
            Err(error) => translate_store_error(&error),
        }
    }

    /// Fetch one page of researchers.
    pub async fn get_all(&self, page: PageRequest) -> ApiResponse {
        match self.store.list(page).await {
            Ok(records) if records.is_empty() => ApiResponse::not_found("No researchers found"),
            Ok(records) => {
                ApiResponse::ok("Researchers retrieved successfully", to_payload(&records))
            }
            Err(error) => translate_store_error(&error),
        }
    }

    /// Fetch one researcher by id.
    pub async fn get_by_id(&self, id: i64) -> ApiResponse {
        match self.store.find_by_id(id).await {
            Ok(Some(record)) => {
                ApiResponse::ok("Researcher retrieved successfully", to_payload(&record))
            }
            Ok(None) => ApiResponse::not_found("No researcher found"),
            Err(error) => translate_store_error(&error),
        }
    }

    /// Case-insensitive substring search on one column.
    pub async fn search(
        &self,
        field: ResearcherField,
        needle: &str,
        page: PageRequest,
    ) -> ApiResponse {
        match self.store.search(field, needle, page).await {
            Ok(records) if records.is_empty() => ApiResponse::not_found("No researchers found"),
            Ok(records) => {
                ApiResponse::ok("Researchers retrieved successfully", to_payload(&records))
            }
            Err(error) => translate_store_error(&error),
        }
    }

    /// Fetch a researcher by complete name with the full authorship chain.
    pub async fn articles_by_complete_name(
        &self,
        name: &str,
        surname: &str,
        sec_surname: &str,
    ) -> ApiResponse {
        match self
            .store
            .find_with_articles(name, surname, sec_surname)
            .await
        {
            Ok(Some(view)) => {
                ApiResponse::ok("Articles retrieved successfully", to_payload(&view))
            }
            Ok(None) => ApiResponse::not_found("Researcher not found"),
            Err(error) => translate_store_error(&error),
        }
    }

    /// Patch an existing researcher. Missing id is a 404 before any write.
    pub async fn update(&self, id: i64, patch: ResearcherPatch) -> ApiResponse {
        match self.store.find_by_id(id).await {
            Ok(Some(_)) => {}
            Ok(None) => return ApiResponse::not_found("Researcher not found"),
            Err(error) => return translate_store_error(&error),
        }
        match self.store.update(id, patch).await {
            Ok(()) => ApiResponse::ok("Researcher updated successfully", serde_json::Value::Null),
            Err(error) => translate_store_error(&error),
        }
    }

    /// Delete by id; deleting an absent id is a 404.
    pub async fn delete(&self, id: i64) -> ApiResponse {
        match self.store.delete(id).await {
            Ok(0) => ApiResponse::not_found("Researcher not found"),
            Ok(_) => ApiResponse::ok("Researcher deleted successfully", serde_json::Value::Null),
            Err(error) => translate_store_error(&error),
        }
    }
}
