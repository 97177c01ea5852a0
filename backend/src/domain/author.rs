//! Author service: CRUD over authorship links plus per-researcher and
//! per-article listings.

use std::sync::Arc;

use pagination::PageRequest;

use crate::models::{ApiResponse, AuthorPatch, NewAuthor};

use super::error::translate_store_error;
use super::ports::AuthorStore;
use super::to_payload;

/// Business operations over authorship links.
#[derive(Clone)]
pub struct AuthorService {
    store: Arc<dyn AuthorStore>,
}

impl AuthorService {
    /// Build a service over the given store.
    pub fn new(store: Arc<dyn AuthorStore>) -> Self {
        Self { store }
    }

    /// Create an authorship link and return the stored record.
    pub async fn create(&self, new: NewAuthor) -> ApiResponse {
        match self.store.insert(new).await {
            Ok(record) => ApiResponse::created("The author has been created", to_payload(&record)),
            Err(error) => translate_store_error(&error),
        }
    }

    /// Fetch one page of links.
    pub async fn get_all(&self, page: PageRequest) -> ApiResponse {
        match self.store.list(page).await {
            Ok(records) if records.is_empty() => ApiResponse::not_found("There are no authors"),
            Ok(records) => ApiResponse::ok("Authors have been found", to_payload(&records)),
            Err(error) => translate_store_error(&error),
        }
    }

    /// Fetch one page of links for a researcher.
    pub async fn get_by_researcher(&self, researcher_id: i64, page: PageRequest) -> ApiResponse {
        match self.store.list_by_researcher(researcher_id, page).await {
            Ok(records) if records.is_empty() => ApiResponse::not_found("There are no authors"),
            Ok(records) => ApiResponse::ok("Authors have been found", to_payload(&records)),
            Err(error) => translate_store_error(&error),
        }
    }

    /// Fetch one page of links for an article.
    pub async fn get_by_article(&self, article_id: i64, page: PageRequest) -> ApiResponse {
        match self.store.list_by_article(article_id, page).await {
            Ok(records) if records.is_empty() => ApiResponse::not_found("There are no authors"),
            Ok(records) => ApiResponse::ok("Authors have been found", to_payload(&records)),
            Err(error) => translate_store_error(&error),
        }
    }

    /// Fetch one link by id.
    pub async fn get_by_id(&self, id: i64) -> ApiResponse {
        match self.store.find_by_id(id).await {
            Ok(Some(record)) => ApiResponse::ok("The author has been found", to_payload(&record)),
            Ok(None) => ApiResponse::not_found("The author has not been found"),
            Err(error) => translate_store_error(&error),
        }
    }

    /// Patch an existing link. Missing id is a 404 before any write.
    pub async fn update(&self, id: i64, patch: AuthorPatch) -> ApiResponse {
        match self.store.find_by_id(id).await {
            Ok(Some(_)) => {}
            Ok(None) => return ApiResponse::not_found("The author has not been found"),
            Err(error) => return translate_store_error(&error),
        }
        match self.store.update(id, patch).await {
            Ok(()) => ApiResponse::ok("The author has been updated", serde_json::Value::Null),
            Err(error) => translate_store_error(&error),
        }
    }

    /// Delete by id; deleting an absent id is a 404.
    pub async fn delete(&self, id: i64) -> ApiResponse {
        match self.store.delete(id).await {
            Ok(0) => ApiResponse::not_found("The author has not been found"),
            Ok(_) => ApiResponse::ok("The author has been removed", serde_json::Value::Null),
            Err(error) => translate_store_error(&error),
        }
    }
}
