//! Article service: plain CRUD.

use std::sync::Arc;

use pagination::PageRequest;

use crate::models::{ApiResponse, ArticlePatch, NewArticle};

use super::error::translate_store_error;
use super::ports::ArticleStore;
use super::to_payload;

/// Business operations over article records.
#[derive(Clone)]
pub struct ArticleService {
    store: Arc<dyn ArticleStore>,
}

impl ArticleService {
    /// Build a service over the given store.
    pub fn new(store: Arc<dyn ArticleStore>) -> Self {
        Self { store }
    }

    /// Create an article and return the stored record.
    pub async fn create(&self, new: NewArticle) -> ApiResponse {
        match self.store.insert(new).await {
            Ok(record) => ApiResponse::created("The article has been created", to_payload(&record)),
            Err(error) => translate_store_error(&error),
        }
    }

    /// Fetch one page of articles.
    pub async fn get_all(&self, page: PageRequest) -> ApiResponse {
        match self.store.list(page).await {
            Ok(records) if records.is_empty() => ApiResponse::not_found("No articles found"),
            Ok(records) => ApiResponse::ok("The articles have been found", to_payload(&records)),
            Err(error) => translate_store_error(&error),
        }
    }

    /// Fetch one article by id.
    pub async fn get_by_id(&self, id: i64) -> ApiResponse {
        match self.store.find_by_id(id).await {
            Ok(Some(record)) => ApiResponse::ok("The article has been found", to_payload(&record)),
            Ok(None) => ApiResponse::not_found("The article was not found"),
            Err(error) => translate_store_error(&error),
        }
    }

    /// Patch an existing article. Missing id is a 404 before any write.
    pub async fn update(&self, id: i64, patch: ArticlePatch) -> ApiResponse {
        match self.store.find_by_id(id).await {
            Ok(Some(_)) => {}
            Ok(None) => return ApiResponse::not_found("The article was not found"),
            Err(error) => return translate_store_error(&error),
        }
        match self.store.update(id, patch).await {
            Ok(()) => ApiResponse::ok("The article has been updated", serde_json::Value::Null),
            Err(error) => translate_store_error(&error),
        }
    }

    /// Delete by id; deleting an absent id is a 404.
    pub async fn delete(&self, id: i64) -> ApiResponse {
        match self.store.delete(id).await {
            Ok(0) => ApiResponse::not_found("The article was not found"),
            Ok(_) => ApiResponse::ok("The article has been deleted", serde_json::Value::Null),
            Err(error) => translate_store_error(&error),
        }
    }
}
