//! Login and registration over the account store.
//!
//! Unknown principals and wrong secrets collapse into the same
//! `Invalid credentials` reply so the endpoint cannot be used to probe
//! which accounts exist.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;

use crate::models::{Account, ApiResponse};

use super::auth::{Claims, Credentials};
use super::error::translate_auth_store_error;
use super::ports::{AccountStore, SecretHasher, TokenService};

/// Business operations for the auth endpoints.
#[derive(Clone)]
pub struct AuthService {
    accounts: Arc<dyn AccountStore>,
    tokens: Arc<dyn TokenService>,
    hasher: Arc<dyn SecretHasher>,
    token_ttl_secs: i64,
}

impl AuthService {
    /// Build a service over the given collaborators. `token_ttl_secs` bounds
    /// the lifetime of every token this service signs.
    pub fn new(
        accounts: Arc<dyn AccountStore>,
        tokens: Arc<dyn TokenService>,
        hasher: Arc<dyn SecretHasher>,
        token_ttl_secs: i64,
    ) -> Self {
        Self {
            accounts,
            tokens,
            hasher,
            token_ttl_secs,
        }
    }

    fn issue_token(&self, username: &str, role: crate::models::Role) -> Option<String> {
        let claims = Claims {
            sub: username.to_owned(),
            role,
            exp: Utc::now().timestamp() + self.token_ttl_secs,
        };
        match self.tokens.sign(&claims) {
            Ok(token) => Some(token),
            Err(error) => {
                tracing::error!(error = %error, "token signing failed");
                None
            }
        }
    }

    /// Verify credentials and issue a bearer token.
    pub async fn login(&self, credentials: Credentials) -> ApiResponse {
        let account = match self
            .accounts
            .find_by_username_and_role(&credentials.email, credentials.role)
            .await
        {
            Ok(account) => account,
            Err(error) => return translate_auth_store_error(&error),
        };
        let matched = account
            .as_ref()
            .is_some_and(|account| self.hasher.verify(&credentials.password, &account.password));
        if !matched {
            return ApiResponse::unauthorized("Invalid credentials");
        }
        match self.issue_token(&credentials.email, credentials.role) {
            Some(token) => ApiResponse::ok("Login successful", json!({ "token": token })),
            None => ApiResponse::internal_error("Internal server error"),
        }
    }

    /// Create an account and issue a bearer token for it.
    pub async fn register(&self, credentials: Credentials) -> ApiResponse {
        match self
            .accounts
            .find_by_username_and_role(&credentials.email, credentials.role)
            .await
        {
            Ok(Some(_)) => {
                return ApiResponse::bad_request("User already exists", serde_json::Value::Null);
            }
            Ok(None) => {}
            Err(error) => return translate_auth_store_error(&error),
        }
        let digest = match self.hasher.hash(&credentials.password) {
            Ok(digest) => digest,
            Err(error) => {
                tracing::error!(error = %error, "password hashing failed");
                return ApiResponse::internal_error("Internal server error");
            }
        };
        let account = Account {
            username: credentials.email.clone(),
            password: digest,
            role: credentials.role,
        };
        if let Err(error) = self.accounts.insert(account).await {
            return translate_auth_store_error(&error);
        }
        match self.issue_token(&credentials.email, credentials.role) {
            Some(token) => ApiResponse::created("User created", json!({ "token": token })),
            None => ApiResponse::internal_error("Internal server error"),
        }
    }
}
