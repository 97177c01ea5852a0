//! Domain ports defining the edges of the hexagon.
//!
//! Ports describe how the entity services expect to interact with driven
//! adapters (the persistence store, the credential signer, the secret
//! hasher). Each trait exposes strongly typed errors so adapters map their
//! failures into predictable variants instead of leaking raw error text.

use async_trait::async_trait;
use pagination::PageRequest;
use thiserror::Error;

use crate::models::{
    Account, Article, ArticlePatch, Author, AuthorPatch, Conference, ConferenceEditions,
    ConferencePatch, Edition, EditionPatch, NewArticle, NewAuthor, NewEdition, NewResearcher,
    Researcher, ResearcherArticles, ResearcherPatch, Role,
};

use super::auth::Claims;

/// Failures surfaced by persistence adapters.
///
/// This is the complete failure taxonomy services may observe from a store;
/// translation into response envelopes happens in exactly one place
/// ([`crate::domain::error`]).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The store rejected the query (malformed statement, constraint hit).
    #[error("query failed: {message}")]
    QueryFailed {
        /// Adapter-provided failure description.
        message: String,
    },
    /// The store did not respond in time.
    #[error("store timed out")]
    Timeout,
    /// Anything else the adapter could not classify.
    #[error("store failure: {message}")]
    Unknown {
        /// Adapter-provided failure description.
        message: String,
    },
}

impl StoreError {
    /// Helper for query-level failures.
    pub fn query_failed(message: impl Into<String>) -> Self {
        Self::QueryFailed {
            message: message.into(),
        }
    }

    /// Helper for unclassified failures.
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::Unknown {
            message: message.into(),
        }
    }
}

/// Failures surfaced by the credential signer/verifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The presented credential is expired, malformed, or forged.
    #[error("invalid credential")]
    Invalid,
    /// Signing a new credential failed.
    #[error("credential signing failed: {message}")]
    Signing {
        /// Adapter-provided failure description.
        message: String,
    },
}

/// Failure surfaced by the one-way secret hasher.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("secret hashing failed: {message}")]
pub struct HashError {
    /// Adapter-provided failure description.
    pub message: String,
}

/// Researcher columns available to substring search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResearcherField {
    /// Given name.
    Name,
    /// First surname.
    Surname,
    /// Second surname.
    SecSurname,
    /// Affiliation.
    University,
}

/// Store port for researcher records.
#[async_trait]
pub trait ResearcherStore: Send + Sync {
    /// Persist a new researcher and return it with its assigned id.
    async fn insert(&self, new: NewResearcher) -> Result<Researcher, StoreError>;
    /// Fetch one researcher by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Researcher>, StoreError>;
    /// Fetch one page of researchers.
    async fn list(&self, page: PageRequest) -> Result<Vec<Researcher>, StoreError>;
    /// Case-insensitive substring search on one column, paginated.
    async fn search(
        &self,
        field: ResearcherField,
        needle: &str,
        page: PageRequest,
    ) -> Result<Vec<Researcher>, StoreError>;
    /// Fetch a researcher by complete name with the authorship chain
    /// expanded down to the conference.
    async fn find_with_articles(
        &self,
        name: &str,
        surname: &str,
        sec_surname: &str,
    ) -> Result<Option<ResearcherArticles>, StoreError>;
    /// Apply a partial update to an existing researcher.
    async fn update(&self, id: i64, patch: ResearcherPatch) -> Result<(), StoreError>;
    /// Delete by id, returning the number of affected records.
    async fn delete(&self, id: i64) -> Result<u64, StoreError>;
}

/// Store port for conference records. Conference ids are client-assigned.
#[async_trait]
pub trait ConferenceStore: Send + Sync {
    /// Persist a new conference.
    async fn insert(&self, new: Conference) -> Result<Conference, StoreError>;
    /// Fetch one conference by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Conference>, StoreError>;
    /// Fetch one page of conferences together with the total count.
    async fn find_and_count(
        &self,
        page: PageRequest,
    ) -> Result<(Vec<Conference>, u64), StoreError>;
    /// Fetch a conference with its editions in one call.
    async fn find_with_editions(
        &self,
        id: i64,
    ) -> Result<Option<ConferenceEditions>, StoreError>;
    /// Apply a partial update to an existing conference.
    async fn update(&self, id: i64, patch: ConferencePatch) -> Result<(), StoreError>;
    /// Delete by id, returning the number of affected records.
    async fn delete(&self, id: i64) -> Result<u64, StoreError>;
}

/// Store port for edition records.
#[async_trait]
pub trait EditionStore: Send + Sync {
    /// Persist a new edition and return it with its assigned id.
    async fn insert(&self, new: NewEdition) -> Result<Edition, StoreError>;
    /// Fetch one edition by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Edition>, StoreError>;
    /// Fetch one page of editions together with the total count.
    async fn find_and_count(&self, page: PageRequest) -> Result<(Vec<Edition>, u64), StoreError>;
    /// Apply a partial update to an existing edition.
    async fn update(&self, id: i64, patch: EditionPatch) -> Result<(), StoreError>;
    /// Delete by id, returning the number of affected records.
    async fn delete(&self, id: i64) -> Result<u64, StoreError>;
}

/// Store port for article records.
#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// Persist a new article and return it with its assigned id.
    async fn insert(&self, new: NewArticle) -> Result<Article, StoreError>;
    /// Fetch one article by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Article>, StoreError>;
    /// Fetch one page of articles.
    async fn list(&self, page: PageRequest) -> Result<Vec<Article>, StoreError>;
    /// Apply a partial update to an existing article.
    async fn update(&self, id: i64, patch: ArticlePatch) -> Result<(), StoreError>;
    /// Delete by id, returning the number of affected records.
    async fn delete(&self, id: i64) -> Result<u64, StoreError>;
}

/// Store port for authorship links.
#[async_trait]
pub trait AuthorStore: Send + Sync {
    /// Persist a new authorship link and return it with its assigned id.
    async fn insert(&self, new: NewAuthor) -> Result<Author, StoreError>;
    /// Fetch one link by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Author>, StoreError>;
    /// Fetch one page of links.
    async fn list(&self, page: PageRequest) -> Result<Vec<Author>, StoreError>;
    /// Fetch one page of links for a researcher.
    async fn list_by_researcher(
        &self,
        researcher_id: i64,
        page: PageRequest,
    ) -> Result<Vec<Author>, StoreError>;
    /// Fetch one page of links for an article.
    async fn list_by_article(
        &self,
        article_id: i64,
        page: PageRequest,
    ) -> Result<Vec<Author>, StoreError>;
    /// Apply a partial update to an existing link.
    async fn update(&self, id: i64, patch: AuthorPatch) -> Result<(), StoreError>;
    /// Delete by id, returning the number of affected records.
    async fn delete(&self, id: i64) -> Result<u64, StoreError>;
}

/// Store port for stored credential records.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Fetch an account by username and role.
    async fn find_by_username_and_role(
        &self,
        username: &str,
        role: Role,
    ) -> Result<Option<Account>, StoreError>;
    /// Persist a new account.
    async fn insert(&self, account: Account) -> Result<(), StoreError>;
}

/// Credential signer/verifier port.
pub trait TokenService: Send + Sync {
    /// Sign a claim set into a bearer credential.
    ///
    /// # Errors
    /// Returns [`TokenError::Signing`] when the adapter cannot produce a
    /// credential.
    fn sign(&self, claims: &Claims) -> Result<String, TokenError>;

    /// Verify a bearer credential and return its claims.
    ///
    /// # Errors
    /// Returns [`TokenError::Invalid`] for expired, malformed, or forged
    /// credentials.
    fn verify(&self, token: &str) -> Result<Claims, TokenError>;
}

/// One-way secret hasher port.
pub trait SecretHasher: Send + Sync {
    /// Hash a raw secret into a storable digest.
    ///
    /// # Errors
    /// Returns [`HashError`] when the adapter cannot derive a digest.
    fn hash(&self, secret: &str) -> Result<String, HashError>;

    /// Compare a raw secret against a stored digest.
    fn verify(&self, secret: &str, digest: &str) -> bool;
}
