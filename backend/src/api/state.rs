//! Shared handler state: one service per entity, wired explicitly.

use std::sync::Arc;

use crate::domain::ports::{
    AccountStore, ArticleStore, AuthorStore, ConferenceStore, EditionStore, ResearcherStore,
    SecretHasher, TokenService,
};
use crate::domain::{
    ArticleService, AuthService, AuthorService, ConferenceService, EditionService,
    ResearcherService,
};
use crate::outbound::MemoryStore;

/// Store and collaborator handles needed to assemble an [`AppState`].
pub struct AppPorts {
    /// Researcher persistence.
    pub researchers: Arc<dyn ResearcherStore>,
    /// Conference persistence.
    pub conferences: Arc<dyn ConferenceStore>,
    /// Edition persistence.
    pub editions: Arc<dyn EditionStore>,
    /// Article persistence.
    pub articles: Arc<dyn ArticleStore>,
    /// Authorship-link persistence.
    pub authors: Arc<dyn AuthorStore>,
    /// Account persistence.
    pub accounts: Arc<dyn AccountStore>,
    /// Bearer-token signer/verifier.
    pub tokens: Arc<dyn TokenService>,
    /// Secret hasher.
    pub hasher: Arc<dyn SecretHasher>,
    /// Lifetime of issued tokens, in seconds.
    pub token_ttl_secs: i64,
}

impl AppPorts {
    /// Wire every store port to one shared in-memory store.
    pub fn in_memory(
        tokens: Arc<dyn TokenService>,
        hasher: Arc<dyn SecretHasher>,
        token_ttl_secs: i64,
    ) -> Self {
        let store = Arc::new(MemoryStore::new());
        Self {
            researchers: store.clone(),
            conferences: store.clone(),
            editions: store.clone(),
            articles: store.clone(),
            authors: store.clone(),
            accounts: store,
            tokens,
            hasher,
            token_ttl_secs,
        }
    }
}

/// Entity services shared across handlers via `web::Data`.
#[derive(Clone)]
pub struct AppState {
    /// Researcher operations.
    pub researchers: ResearcherService,
    /// Conference operations.
    pub conferences: ConferenceService,
    /// Edition operations.
    pub editions: EditionService,
    /// Article operations.
    pub articles: ArticleService,
    /// Authorship-link operations.
    pub authors: AuthorService,
    /// Login and registration.
    pub auth: AuthService,
}

impl AppState {
    /// Build the service set from a port bundle.
    pub fn new(ports: AppPorts) -> Self {
        Self {
            researchers: ResearcherService::new(ports.researchers),
            conferences: ConferenceService::new(ports.conferences),
            editions: EditionService::new(ports.editions),
            articles: ArticleService::new(ports.articles),
            authors: AuthorService::new(ports.authors),
            auth: AuthService::new(
                ports.accounts,
                ports.tokens,
                ports.hasher,
                ports.token_ttl_secs,
            ),
        }
    }
}
