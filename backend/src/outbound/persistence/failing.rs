//! Store adapter that fails every call with a configured error.
//!
//! Used by tests to drive the failure-translation paths without a real
//! backing store misbehaving on cue.

use async_trait::async_trait;
use pagination::PageRequest;

use crate::domain::ports::{
    AccountStore, ArticleStore, AuthorStore, ConferenceStore, EditionStore, ResearcherField,
    ResearcherStore, StoreError,
};
use crate::models::{
    Account, Article, ArticlePatch, Author, AuthorPatch, Conference, ConferenceEditions,
    ConferencePatch, Edition, EditionPatch, NewArticle, NewAuthor, NewEdition, NewResearcher,
    Researcher, ResearcherArticles, ResearcherPatch, Role,
};

/// A store whose every method returns a clone of the configured error.
pub struct FailingStore {
    error: StoreError,
}

impl FailingStore {
    /// Build a store that always fails with `error`.
    pub fn new(error: StoreError) -> Self {
        Self { error }
    }

    fn fail<T>(&self) -> Result<T, StoreError> {
        Err(self.error.clone())
    }
}

#[async_trait]
impl ResearcherStore for FailingStore {
    async fn insert(&self, _new: NewResearcher) -> Result<Researcher, StoreError> {
        self.fail()
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<Researcher>, StoreError> {
        self.fail()
    }

    async fn list(&self, _page: PageRequest) -> Result<Vec<Researcher>, StoreError> {
        self.fail()
    }

    async fn search(
        &self,
        _field: ResearcherField,
        _needle: &str,
        _page: PageRequest,
    ) -> Result<Vec<Researcher>, StoreError> {
        self.fail()
    }

    async fn find_with_articles(
        &self,
        _name: &str,
        _surname: &str,
        _sec_surname: &str,
    ) -> Result<Option<ResearcherArticles>, StoreError> {
        self.fail()
    }

    async fn update(&self, _id: i64, _patch: ResearcherPatch) -> Result<(), StoreError> {
        self.fail()
    }

    async fn delete(&self, _id: i64) -> Result<u64, StoreError> {
        self.fail()
    }
}

#[async_trait]
impl ConferenceStore for FailingStore {
    async fn insert(&self, _new: Conference) -> Result<Conference, StoreError> {
        self.fail()
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<Conference>, StoreError> {
        self.fail()
    }

    async fn find_and_count(
        &self,
        _page: PageRequest,
    ) -> Result<(Vec<Conference>, u64), StoreError> {
        self.fail()
    }

    async fn find_with_editions(
        &self,
        _id: i64,
    ) -> Result<Option<ConferenceEditions>, StoreError> {
        self.fail()
    }

    async fn update(&self, _id: i64, _patch: ConferencePatch) -> Result<(), StoreError> {
        self.fail()
    }

    async fn delete(&self, _id: i64) -> Result<u64, StoreError> {
        self.fail()
    }
}

#[async_trait]
impl EditionStore for FailingStore {
    async fn insert(&self, _new: NewEdition) -> Result<Edition, StoreError> {
        self.fail()
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<Edition>, StoreError> {
        self.fail()
    }

    async fn find_and_count(&self, _page: PageRequest) -> Result<(Vec<Edition>, u64), StoreError> {
        self.fail()
    }

    async fn update(&self, _id: i64, _patch: EditionPatch) -> Result<(), StoreError> {
        self.fail()
    }

    async fn delete(&self, _id: i64) -> Result<u64, StoreError> {
        self.fail()
    }
}

#[async_trait]
impl ArticleStore for FailingStore {
    async fn insert(&self, _new: NewArticle) -> Result<Article, StoreError> {
        self.fail()
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<Article>, StoreError> {
        self.fail()
    }

    async fn list(&self, _page: PageRequest) -> Result<Vec<Article>, StoreError> {
        self.fail()
    }

    async fn update(&self, _id: i64, _patch: ArticlePatch) -> Result<(), StoreError> {
        self.fail()
    }

    async fn delete(&self, _id: i64) -> Result<u64, StoreError> {
        self.fail()
    }
}

#[async_trait]
impl AuthorStore for FailingStore {
    async fn insert(&self, _new: NewAuthor) -> Result<Author, StoreError> {
        self.fail()
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<Author>, StoreError> {
        self.fail()
    }

    async fn list(&self, _page: PageRequest) -> Result<Vec<Author>, StoreError> {
        self.fail()
    }

    async fn list_by_researcher(
        &self,
        _researcher_id: i64,
        _page: PageRequest,
    ) -> Result<Vec<Author>, StoreError> {
        self.fail()
    }

    async fn list_by_article(
        &self,
        _article_id: i64,
        _page: PageRequest,
    ) -> Result<Vec<Author>, StoreError> {
        self.fail()
    }

    async fn update(&self, _id: i64, _patch: AuthorPatch) -> Result<(), StoreError> {
        self.fail()
    }

    async fn delete(&self, _id: i64) -> Result<u64, StoreError> {
        self.fail()
    }
}

#[async_trait]
impl AccountStore for FailingStore {
    async fn find_by_username_and_role(
        &self,
        _username: &str,
        _role: Role,
    ) -> Result<Option<Account>, StoreError> {
        self.fail()
    }

    async fn insert(&self, _account: Account) -> Result<(), StoreError> {
        self.fail()
    }
}
