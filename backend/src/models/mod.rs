//! Data models shared by the API and persistence layers.
//!
//! Purpose: the response envelope contract and the entity records it
//! carries. Keep types immutable and document serialisation contracts in
//! each type's Rustdoc.
//!
//! Public surface:
//! - [`ApiResponse`] — the uniform response envelope.
//! - [`Rejection`] / [`ApiResult`] — validator short-circuit carrier.
//! - Entity records ([`Researcher`], [`Conference`], [`Edition`],
//!   [`Article`], [`Author`], [`Account`]) plus their `New*`/`*Patch`
//!   companions and nested relational views.

pub mod entities;
pub mod envelope;

pub use self::entities::{
    Account, Article, ArticleDetail, ArticlePatch, Author, AuthorPatch, AuthorshipDetail,
    Conference, ConferenceEditions, ConferencePatch, Edition, EditionDetail, EditionPatch,
    NewArticle, NewAuthor, NewEdition, NewResearcher, Researcher, ResearcherArticles,
    ResearcherPatch, Role,
};
pub use self::envelope::{ApiResponse, ApiResult, Rejection};
