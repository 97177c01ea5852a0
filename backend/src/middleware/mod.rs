//! Actix middleware.

mod auth;

pub use self::auth::BearerAuth;
