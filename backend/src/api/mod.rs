//! HTTP surface: one handler module per entity plus the validation
//! primitives they share.
//!
//! Handlers validate input with the helpers in [`validation`], forward to
//! the matching service, and return the service's envelope untouched.

pub mod article;
pub mod auth;
pub mod author;
pub mod conference;
pub mod edition;
pub mod health;
pub mod researcher;
pub mod state;
pub mod validation;

pub use self::state::{AppPorts, AppState};
