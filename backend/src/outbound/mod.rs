//! Driven adapters implementing the domain ports.

pub mod persistence;

mod password;
mod token;

pub use self::password::BcryptHasher;
pub use self::persistence::{FailingStore, MemoryStore};
pub use self::token::JwtTokens;
