//! Environment-driven server configuration.

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;

/// Default bind address when `BIND_ADDR` is unset.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
/// Default token lifetime (24 hours) when `TOKEN_TTL_SECS` is unset.
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 86_400;

/// Configuration errors raised while reading the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `JWT_SECRET_FILE` was set but could not be read.
    #[error("cannot read JWT_SECRET_FILE {path}: {source}")]
    SecretFile {
        /// The configured path.
        path: String,
        /// Underlying IO failure.
        source: std::io::Error,
    },
    /// `TOKEN_TTL_SECS` was set but is not a positive integer.
    #[error("TOKEN_TTL_SECS must be a positive integer, got {value}")]
    TokenTtl {
        /// The rejected value.
        value: String,
    },
}

/// Runtime settings collected from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    pub bind_addr: String,
    /// Secret used to sign and verify bearer tokens.
    pub jwt_secret: Vec<u8>,
    /// Lifetime of issued tokens, in seconds.
    pub token_ttl_secs: i64,
}

impl ServerConfig {
    /// Read configuration from `BIND_ADDR`, `JWT_SECRET` /
    /// `JWT_SECRET_FILE`, and `TOKEN_TTL_SECS`.
    ///
    /// Without a configured secret an ephemeral one is generated and a
    /// warning logged; every restart then invalidates all issued tokens,
    /// which is acceptable only in development.
    ///
    /// # Errors
    /// Returns [`ConfigError`] for an unreadable secret file or a
    /// malformed TTL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr =
            env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_owned());
        let jwt_secret = read_secret()?;
        let token_ttl_secs = match env::var("TOKEN_TTL_SECS") {
            Ok(raw) => raw
                .parse::<i64>()
                .ok()
                .filter(|ttl| *ttl > 0)
                .ok_or(ConfigError::TokenTtl { value: raw })?,
            Err(_) => DEFAULT_TOKEN_TTL_SECS,
        };
        Ok(Self {
            bind_addr,
            jwt_secret,
            token_ttl_secs,
        })
    }
}

fn read_secret() -> Result<Vec<u8>, ConfigError> {
    if let Ok(secret) = env::var("JWT_SECRET") {
        return Ok(secret.into_bytes());
    }
    if let Ok(path) = env::var("JWT_SECRET_FILE") {
        let contents = std::fs::read(&path)
            .map_err(|source| ConfigError::SecretFile { path, source })?;
        return Ok(contents);
    }
    tracing::warn!(
        "JWT_SECRET is not set; using an ephemeral development secret, \
         issued tokens will not survive a restart"
    );
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos())
        .unwrap_or_default();
    Ok(format!("dev-ephemeral-{nanos}-{}", std::process::id()).into_bytes())
}
