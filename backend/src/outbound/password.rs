//! Bcrypt adapter for the [`SecretHasher`] port.

use crate::domain::ports::{HashError, SecretHasher};

/// Default bcrypt work factor for stored secrets.
pub const DEFAULT_COST: u32 = 10;

/// Hashes and verifies secrets with bcrypt.
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    /// Build a hasher with an explicit work factor. Tests use the bcrypt
    /// minimum of 4 to keep hashing cheap.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::with_cost(DEFAULT_COST)
    }
}

impl SecretHasher for BcryptHasher {
    fn hash(&self, secret: &str) -> Result<String, HashError> {
        bcrypt::hash(secret, self.cost).map_err(|error| HashError {
            message: error.to_string(),
        })
    }

    fn verify(&self, secret: &str, digest: &str) -> bool {
        bcrypt::verify(secret, digest).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_accepts_the_secret() {
        let hasher = BcryptHasher::with_cost(4);
        let digest = hasher.hash("secret-pw").expect("hashes");
        assert!(hasher.verify("secret-pw", &digest));
        assert!(!hasher.verify("other-pw", &digest));
    }

    #[test]
    fn malformed_digest_never_verifies() {
        let hasher = BcryptHasher::with_cost(4);
        assert!(!hasher.verify("secret-pw", "not-a-digest"));
    }
}
