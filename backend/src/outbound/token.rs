//! HS256 token adapter for the [`TokenService`] port.

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::domain::Claims;
use crate::domain::ports::{TokenError, TokenService};

/// Signs and verifies bearer tokens with a shared HS256 secret.
pub struct JwtTokens {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl JwtTokens {
    /// Build a token service around the given secret.
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is exact; no clock-skew grace window.
        validation.leeway = 0;
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        }
    }
}

impl TokenService for JwtTokens {
    fn sign(&self, claims: &Claims) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding).map_err(|error| {
            TokenError::Signing {
                message: error.to_string(),
            }
        })
    }

    fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| TokenError::Invalid)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::models::Role;

    fn claims(exp_offset_secs: i64) -> Claims {
        Claims {
            sub: "a@b.es".into(),
            role: Role::User,
            exp: Utc::now().timestamp() + exp_offset_secs,
        }
    }

    #[test]
    fn sign_verify_round_trip_preserves_claims() {
        let tokens = JwtTokens::new(b"unit-test-secret");
        let signed = tokens.sign(&claims(3600)).expect("signs");
        let verified = tokens.verify(&signed).expect("verifies");
        assert_eq!(verified.sub, "a@b.es");
        assert_eq!(verified.role, Role::User);
    }

    #[test]
    fn expired_token_is_invalid() {
        let tokens = JwtTokens::new(b"unit-test-secret");
        let signed = tokens.sign(&claims(-3600)).expect("signs");
        assert_eq!(tokens.verify(&signed), Err(TokenError::Invalid));
    }

    #[test]
    fn wrong_secret_is_invalid() {
        let signer = JwtTokens::new(b"secret-one");
        let verifier = JwtTokens::new(b"secret-two");
        let signed = signer.sign(&claims(3600)).expect("signs");
        assert_eq!(verifier.verify(&signed), Err(TokenError::Invalid));
    }

    #[test]
    fn garbage_is_invalid() {
        let tokens = JwtTokens::new(b"unit-test-secret");
        assert_eq!(tokens.verify("not-a-token"), Err(TokenError::Invalid));
    }
}
