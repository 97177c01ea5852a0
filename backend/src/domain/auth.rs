//! Authenticated-caller identity and the claims carried in bearer tokens.

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{Ready, ready};
use serde::{Deserialize, Serialize};

use crate::models::{ApiResponse, Rejection, Role};

/// Claim set signed into every bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Principal (the login email).
    pub sub: String,
    /// Role granted at login.
    pub role: Role,
    /// Expiry as seconds since the Unix epoch.
    pub exp: i64,
}

/// Login/registration credentials.
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    /// Login email.
    pub email: String,
    /// Raw secret.
    pub password: String,
    /// Requested role.
    pub role: Role,
}

/// Identity of the verified caller, inserted into request extensions by the
/// bearer gate and extracted by handlers that care who is calling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Principal from the verified token.
    pub username: String,
    /// Role from the verified token.
    pub role: Role,
}

impl FromRequest for Identity {
    type Error = Rejection;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let identity = req.extensions().get::<Identity>().cloned();
        ready(identity.ok_or_else(|| Rejection(ApiResponse::unauthorized("Invalid token"))))
    }
}
