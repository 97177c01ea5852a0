//! Login and registration endpoints. These are the only `/api` routes the
//! bearer gate lets through without a token.

use actix_web::{Scope, post, web};
use serde_json::Value;

use crate::domain::Credentials;
use crate::models::ApiResult;

use super::state::AppState;
use super::validation::{FieldKind, FieldRule, validate_body};

const AUTH_RULES: &[FieldRule] = &[
    FieldRule::new("email", "email", FieldKind::Email),
    FieldRule::new("password", "password", FieldKind::Text { min: 8, max: 64 }),
    FieldRule::new("role", "role", FieldKind::Role),
];

#[post("/login")]
async fn login(state: web::Data<AppState>, body: web::Json<Value>) -> ApiResult {
    let credentials = validate_body::<Credentials>(AUTH_RULES, &body)?;
    Ok(state.auth.login(credentials).await)
}

#[post("/register")]
async fn register(state: web::Data<AppState>, body: web::Json<Value>) -> ApiResult {
    let credentials = validate_body::<Credentials>(AUTH_RULES, &body)?;
    Ok(state.auth.register(credentials).await)
}

/// Routes under `/api/auth`.
pub fn scope() -> Scope {
    web::scope("/auth").service(login).service(register)
}
