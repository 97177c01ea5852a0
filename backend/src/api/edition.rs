//! Edition endpoints.
//!
//! The by-id route spells `getById` (lower-case `d`), unlike every other
//! entity; clients depend on the historical path.

use actix_web::{Scope, delete, get, post, put, web};
use serde_json::Value;

use crate::models::{ApiResult, EditionPatch, NewEdition};

use super::state::AppState;
use super::validation::{FieldKind, FieldRule, PageQuery, parse_id, validate_body};

const CITY: FieldKind = FieldKind::Text { min: 3, max: 64 };

const CREATE_RULES: &[FieldRule] = &[
    FieldRule::new("year", "year", FieldKind::PositiveInt),
    FieldRule::new("date", "date", FieldKind::IsoDate),
    FieldRule::new("city", "city", CITY),
    FieldRule::new("ref_conference", "ref_conference", FieldKind::PositiveInt),
];

const UPDATE_RULES: &[FieldRule] = &[
    FieldRule::new("year", "year", FieldKind::PositiveInt).optional(),
    FieldRule::new("date", "date", FieldKind::IsoDate).optional(),
    FieldRule::new("city", "city", CITY).optional(),
    FieldRule::new("ref_conference", "ref_conference", FieldKind::PositiveInt).optional(),
];

#[post("")]
async fn create(state: web::Data<AppState>, body: web::Json<Value>) -> ApiResult {
    let new = validate_body::<NewEdition>(CREATE_RULES, &body)?;
    Ok(state.editions.create(new).await)
}

#[get("/getAll")]
async fn get_all(state: web::Data<AppState>, query: web::Query<PageQuery>) -> ApiResult {
    let page = query.parse()?;
    Ok(state.editions.get_all(page).await)
}

#[get("/getById/{id}")]
async fn get_by_id(state: web::Data<AppState>, path: web::Path<String>) -> ApiResult {
    let id = parse_id(&path)?;
    Ok(state.editions.get_by_id(id).await)
}

#[put("/{id}")]
async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> ApiResult {
    let id = parse_id(&path)?;
    let patch = validate_body::<EditionPatch>(UPDATE_RULES, &body)?;
    Ok(state.editions.update(id, patch).await)
}

#[delete("/{id}")]
async fn remove(state: web::Data<AppState>, path: web::Path<String>) -> ApiResult {
    let id = parse_id(&path)?;
    Ok(state.editions.delete(id).await)
}

/// Routes under `/api/edition`.
pub fn scope() -> Scope {
    web::scope("/edition")
        .service(create)
        .service(get_all)
        .service(get_by_id)
        .service(update)
        .service(remove)
}
