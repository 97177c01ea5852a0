//! Conference endpoints.

use actix_web::{Scope, delete, get, post, put, web};
use serde_json::Value;

use crate::models::{ApiResult, Conference, ConferencePatch};

use super::state::AppState;
use super::validation::{FieldKind, FieldRule, PageQuery, parse_id, validate_body};

const NAME: FieldKind = FieldKind::Text { min: 3, max: 128 };

const CREATE_RULES: &[FieldRule] = &[
    FieldRule::new("id", "id", FieldKind::PositiveInt),
    FieldRule::new("name", "name", NAME),
];

const UPDATE_RULES: &[FieldRule] = &[FieldRule::new("name", "name", NAME).optional()];

#[post("")]
async fn create(state: web::Data<AppState>, body: web::Json<Value>) -> ApiResult {
    let new = validate_body::<Conference>(CREATE_RULES, &body)?;
    Ok(state.conferences.create(new).await)
}

#[get("/getAll")]
async fn get_all(state: web::Data<AppState>, query: web::Query<PageQuery>) -> ApiResult {
    let page = query.parse()?;
    Ok(state.conferences.get_all(page).await)
}

#[get("/getByID/{id}")]
async fn get_by_id(state: web::Data<AppState>, path: web::Path<String>) -> ApiResult {
    let id = parse_id(&path)?;
    Ok(state.conferences.get_by_id(id).await)
}

#[get("/getAllEditionsOfConference/{id}")]
async fn editions(state: web::Data<AppState>, path: web::Path<String>) -> ApiResult {
    let id = parse_id(&path)?;
    Ok(state.conferences.editions(id).await)
}

#[put("/{id}")]
async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> ApiResult {
    let id = parse_id(&path)?;
    let patch = validate_body::<ConferencePatch>(UPDATE_RULES, &body)?;
    Ok(state.conferences.update(id, patch).await)
}

#[delete("/{id}")]
async fn remove(state: web::Data<AppState>, path: web::Path<String>) -> ApiResult {
    let id = parse_id(&path)?;
    Ok(state.conferences.delete(id).await)
}

/// Routes under `/api/conference`.
pub fn scope() -> Scope {
    web::scope("/conference")
        .service(create)
        .service(get_all)
        .service(get_by_id)
        .service(editions)
        .service(update)
        .service(remove)
}
