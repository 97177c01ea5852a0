//! Article endpoints.

use actix_web::{Scope, delete, get, post, put, web};
use serde_json::Value;

use crate::models::{ApiResult, ArticlePatch, NewArticle};

use super::state::AppState;
use super::validation::{FieldKind, FieldRule, PageQuery, parse_id, validate_body};

const TITLE: FieldKind = FieldKind::Text { min: 3, max: 256 };

const CREATE_RULES: &[FieldRule] = &[
    FieldRule::new("title", "title", TITLE),
    FieldRule::new("ref_edition", "ref_edition", FieldKind::PositiveInt),
];

const UPDATE_RULES: &[FieldRule] = &[
    FieldRule::new("title", "title", TITLE).optional(),
    FieldRule::new("ref_edition", "ref_edition", FieldKind::PositiveInt).optional(),
];

#[post("")]
async fn create(state: web::Data<AppState>, body: web::Json<Value>) -> ApiResult {
    let new = validate_body::<NewArticle>(CREATE_RULES, &body)?;
    Ok(state.articles.create(new).await)
}

#[get("/getAll")]
async fn get_all(state: web::Data<AppState>, query: web::Query<PageQuery>) -> ApiResult {
    let page = query.parse()?;
    Ok(state.articles.get_all(page).await)
}

#[get("/getByID/{id}")]
async fn get_by_id(state: web::Data<AppState>, path: web::Path<String>) -> ApiResult {
    let id = parse_id(&path)?;
    Ok(state.articles.get_by_id(id).await)
}

#[put("/{id}")]
async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> ApiResult {
    let id = parse_id(&path)?;
    let patch = validate_body::<ArticlePatch>(UPDATE_RULES, &body)?;
    Ok(state.articles.update(id, patch).await)
}

#[delete("/{id}")]
async fn remove(state: web::Data<AppState>, path: web::Path<String>) -> ApiResult {
    let id = parse_id(&path)?;
    Ok(state.articles.delete(id).await)
}

/// Routes under `/api/article`.
pub fn scope() -> Scope {
    web::scope("/article")
        .service(create)
        .service(get_all)
        .service(get_by_id)
        .service(update)
        .service(remove)
}
