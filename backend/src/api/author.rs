//! Authorship-link endpoints.

use actix_web::{Scope, delete, get, post, put, web};
use serde_json::Value;

use crate::models::{ApiResult, AuthorPatch, NewAuthor};

use super::state::AppState;
use super::validation::{FieldKind, FieldRule, PageQuery, parse_id, validate_body};

const CREATE_RULES: &[FieldRule] = &[
    FieldRule::new("ref_article", "ref_article", FieldKind::PositiveInt),
    FieldRule::new("ref_researcher", "ref_researcher", FieldKind::PositiveInt),
];

const UPDATE_RULES: &[FieldRule] = &[
    FieldRule::new("ref_article", "ref_article", FieldKind::PositiveInt).optional(),
    FieldRule::new("ref_researcher", "ref_researcher", FieldKind::PositiveInt).optional(),
];

#[post("")]
async fn create(state: web::Data<AppState>, body: web::Json<Value>) -> ApiResult {
    let new = validate_body::<NewAuthor>(CREATE_RULES, &body)?;
    Ok(state.authors.create(new).await)
}

#[get("/getAll")]
async fn get_all(state: web::Data<AppState>, query: web::Query<PageQuery>) -> ApiResult {
    let page = query.parse()?;
    Ok(state.authors.get_all(page).await)
}

#[get("/getByResearcher/{id}")]
async fn by_researcher(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<PageQuery>,
) -> ApiResult {
    let id = parse_id(&path)?;
    let page = query.parse()?;
    Ok(state.authors.get_by_researcher(id, page).await)
}

#[get("/getByArticle/{id}")]
async fn by_article(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<PageQuery>,
) -> ApiResult {
    let id = parse_id(&path)?;
    let page = query.parse()?;
    Ok(state.authors.get_by_article(id, page).await)
}

#[get("/getByID/{id}")]
async fn get_by_id(state: web::Data<AppState>, path: web::Path<String>) -> ApiResult {
    let id = parse_id(&path)?;
    Ok(state.authors.get_by_id(id).await)
}

#[put("/{id}")]
async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> ApiResult {
    let id = parse_id(&path)?;
    let patch = validate_body::<AuthorPatch>(UPDATE_RULES, &body)?;
    Ok(state.authors.update(id, patch).await)
}

#[delete("/{id}")]
async fn remove(state: web::Data<AppState>, path: web::Path<String>) -> ApiResult {
    let id = parse_id(&path)?;
    Ok(state.authors.delete(id).await)
}

/// Routes under `/api/author`.
pub fn scope() -> Scope {
    web::scope("/author")
        .service(create)
        .service(get_all)
        .service(by_researcher)
        .service(by_article)
        .service(get_by_id)
        .service(update)
        .service(remove)
}
