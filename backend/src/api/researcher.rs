//! Researcher endpoints.

use actix_web::{Scope, delete, get, post, put, web};
use serde_json::Value;

use crate::domain::ports::ResearcherField;
use crate::models::{ApiResult, NewResearcher, ResearcherPatch};

use super::state::AppState;
use super::validation::{FieldKind, FieldRule, PageQuery, parse_id, validate_body};

const TEXT: FieldKind = FieldKind::Text { min: 3, max: 64 };

const CREATE_RULES: &[FieldRule] = &[
    FieldRule::new("name", "name", TEXT),
    FieldRule::new("surname", "surname", TEXT),
    FieldRule::new("secSurname", "second surname", TEXT),
    FieldRule::new("university", "university", TEXT),
];

const UPDATE_RULES: &[FieldRule] = &[
    FieldRule::new("name", "name", TEXT).optional(),
    FieldRule::new("surname", "surname", TEXT).optional(),
    FieldRule::new("secSurname", "second surname", TEXT).optional(),
    FieldRule::new("university", "university", TEXT).optional(),
];

#[post("")]
async fn create(state: web::Data<AppState>, body: web::Json<Value>) -> ApiResult {
    let new = validate_body::<NewResearcher>(CREATE_RULES, &body)?;
    Ok(state.researchers.create(new).await)
}

#[get("/getAll")]
async fn get_all(state: web::Data<AppState>, query: web::Query<PageQuery>) -> ApiResult {
    let page = query.parse()?;
    Ok(state.researchers.get_all(page).await)
}

#[get("/getByID/{id}")]
async fn get_by_id(state: web::Data<AppState>, path: web::Path<String>) -> ApiResult {
    let id = parse_id(&path)?;
    Ok(state.researchers.get_by_id(id).await)
}

#[put("/{id}")]
async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> ApiResult {
    let id = parse_id(&path)?;
    let patch = validate_body::<ResearcherPatch>(UPDATE_RULES, &body)?;
    Ok(state.researchers.update(id, patch).await)
}

#[delete("/{id}")]
async fn remove(state: web::Data<AppState>, path: web::Path<String>) -> ApiResult {
    let id = parse_id(&path)?;
    Ok(state.researchers.delete(id).await)
}

#[get("/getByName/{name}")]
async fn by_name(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<PageQuery>,
) -> ApiResult {
    let page = query.parse()?;
    Ok(state
        .researchers
        .search(ResearcherField::Name, &path, page)
        .await)
}

#[get("/getBySurname/{surname}")]
async fn by_surname(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<PageQuery>,
) -> ApiResult {
    let page = query.parse()?;
    Ok(state
        .researchers
        .search(ResearcherField::Surname, &path, page)
        .await)
}

#[get("/getBySecSurname/{secSurname}")]
async fn by_sec_surname(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<PageQuery>,
) -> ApiResult {
    let page = query.parse()?;
    Ok(state
        .researchers
        .search(ResearcherField::SecSurname, &path, page)
        .await)
}

#[get("/getByUniversity/{university}")]
async fn by_university(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<PageQuery>,
) -> ApiResult {
    let page = query.parse()?;
    Ok(state
        .researchers
        .search(ResearcherField::University, &path, page)
        .await)
}

#[get("/getAllArticlesByResearcherCompleteName/{name}/{surname}/{secSurname}")]
async fn articles_by_complete_name(
    state: web::Data<AppState>,
    path: web::Path<(String, String, String)>,
) -> ApiResult {
    let (name, surname, sec_surname) = path.into_inner();
    Ok(state
        .researchers
        .articles_by_complete_name(&name, &surname, &sec_surname)
        .await)
}

/// Routes under `/api/researcher`.
pub fn scope() -> Scope {
    web::scope("/researcher")
        .service(create)
        .service(get_all)
        .service(get_by_id)
        .service(by_name)
        .service(by_surname)
        .service(by_sec_surname)
        .service(by_university)
        .service(articles_by_complete_name)
        .service(update)
        .service(remove)
}
