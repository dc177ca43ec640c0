// Handlers for author endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::collection::Listing;
use crate::error::CatalogResult;
use crate::handlers::{lenient_id, AppJson, AppState};
use crate::models::{
    Author, AuthorDraft, AuthorListQuery, AuthorPatch, AuthorStats, BatchCreated, DeletedResponse,
};
use crate::services::author_service;

fn author_id(raw: &str) -> CatalogResult<u32> {
    lenient_id(raw).ok_or_else(|| author_service::not_found(raw))
}

/// Handler for GET /api/authors
pub async fn list_authors(
    State(state): State<AppState>,
    Query(params): Query<AuthorListQuery>,
) -> CatalogResult<Json<Listing<Author>>> {
    let authors = author_service::list_authors(&state, &params).await?;
    Ok(Json(authors))
}

/// Handler for GET /api/authors/nationalities
pub async fn get_nationalities(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(author_service::get_nationalities(&state).await)
}

/// Handler for GET /api/authors/stats
pub async fn get_stats(State(state): State<AppState>) -> Json<AuthorStats> {
    Json(author_service::get_stats(&state).await)
}

/// Handler for GET /api/authors/{id}
pub async fn get_author(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> CatalogResult<Json<Author>> {
    let author = author_service::get_author(&state, author_id(&id)?).await?;
    Ok(Json(author))
}

/// Handler for POST /api/authors
pub async fn create_author(
    State(state): State<AppState>,
    AppJson(draft): AppJson<AuthorDraft>,
) -> CatalogResult<(StatusCode, Json<Author>)> {
    let author = author_service::create_author(&state, draft).await?;
    Ok((StatusCode::CREATED, Json(author)))
}

/// Handler for POST /api/authors/batch
pub async fn create_authors(
    State(state): State<AppState>,
    AppJson(drafts): AppJson<Vec<AuthorDraft>>,
) -> (StatusCode, Json<BatchCreated<Author>>) {
    let created = author_service::create_authors(&state, drafts).await;
    (StatusCode::CREATED, Json(created))
}

/// Handler for PUT /api/authors/{id}
pub async fn replace_author(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(draft): AppJson<AuthorDraft>,
) -> CatalogResult<Json<Author>> {
    let author = author_service::replace_author(&state, author_id(&id)?, draft).await?;
    Ok(Json(author))
}

/// Handler for PATCH /api/authors/{id}
pub async fn patch_author(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(patch): AppJson<AuthorPatch>,
) -> CatalogResult<Json<Author>> {
    let author = author_service::patch_author(&state, author_id(&id)?, patch).await?;
    Ok(Json(author))
}

/// Handler for DELETE /api/authors/{id}
pub async fn delete_author(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> CatalogResult<Json<DeletedResponse<Author>>> {
    let deleted = author_service::delete_author(&state, author_id(&id)?).await?;
    Ok(Json(deleted))
}
