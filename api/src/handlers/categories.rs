// Handlers for category endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::entity::categories;
use crate::error::CatalogResult;
use crate::handlers::{row_id, AppJson, AppState};
use crate::models::{CategoryDraft, CategoryListQuery, CategoryPatch, DeletedResponse, NoteData};
use crate::services::category_service;

fn category_id(raw: &str) -> CatalogResult<i32> {
    row_id(raw).ok_or_else(|| category_service::not_found(raw))
}

/// Handler for GET /api/categories
pub async fn list_categories(
    State(state): State<AppState>,
    Query(params): Query<CategoryListQuery>,
) -> CatalogResult<Json<Vec<categories::Model>>> {
    let categories = category_service::list_categories(&state, &params).await?;
    Ok(Json(categories))
}

/// Handler for GET /api/categories/{id}
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> CatalogResult<Json<categories::Model>> {
    let id = category_id(&id)?;
    let category = category_service::get_category(&state, id).await?;
    Ok(Json(category))
}

/// Handler for GET /api/categories/{id}/notes
pub async fn get_category_notes(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> CatalogResult<Json<Vec<NoteData>>> {
    let id = category_id(&id)?;
    let notes = category_service::get_category_notes(&state, id).await?;
    Ok(Json(notes))
}

/// Handler for POST /api/categories
pub async fn create_category(
    State(state): State<AppState>,
    AppJson(draft): AppJson<CategoryDraft>,
) -> CatalogResult<(StatusCode, Json<categories::Model>)> {
    let category = category_service::create_category(&state, draft).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// Handler for PUT /api/categories/{id}
pub async fn replace_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(draft): AppJson<CategoryDraft>,
) -> CatalogResult<Json<categories::Model>> {
    let id = category_id(&id)?;
    let category = category_service::replace_category(&state, id, draft).await?;
    Ok(Json(category))
}

/// Handler for PATCH /api/categories/{id}
pub async fn patch_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(patch): AppJson<CategoryPatch>,
) -> CatalogResult<Json<categories::Model>> {
    let id = category_id(&id)?;
    let category = category_service::patch_category(&state, id, patch).await?;
    Ok(Json(category))
}

/// Handler for DELETE /api/categories/{id}
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> CatalogResult<Json<DeletedResponse<categories::Model>>> {
    let id = category_id(&id)?;
    let deleted = category_service::delete_category(&state, id).await?;
    Ok(Json(deleted))
}
