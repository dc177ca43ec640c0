// Handlers for note endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::collection::Listing;
use crate::error::CatalogResult;
use crate::handlers::{row_id, AppJson, AppState};
use crate::models::{DeletedResponse, NoteData, NoteDraft, NoteListQuery, NotePatch};
use crate::services::note_service;

fn note_id(raw: &str) -> CatalogResult<i32> {
    row_id(raw).ok_or_else(|| note_service::not_found(raw))
}

/// Handler for GET /api/notes - Filters, sorting and paging
pub async fn list_notes(
    State(state): State<AppState>,
    Query(params): Query<NoteListQuery>,
) -> CatalogResult<Json<Listing<NoteData>>> {
    let notes = note_service::list_notes(&state, &params).await?;
    Ok(Json(notes))
}

/// Handler for GET /api/notes/{id}
pub async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> CatalogResult<Json<NoteData>> {
    let id = note_id(&id)?;
    let note = note_service::get_note(&state, id).await?;
    Ok(Json(note))
}

/// Handler for POST /api/notes
pub async fn create_note(
    State(state): State<AppState>,
    AppJson(draft): AppJson<NoteDraft>,
) -> CatalogResult<(StatusCode, Json<NoteData>)> {
    let note = note_service::create_note(&state, draft).await?;
    Ok((StatusCode::CREATED, Json(note)))
}

/// Handler for PUT /api/notes/{id}
pub async fn replace_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(draft): AppJson<NoteDraft>,
) -> CatalogResult<Json<NoteData>> {
    let id = note_id(&id)?;
    let note = note_service::replace_note(&state, id, draft).await?;
    Ok(Json(note))
}

/// Handler for PATCH /api/notes/{id}
pub async fn patch_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(patch): AppJson<NotePatch>,
) -> CatalogResult<Json<NoteData>> {
    let id = note_id(&id)?;
    let note = note_service::patch_note(&state, id, patch).await?;
    Ok(Json(note))
}

/// Handler for PATCH /api/notes/{id}/favorite
pub async fn toggle_favorite(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> CatalogResult<Json<NoteData>> {
    let id = note_id(&id)?;
    let note = note_service::toggle_favorite(&state, id).await?;
    Ok(Json(note))
}

/// Handler for DELETE /api/notes/{id}
pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> CatalogResult<Json<DeletedResponse<NoteData>>> {
    let id = note_id(&id)?;
    let deleted = note_service::delete_note(&state, id).await?;
    Ok(Json(deleted))
}
