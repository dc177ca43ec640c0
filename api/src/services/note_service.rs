// Note service - notes filtered, sorted and paginated in SQL, or in memory without a database

use std::fmt::Display;

use chrono::{NaiveDate, Utc};

use crate::collection::{query, Listing, Paginated};
use crate::error::{CatalogError, CatalogResult};
use crate::handlers::AppState;
use crate::models::{DeletedResponse, NoteData, NoteDraft, NoteListQuery, NotePatch};
use crate::services::{log_db_error, memory_key};

pub fn not_found(id: impl Display) -> CatalogError {
    CatalogError::NotFound(format!("Note with id {} not found", id))
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Lists notes. Without `page`/`limit` the full filtered list is returned as an array.
pub async fn list_notes(state: &AppState, params: &NoteListQuery) -> CatalogResult<Listing<NoteData>> {
    let filter = params.filter()?;
    let options = params.list.options()?;

    let Some(repositories) = state.database() else {
        let notes = state
            .notes
            .read(|notes| notes.filtered(|note| filter.matches(note)))
            .await;
        return Ok(query::apply(notes, &options));
    };

    let sort_by = options.sort_by.as_deref();
    let Some(page) = options.page else {
        let notes = repositories
            .notes
            .find(&filter, sort_by, options.order, None)
            .await
            .map_err(log_db_error("list_notes"))?;
        return Ok(Listing::All(notes.into_iter().map(NoteData::from).collect()));
    };

    let total = repositories
        .notes
        .count(&filter)
        .await
        .map_err(log_db_error("count_notes"))? as usize;
    let notes = if page.offset() >= total {
        Vec::new()
    } else {
        repositories
            .notes
            .find(&filter, sort_by, options.order, Some(page))
            .await
            .map_err(log_db_error("list_notes"))?
    };

    Ok(Listing::Page(Paginated {
        data: notes.into_iter().map(NoteData::from).collect(),
        page: page.page,
        limit: page.limit,
        total,
        total_pages: page.total_pages(total),
    }))
}

pub async fn get_note(state: &AppState, id: i32) -> CatalogResult<NoteData> {
    let Some(repositories) = state.database() else {
        let key = memory_key(id).ok_or_else(|| not_found(id))?;
        return state
            .notes
            .read(|notes| notes.get(key).cloned())
            .await
            .ok_or_else(|| not_found(id));
    };

    repositories
        .notes
        .get_by_id(id)
        .await
        .map_err(log_db_error("get_note"))?
        .map(NoteData::from)
        .ok_or_else(|| not_found(id))
}

pub async fn create_note(state: &AppState, draft: NoteDraft) -> CatalogResult<NoteData> {
    let input = draft.into_input(today())?;

    let note: NoteData = match state.database() {
        Some(repositories) => repositories
            .notes
            .create(&input)
            .await
            .map_err(log_db_error("create_note"))?
            .into(),
        None => {
            state
                .notes
                .write(|notes| notes.insert_with(|id| input.into_note(id as i32)))
                .await
        }
    };
    tracing::info!("Created note {} ({})", note.id, note.title);
    Ok(note)
}

/// Full replace; omitted optional fields take their create defaults.
/// A missing note is reported before the body is validated.
pub async fn replace_note(state: &AppState, id: i32, draft: NoteDraft) -> CatalogResult<NoteData> {
    let Some(repositories) = state.database() else {
        let key = memory_key(id).ok_or_else(|| not_found(id))?;
        return state
            .notes
            .write(|notes| {
                if !notes.contains(key) {
                    return Err(not_found(id));
                }
                let note = draft.into_input(today())?.into_note(id);
                notes.replace(key, note).ok_or_else(|| not_found(id))
            })
            .await;
    };

    get_note(state, id).await?;
    let input = draft.into_input(today())?;
    repositories
        .notes
        .replace(id, &input)
        .await
        .map_err(log_db_error("replace_note"))?
        .map(NoteData::from)
        .ok_or_else(|| not_found(id))
}

/// Writes only the supplied fields; an empty body is rejected
pub async fn patch_note(state: &AppState, id: i32, patch: NotePatch) -> CatalogResult<NoteData> {
    let Some(repositories) = state.database() else {
        let key = memory_key(id).ok_or_else(|| not_found(id))?;
        return state
            .notes
            .write(|notes| {
                if !notes.contains(key) {
                    return Err(not_found(id));
                }
                patch.validate()?;
                notes
                    .update(key, |note| patch.apply_to(note))
                    .ok_or_else(|| not_found(id))
            })
            .await;
    };

    get_note(state, id).await?;
    patch.validate()?;
    repositories
        .notes
        .patch(id, &patch)
        .await
        .map_err(log_db_error("patch_note"))?
        .map(NoteData::from)
        .ok_or_else(|| not_found(id))
}

pub async fn toggle_favorite(state: &AppState, id: i32) -> CatalogResult<NoteData> {
    let Some(repositories) = state.database() else {
        let key = memory_key(id).ok_or_else(|| not_found(id))?;
        return state
            .notes
            .write(|notes| notes.update(key, |note| note.is_favorite = !note.is_favorite))
            .await
            .ok_or_else(|| not_found(id));
    };

    repositories
        .notes
        .toggle_favorite(id)
        .await
        .map_err(log_db_error("toggle_note_favorite"))?
        .map(NoteData::from)
        .ok_or_else(|| not_found(id))
}

pub async fn delete_note(state: &AppState, id: i32) -> CatalogResult<DeletedResponse<NoteData>> {
    let deleted = match state.database() {
        Some(repositories) => repositories
            .notes
            .delete(id)
            .await
            .map_err(log_db_error("delete_note"))?
            .map(NoteData::from),
        None => match memory_key(id) {
            Some(key) => state.notes.write(|notes| notes.remove(key)).await,
            None => None,
        },
    }
    .ok_or_else(|| not_found(id))?;

    tracing::info!("Deleted note {}", id);
    Ok(DeletedResponse {
        message: format!("Note {} deleted", id),
        deleted,
    })
}
