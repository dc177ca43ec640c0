// Category service - categories and their notes, persisted or in memory

use std::fmt::Display;

use crate::entity::categories;
use crate::error::{CatalogError, CatalogResult};
use crate::handlers::AppState;
use crate::models::{contains_ci, CategoryDraft, CategoryListQuery, CategoryPatch, DeletedResponse, NoteData};
use crate::services::{log_db_error, memory_key};

pub fn not_found(id: impl Display) -> CatalogError {
    CatalogError::NotFound(format!("Category with id {} not found", id))
}

pub async fn list_categories(
    state: &AppState,
    params: &CategoryListQuery,
) -> CatalogResult<Vec<categories::Model>> {
    let name = params.name.as_deref().filter(|n| !n.is_empty());

    let Some(repositories) = state.database() else {
        let categories = state
            .categories
            .read(|items| {
                items.filtered(|category| name.map_or(true, |n| contains_ci(&category.name, n)))
            })
            .await;
        return Ok(categories);
    };

    repositories
        .categories
        .find_all(name)
        .await
        .map_err(log_db_error("list_categories"))
}

pub async fn get_category(state: &AppState, id: i32) -> CatalogResult<categories::Model> {
    let Some(repositories) = state.database() else {
        let key = memory_key(id).ok_or_else(|| not_found(id))?;
        return state
            .categories
            .read(|items| items.get(key).cloned())
            .await
            .ok_or_else(|| not_found(id));
    };

    repositories
        .categories
        .get_by_id(id)
        .await
        .map_err(log_db_error("get_category"))?
        .ok_or_else(|| not_found(id))
}

/// Notes filed under a category; 404 when the category itself is missing
pub async fn get_category_notes(state: &AppState, id: i32) -> CatalogResult<Vec<NoteData>> {
    get_category(state, id).await?;

    let Some(repositories) = state.database() else {
        let notes = state
            .notes
            .read(|notes| notes.filtered(|note| note.category_id == Some(id)))
            .await;
        return Ok(notes);
    };

    let notes = repositories
        .categories
        .find_notes(id)
        .await
        .map_err(log_db_error("get_category_notes"))?;
    Ok(notes.into_iter().map(NoteData::from).collect())
}

pub async fn create_category(
    state: &AppState,
    draft: CategoryDraft,
) -> CatalogResult<categories::Model> {
    let name = draft.validate()?;

    let category = match state.database() {
        Some(repositories) => repositories
            .categories
            .create(name, draft.description)
            .await
            .map_err(log_db_error("create_category"))?,
        None => {
            state
                .categories
                .write(|items| {
                    items.insert_with(|id| categories::Model {
                        id: id as i32,
                        name,
                        description: draft.description,
                    })
                })
                .await
        }
    };
    tracing::info!("Created category {} ({})", category.id, category.name);
    Ok(category)
}

/// Full replace; an omitted description is cleared.
/// A missing category is reported before the body is validated.
pub async fn replace_category(
    state: &AppState,
    id: i32,
    draft: CategoryDraft,
) -> CatalogResult<categories::Model> {
    let Some(repositories) = state.database() else {
        let key = memory_key(id).ok_or_else(|| not_found(id))?;
        return state
            .categories
            .write(|items| {
                if !items.contains(key) {
                    return Err(not_found(id));
                }
                let category = categories::Model {
                    id,
                    name: draft.validate()?,
                    description: draft.description,
                };
                items.replace(key, category).ok_or_else(|| not_found(id))
            })
            .await;
    };

    get_category(state, id).await?;
    let name = draft.validate()?;
    repositories
        .categories
        .replace(id, name, draft.description)
        .await
        .map_err(log_db_error("replace_category"))?
        .ok_or_else(|| not_found(id))
}

fn require_fields(patch: &CategoryPatch) -> CatalogResult<()> {
    if patch.is_empty() {
        return Err(CatalogError::InvalidRequest(
            "No fields provided to update".to_string(),
        ));
    }
    patch.validate()
}

/// Writes only the supplied fields; an empty body is rejected
pub async fn patch_category(
    state: &AppState,
    id: i32,
    patch: CategoryPatch,
) -> CatalogResult<categories::Model> {
    let Some(repositories) = state.database() else {
        let key = memory_key(id).ok_or_else(|| not_found(id))?;
        return state
            .categories
            .write(|items| {
                if !items.contains(key) {
                    return Err(not_found(id));
                }
                require_fields(&patch)?;
                items
                    .update(key, |category| patch.apply_to(category))
                    .ok_or_else(|| not_found(id))
            })
            .await;
    };

    get_category(state, id).await?;
    require_fields(&patch)?;
    repositories
        .categories
        .patch(id, &patch)
        .await
        .map_err(log_db_error("patch_category"))?
        .ok_or_else(|| not_found(id))
}

/// In memory the notes keep their `category_id`; the database sets it to null
pub async fn delete_category(
    state: &AppState,
    id: i32,
) -> CatalogResult<DeletedResponse<categories::Model>> {
    let deleted = match state.database() {
        Some(repositories) => repositories
            .categories
            .delete(id)
            .await
            .map_err(log_db_error("delete_category"))?,
        None => match memory_key(id) {
            Some(key) => state.categories.write(|items| items.remove(key)).await,
            None => None,
        },
    }
    .ok_or_else(|| not_found(id))?;

    tracing::info!("Deleted category {}", id);
    Ok(DeletedResponse {
        message: format!("Category {} deleted", id),
        deleted,
    })
}
