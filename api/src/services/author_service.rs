// Author service - business logic over the in-memory authors collection

use std::fmt::Display;

use crate::collection::{query, stats, Listing};
use crate::error::{CatalogError, CatalogResult};
use crate::handlers::AppState;
use crate::models::{
    Author, AuthorDraft, AuthorListQuery, AuthorPatch, AuthorStats, BatchCreated, DeletedResponse,
};

pub fn not_found(id: impl Display) -> CatalogError {
    CatalogError::NotFound(format!("Author with id {} not found", id))
}

pub async fn list_authors(
    state: &AppState,
    params: &AuthorListQuery,
) -> CatalogResult<Listing<Author>> {
    let options = params.list.options()?;
    let authors = state
        .authors
        .read(|authors| authors.filtered(|a| params.matches(a)))
        .await;
    Ok(query::apply(authors, &options))
}

pub async fn get_author(state: &AppState, id: u32) -> CatalogResult<Author> {
    state
        .authors
        .read(|authors| authors.get(id).cloned())
        .await
        .ok_or_else(|| not_found(id))
}

pub async fn get_nationalities(state: &AppState) -> Vec<String> {
    state
        .authors
        .read(|authors| stats::distinct(authors.all(), |a| a.nationality.clone()))
        .await
}

pub async fn get_stats(state: &AppState) -> AuthorStats {
    state
        .authors
        .read(|authors| {
            let all = authors.all();
            let born: Vec<Author> = authors.filtered(|a| a.birth_year.is_some());
            AuthorStats {
                total: all.len(),
                nationalities: stats::distinct(all, |a| a.nationality.clone()).len(),
                oldest: stats::min_by(&born, |a, b| a.birth_year.cmp(&b.birth_year)).cloned(),
            }
        })
        .await
}

pub async fn create_author(state: &AppState, draft: AuthorDraft) -> CatalogResult<Author> {
    draft.validate()?;
    let author = state
        .authors
        .write(|authors| authors.insert_with(|id| draft.into_record(id)))
        .await;
    tracing::info!(
        "Created author {} ({} {})",
        author.id,
        author.first_name,
        author.last_name
    );
    Ok(author)
}

pub async fn create_authors(state: &AppState, drafts: Vec<AuthorDraft>) -> BatchCreated<Author> {
    let created: Vec<Author> = state
        .authors
        .write(|authors| {
            drafts
                .into_iter()
                .filter(|draft| draft.validate().is_ok())
                .map(|draft| authors.insert_with(|id| draft.into_record(id)))
                .collect()
        })
        .await;
    BatchCreated {
        count: created.len(),
        created,
    }
}

pub async fn replace_author(
    state: &AppState,
    id: u32,
    draft: AuthorDraft,
) -> CatalogResult<Author> {
    state
        .authors
        .write(|authors| {
            if !authors.contains(id) {
                return Err(not_found(id));
            }
            draft.validate()?;
            authors
                .replace(id, draft.into_record(id))
                .ok_or_else(|| not_found(id))
        })
        .await
}

pub async fn patch_author(state: &AppState, id: u32, patch: AuthorPatch) -> CatalogResult<Author> {
    state
        .authors
        .write(|authors| {
            if !authors.contains(id) {
                return Err(not_found(id));
            }
            patch.validate()?;
            authors
                .update(id, |author| patch.apply_to(author))
                .ok_or_else(|| not_found(id))
        })
        .await
}

pub async fn delete_author(state: &AppState, id: u32) -> CatalogResult<DeletedResponse<Author>> {
    let deleted = state
        .authors
        .write(|authors| authors.remove(id))
        .await
        .ok_or_else(|| not_found(id))?;
    tracing::info!("Deleted author {}", id);
    Ok(DeletedResponse {
        message: format!("Author {} deleted", id),
        deleted,
    })
}
