// API request/response models

pub mod author;
pub mod book;
pub mod category;
pub mod game;
pub mod note;

pub use author::{Author, AuthorDraft, AuthorListQuery, AuthorPatch, AuthorStats};
pub use book::{Book, BookDraft, BookListQuery, BookPatch, BookStats};
pub use category::{CategoryDraft, CategoryListQuery, CategoryPatch};
pub use game::{Game, GameDraft, GameListQuery, GamePatch, GameStats};
pub use note::{NoteData, NoteDraft, NoteFilter, NoteInput, NoteListQuery, NotePatch};

use serde::{Deserialize, Deserializer, Serialize};

use crate::collection::{ListOptions, QueryError};
use crate::error::{CatalogError, CatalogResult};

/// Distinguishes an explicit `null` from an absent field: absent stays `None`
/// through `#[serde(default)]`, `null` becomes `Some(None)`.
pub(crate) fn deserialize_nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Common sorting and pagination parameters for list endpoints.
/// Values stay strings here so flattened query structs deserialize cleanly.
#[derive(Debug, Deserialize, Default)]
pub struct ListParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
    pub order: Option<String>,
}

impl ListParams {
    pub fn options(&self) -> Result<ListOptions, QueryError> {
        ListOptions::parse(
            self.page.as_deref(),
            self.limit.as_deref(),
            self.sort_by.as_deref(),
            self.order.as_deref(),
        )
    }
}

/// Response body for single-record deletions
#[derive(Debug, Serialize)]
pub struct DeletedResponse<T> {
    pub message: String,
    pub deleted: T,
}

/// Response body for batch creation: how many were added and the records themselves
#[derive(Debug, Serialize)]
pub struct BatchCreated<T> {
    pub count: usize,
    pub created: Vec<T>,
}

/// Response body for collection-wide updates
#[derive(Debug, Serialize)]
pub struct UpdatedCount {
    pub message: String,
    pub updated: usize,
}

/// Response body for bulk deletions
#[derive(Debug, Serialize)]
pub struct BulkDeleted {
    pub message: String,
    pub deleted: usize,
    #[serde(rename = "notFound", skip_serializing_if = "Option::is_none")]
    pub not_found: Option<Vec<u32>>,
}

/// Request body for deleting several records by id
#[derive(Debug, Deserialize)]
pub struct IdsRequest {
    #[serde(default)]
    pub ids: Vec<u32>,
}

/// Request body carrying a percentage
#[derive(Debug, Deserialize)]
pub struct PercentRequest {
    pub percent: Option<f64>,
}

/// Request body carrying a rating
#[derive(Debug, Deserialize)]
pub struct RatingRequest {
    pub rating: Option<f64>,
}

/// A required text field: present and not blank
pub fn require_text(value: Option<&str>, field: &str) -> CatalogResult<String> {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text.to_string()),
        _ => Err(CatalogError::InvalidRequest(format!(
            "Field '{}' is required",
            field
        ))),
    }
}

/// An optional text field that, when supplied, must not be blank
pub fn reject_blank(value: Option<&str>, field: &str) -> CatalogResult<()> {
    match value {
        Some(text) if text.trim().is_empty() => Err(CatalogError::InvalidRequest(format!(
            "Field '{}' cannot be empty",
            field
        ))),
        _ => Ok(()),
    }
}

/// Case-insensitive substring test
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// `"true"`/`"false"` query flags; anything else means "no filter"
pub fn parse_flag(value: Option<&str>) -> Option<bool> {
    match value {
        Some("true") => Some(true),
        Some("false") => Some(false),
        _ => None,
    }
}

/// Current calendar year, the default `year` for new records
pub fn current_year() -> i32 {
    use chrono::Datelike;
    chrono::Utc::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text() {
        assert_eq!(require_text(Some("  Doom "), "title").unwrap(), "Doom");
        assert!(require_text(Some("   "), "title").is_err());
        assert!(require_text(None, "title").is_err());
    }

    #[test]
    fn test_parse_flag_only_accepts_literals() {
        assert_eq!(parse_flag(Some("true")), Some(true));
        assert_eq!(parse_flag(Some("false")), Some(false));
        assert_eq!(parse_flag(Some("yes")), None);
    }

    #[test]
    fn test_contains_ci() {
        assert!(contains_ci("The Hobbit", "hOb"));
        assert!(!contains_ci("Dune", "x"));
    }

    #[test]
    fn test_list_params_into_options() {
        let params = ListParams {
            page: Some("2".into()),
            limit: Some("abc".into()),
            ..Default::default()
        };
        assert!(params.options().is_err());
    }
}
