// Handlers Module
// This module contains the API endpoint handlers

pub mod authors;
pub mod books;
pub mod categories;
pub mod games;
pub mod health;
pub mod notes;

use axum::extract::FromRequest;

use crate::error::{CatalogError, CatalogResult};

pub use crate::state::AppState;

/// JSON body extractor whose rejections render as `CatalogError` (400 `{error}`)
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(CatalogError))]
pub struct AppJson<T>(pub T);

/// Path id where anything non-numeric simply matches no record
pub fn lenient_id(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

/// Path id that must be numeric
pub fn strict_id(raw: &str) -> CatalogResult<u32> {
    raw.trim().parse().map_err(|_| {
        CatalogError::InvalidRequest(format!("Invalid id '{}': must be a number", raw))
    })
}

/// Path id for notes and categories (`i32`, matching the table keys)
pub fn row_id(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient_id() {
        assert_eq!(lenient_id("7"), Some(7));
        assert_eq!(lenient_id("abc"), None);
        assert_eq!(lenient_id("-1"), None);
    }

    #[test]
    fn test_strict_id() {
        assert_eq!(strict_id("3").unwrap(), 3);
        assert!(matches!(
            strict_id("x3"),
            Err(CatalogError::InvalidRequest(_))
        ));
    }
}
