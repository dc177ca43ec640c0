// Business logic service implementations

pub mod author_service;
pub mod book_service;
pub mod category_service;
pub mod game_service;
pub mod health;
pub mod note_service;

use crate::db::DbError;
use crate::error::CatalogError;

/// Logs a failed database call under the operation name before converting it
pub(crate) fn log_db_error(operation: &'static str) -> impl FnOnce(DbError) -> CatalogError {
    move |err| {
        tracing::warn!("Database error in {}: {:?}", operation, err);
        err.into()
    }
}

/// Key of a persisted-style id in an in-memory collection; negative ids match nothing
pub(crate) fn memory_key(id: i32) -> Option<u32> {
    u32::try_from(id).ok()
}
