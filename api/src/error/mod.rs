use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::collection::QueryError;
use crate::db::DbError;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            CatalogError::DatabaseError(details) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Database error", "details": details }),
            ),
            CatalogError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "message": msg })),
            CatalogError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
        };

        (status, Json(body)).into_response()
    }
}

// DbError to CatalogError conversion implementation
impl From<DbError> for CatalogError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::ConstraintViolation(msg) => CatalogError::InvalidRequest(msg),
            DbError::ConnectionError(msg) | DbError::QueryError(msg) => {
                CatalogError::DatabaseError(msg)
            }
        }
    }
}

impl From<QueryError> for CatalogError {
    fn from(err: QueryError) -> Self {
        CatalogError::InvalidRequest(err.to_string())
    }
}

impl From<JsonRejection> for CatalogError {
    fn from(rejection: JsonRejection) -> Self {
        CatalogError::InvalidRequest(rejection.body_text())
    }
}
