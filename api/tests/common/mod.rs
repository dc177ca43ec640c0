// Shared helpers for the router integration tests

#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use serde_json::Value;
use tower::ServiceExt;

use catalog_api::db::DbPool;
use catalog_api::{create_router, AppContext};

/// Router over freshly seeded in-memory collections and no database
pub fn memory_app() -> Router {
    create_router(AppContext::new(None).into_state())
}

/// Router backed by a migrated in-memory SQLite database
pub async fn database_app() -> Router {
    // A single connection keeps every query on the same in-memory database
    let options = ConnectOptions::new("sqlite::memory:".to_string())
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false)
        .to_owned();
    let conn = Database::connect(options)
        .await
        .expect("Failed to open SQLite database");
    Migrator::up(&conn, None)
        .await
        .expect("Failed to run migrations");

    let repositories = DbPool::from_connection(conn).repositories();
    create_router(AppContext::new(Some(repositories)).into_state())
}

/// Sends a request and returns the status with the decoded JSON body (`Null` when empty)
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build request");

    send_request(app, request).await
}

/// Sends a raw body with a JSON content type
pub async fn send_raw(app: &Router, method: &str, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request");

    send_request(app, request).await
}

async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Router failed to respond");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, "GET", uri, None).await
}

/// Titles of the records in a JSON array, in order
pub fn titles(value: &Value) -> Vec<String> {
    value
        .as_array()
        .expect("Expected a JSON array")
        .iter()
        .map(|record| record["title"].as_str().unwrap_or_default().to_string())
        .collect()
}
