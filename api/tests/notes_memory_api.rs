mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{get, memory_app, send, titles};

#[tokio::test]
async fn test_seeded_notes_and_categories() {
    let app = memory_app();

    let (status, notes) = get(&app, "/api/notes").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        titles(&notes),
        vec!["Sprint planning", "Quarterly report", "Groceries", "Side project", "Loose thought"]
    );
    assert_eq!(notes[0]["category_id"], 1);
    assert!(notes[4]["category_id"].is_null());

    let (status, categories) = get(&app, "/api/categories").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(categories.as_array().map(Vec::len), Some(3));

    let (_, list) = get(&app, "/api/categories?name=IDEA").await;
    assert_eq!(list[0]["name"], "Ideas");
}

#[tokio::test]
async fn test_filters_sorting_and_paging() {
    let app = memory_app();

    let (_, body) = get(&app, "/api/notes?category_id=1&sortBy=title").await;
    assert_eq!(titles(&body), vec!["Quarterly report", "Sprint planning"]);

    let (_, body) = get(&app, "/api/notes?isFavorite=true").await;
    assert_eq!(titles(&body), vec!["Sprint planning", "Side project"]);

    let (_, body) = get(&app, "/api/notes?title=RO").await;
    assert_eq!(titles(&body), vec!["Groceries", "Side project"]);

    let (status, body) = get(&app, "/api/notes?sortBy=date&order=desc&page=1&limit=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 5);
    assert_eq!(body["totalPages"], 3);
    assert_eq!(titles(&body["data"]), vec!["Loose thought", "Groceries"]);

    let (status, _) = get(&app, "/api/notes?category_id=work").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_fills_defaults_and_allows_unknown_category() {
    let app = memory_app();

    let (status, note) = send(
        &app,
        "POST",
        "/api/notes",
        Some(json!({"title": "Orphan", "content": "x", "category_id": 42})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(note["id"], 6);
    assert_eq!(note["color"], "red");
    assert_eq!(note["isFavorite"], false);
    assert_eq!(note["category_id"], 42);

    let (status, _) = send(&app, "POST", "/api/notes", Some(json!({"content": "x"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_replace_and_patch() {
    let app = memory_app();

    let (status, note) = send(
        &app,
        "PUT",
        "/api/notes/1",
        Some(json!({"title": "Retro", "content": "What went well", "date": "2025-03-01"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(note["id"], 1);
    assert_eq!(note["color"], "red");
    assert_eq!(note["isFavorite"], false);
    assert!(note["category_id"].is_null());

    let (status, note) = send(&app, "PATCH", "/api/notes/3", Some(json!({"color": "blue"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(note["color"], "blue");
    assert_eq!(note["title"], "Groceries");
    assert_eq!(note["category_id"], 2);

    let (status, _) = send(&app, "PATCH", "/api/notes/3", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // A missing note wins over an invalid body
    let (status, _) = send(&app, "PUT", "/api/notes/99", Some(json!({"title": "x"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, "PUT", "/api/notes/1", Some(json!({"title": "x"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_toggle_and_delete() {
    let app = memory_app();

    let (_, note) = send(&app, "PATCH", "/api/notes/2/favorite", None).await;
    assert_eq!(note["isFavorite"], true);

    let (status, body) = send(&app, "DELETE", "/api/notes/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted"]["title"], "Quarterly report");

    let (status, _) = get(&app, "/api/notes/2").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = get(&app, "/api/notes/abc").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, "DELETE", "/api/notes/-1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_category_crud_leaves_note_references() {
    let app = memory_app();

    let (_, notes) = get(&app, "/api/categories/1/notes").await;
    assert_eq!(titles(&notes), vec!["Sprint planning", "Quarterly report"]);

    let (status, category) = send(
        &app,
        "POST",
        "/api/categories",
        Some(json!({"name": "Travel"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(category["id"], 4);

    let (status, body) = send(&app, "PATCH", "/api/categories/2", Some(json!({"description": null}))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["description"].is_null());

    let (status, _) = send(&app, "PUT", "/api/categories/99", Some(json!({}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, "DELETE", "/api/categories/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted"]["name"], "Work");

    // References are not enforced in memory
    let (_, note) = get(&app, "/api/notes/1").await;
    assert_eq!(note["category_id"], 1);
    let (status, _) = get(&app, "/api/categories/1/notes").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
