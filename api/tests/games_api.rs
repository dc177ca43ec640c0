mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{get, memory_app, send, titles};

#[tokio::test]
async fn test_list_returns_seeded_games_in_order() {
    let app = memory_app();
    let (status, body) = get(&app, "/api/games").await;

    assert_eq!(status, StatusCode::OK);
    let games = body.as_array().expect("Bare array without pagination");
    assert_eq!(games.len(), 6);
    assert_eq!(games[0]["id"], 1);
    assert_eq!(games[1]["title"], "Super Mario Bros.");
    assert_eq!(games[1]["isFavorite"], true);
}

#[tokio::test]
async fn test_filters_combine() {
    let app = memory_app();

    let (_, body) = get(&app, "/api/games?platform=pc&isFavorite=false").await;
    assert_eq!(titles(&body), vec!["Half-Life", "Stardew Valley"]);

    let (_, body) = get(&app, "/api/games?title=ZELDA").await;
    assert_eq!(body.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_sort_and_paginate() {
    let app = memory_app();

    let (status, body) = get(&app, "/api/games?sortBy=year&order=desc&page=1&limit=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"], 1);
    assert_eq!(body["limit"], 2);
    assert_eq!(body["total"], 6);
    assert_eq!(body["totalPages"], 3);
    assert_eq!(titles(&body["data"]), vec!["Hades", "The Legend of Zelda: Breath of the Wild"]);

    // Past the end the slice is empty but the counts remain
    let (_, body) = get(&app, "/api/games?page=9&limit=5").await;
    assert_eq!(body["data"].as_array().map(Vec::len), Some(0));
    assert_eq!(body["totalPages"], 2);
}

#[tokio::test]
async fn test_unknown_sort_field_keeps_order() {
    let app = memory_app();
    let (_, plain) = get(&app, "/api/games").await;
    let (_, sorted) = get(&app, "/api/games?sortBy=rating").await;
    assert_eq!(plain, sorted);
}

#[tokio::test]
async fn test_invalid_pagination_is_rejected() {
    let app = memory_app();
    for uri in ["/api/games?page=0", "/api/games?limit=abc"] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert!(body["error"].is_string());
    }
}

#[tokio::test]
async fn test_get_by_id() {
    let app = memory_app();

    let (status, body) = get(&app, "/api/games/4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Hades");

    let (status, body) = get(&app, "/api/games/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["message"].is_string());

    // Non-numeric ids never match
    let (status, _) = get(&app, "/api/games/abc").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_derived_views() {
    let app = memory_app();

    let (_, retro) = get(&app, "/api/games/retro").await;
    assert_eq!(titles(&retro), vec!["Super Mario Bros.", "Half-Life", "Pac-Man"]);

    let (_, favorites) = get(&app, "/api/games/favorites").await;
    assert_eq!(favorites.as_array().map(Vec::len), Some(3));

    let (_, platforms) = get(&app, "/api/games/platforms").await;
    assert_eq!(platforms, json!(["Switch", "NES", "PC", "Arcade"]));
}

#[tokio::test]
async fn test_stats() {
    let app = memory_app();
    let (status, body) = get(&app, "/api/games/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 6);
    assert_eq!(body["favorites"], 3);
    // (2017 + 1985 + 1998 + 2020 + 1980 + 2016) / 6
    assert_eq!(body["averageYear"], 2002.67);
    assert_eq!(body["oldest"]["title"], "Pac-Man");
    assert_eq!(body["newest"]["title"], "Hades");
}

#[tokio::test]
async fn test_create_assigns_next_id_and_defaults() {
    let app = memory_app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/games",
        Some(json!({"title": "Celeste", "platform": "PC", "year": 2018})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 7);
    assert_eq!(body["isFavorite"], false);

    let (status, body) = send(&app, "POST", "/api/games", Some(json!({"title": "Nameless"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap_or_default().contains("platform"));

    let (_, list) = get(&app, "/api/games").await;
    assert_eq!(list.as_array().map(Vec::len), Some(7));
}

#[tokio::test]
async fn test_ids_are_not_reused_after_delete() {
    let app = memory_app();

    let (status, body) = send(&app, "DELETE", "/api/games/6", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted"]["title"], "Stardew Valley");

    let (_, body) = send(
        &app,
        "POST",
        "/api/games",
        Some(json!({"title": "Tetris", "platform": "Game Boy"})),
    )
    .await;
    assert_eq!(body["id"], 7);
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let app = memory_app();
    let (status, body) = common::send_raw(&app, "POST", "/api/games", "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_batch_skips_invalid_drafts() {
    let app = memory_app();
    let (status, body) = send(
        &app,
        "POST",
        "/api/games/batch",
        Some(json!([
            {"title": "Celeste", "platform": "PC"},
            {"title": "No Platform"},
            {"title": "Portal", "platform": "PC", "isFavorite": true}
        ])),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["count"], 2);
    assert_eq!(body["created"][0]["id"], 7);
    assert_eq!(body["created"][1]["id"], 8);
}

#[tokio::test]
async fn test_duplicate() {
    let app = memory_app();
    let (status, body) = send(&app, "POST", "/api/games/3/duplicate", None).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 7);
    assert_eq!(body["title"], "Copy of Half-Life");
    assert_eq!(body["year"], 1998);

    let (status, _) = send(&app, "POST", "/api/games/42/duplicate", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_replace_and_patch() {
    let app = memory_app();

    let (status, body) = send(
        &app,
        "PUT",
        "/api/games/2",
        Some(json!({"title": "Super Mario Bros. 3", "platform": "NES", "year": 1988})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 2);
    // Omitted optionals take create defaults
    assert_eq!(body["isFavorite"], false);

    let (status, body) = send(&app, "PATCH", "/api/games/2", Some(json!({"year": 1990}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Super Mario Bros. 3");
    assert_eq!(body["year"], 1990);

    let (status, _) = send(&app, "PATCH", "/api/games/77", Some(json!({"year": 1990}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "PUT", "/api/games/2", Some(json!({"title": "Only title"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_favorite_toggle_and_clear() {
    let app = memory_app();

    let (_, body) = send(&app, "PATCH", "/api/games/3/favorite", None).await;
    assert_eq!(body["isFavorite"], true);
    let (_, body) = send(&app, "PATCH", "/api/games/3/favorite", None).await;
    assert_eq!(body["isFavorite"], false);

    let (status, body) = send(&app, "PATCH", "/api/games/favorites/clear", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["updated"], 3);

    let (_, favorites) = get(&app, "/api/games/favorites").await;
    assert_eq!(favorites, json!([]));
}

#[tokio::test]
async fn test_delete_released_before() {
    let app = memory_app();

    let (status, body) = send(&app, "DELETE", "/api/games/released-before/1990", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted"], 2);

    let (_, list) = get(&app, "/api/games").await;
    assert_eq!(list.as_array().map(Vec::len), Some(4));

    let (status, _) = send(&app, "DELETE", "/api/games/released-before/soon", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_page_number_at_usize_max_returns_empty_slice() {
    let app = memory_app();
    let (status, body) = get(&app, "/api/games?page=18446744073709551615&limit=10").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(0));
    assert_eq!(body["total"], 6);
    assert_eq!(body["totalPages"], 1);
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let app = memory_app();
    let title = "x".repeat(2 * 1024 * 1024);
    let (status, _) = send(
        &app,
        "POST",
        "/api/games",
        Some(json!({"title": title, "platform": "PC"})),
    )
    .await;
    assert!(status.is_client_error(), "unexpected status {}", status);

    let (_, body) = get(&app, "/api/games").await;
    assert_eq!(body.as_array().map(Vec::len), Some(6));
}
