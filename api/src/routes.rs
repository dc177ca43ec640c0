// Route table for the catalog API

use std::time::Duration;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, patch, post},
    Router,
};
use http::{header, Method, StatusCode};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{authors, books, categories, games, health, notes, AppState};

const MAX_BODY_BYTES: usize = 1024 * 1024;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::ORIGIN,
            header::AUTHORIZATION,
        ])
        .expose_headers([header::CONTENT_TYPE, header::CONTENT_LENGTH])
        .max_age(Duration::from_secs(3600))
}

fn game_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(games::list_games).post(games::create_game))
        .route("/retro", get(games::get_retro_games))
        .route("/favorites", get(games::get_favorite_games))
        .route("/favorites/clear", patch(games::clear_favorites))
        .route("/platforms", get(games::get_platforms))
        .route("/stats", get(games::get_stats))
        .route("/batch", post(games::create_games))
        .route("/released-before/{year}", delete(games::delete_released_before))
        .route(
            "/{id}",
            get(games::get_game)
                .put(games::replace_game)
                .patch(games::patch_game)
                .delete(games::delete_game),
        )
        .route("/{id}/duplicate", post(games::duplicate_game))
        .route("/{id}/favorite", patch(games::toggle_favorite))
}

fn book_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(books::list_books).post(books::create_book))
        .route("/stats", get(books::get_stats))
        .route("/genres", get(books::get_genres))
        .route("/batch", post(books::create_books))
        .route("/bulk-delete", post(books::delete_books))
        .route("/prices", patch(books::adjust_prices))
        .route("/out-of-stock", delete(books::delete_out_of_stock))
        .route(
            "/{id}",
            get(books::get_book)
                .put(books::replace_book)
                .patch(books::patch_book)
                .delete(books::delete_book),
        )
        .route("/{id}/duplicate", post(books::duplicate_book))
        .route("/{id}/discount", patch(books::apply_discount))
        .route("/{id}/rating", patch(books::set_rating))
        .route("/{id}/stock", patch(books::toggle_stock))
}

fn author_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(authors::list_authors).post(authors::create_author))
        .route("/nationalities", get(authors::get_nationalities))
        .route("/stats", get(authors::get_stats))
        .route("/batch", post(authors::create_authors))
        .route(
            "/{id}",
            get(authors::get_author)
                .put(authors::replace_author)
                .patch(authors::patch_author)
                .delete(authors::delete_author),
        )
}

fn category_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/{id}",
            get(categories::get_category)
                .put(categories::replace_category)
                .patch(categories::patch_category)
                .delete(categories::delete_category),
        )
        .route("/{id}/notes", get(categories::get_category_notes))
}

fn note_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(notes::list_notes).post(notes::create_note))
        .route(
            "/{id}",
            get(notes::get_note)
                .put(notes::replace_note)
                .patch(notes::patch_note)
                .delete(notes::delete_note),
        )
        .route("/{id}/favorite", patch(notes::toggle_favorite))
}

/// Builds the full application router with tracing, CORS, a body size cap and a request timeout
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .nest("/games", game_routes())
        .nest("/books", book_routes())
        .nest("/authors", author_routes())
        .nest("/categories", category_routes())
        .nest("/notes", note_routes());

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", api)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors())
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    REQUEST_TIMEOUT,
                ))
                .layer(DefaultBodyLimit::max(MAX_BODY_BYTES)),
        )
        .with_state(state)
}
