// Handlers for game endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::collection::Listing;
use crate::error::{CatalogError, CatalogResult};
use crate::handlers::{lenient_id, AppJson, AppState};
use crate::models::{
    BatchCreated, BulkDeleted, DeletedResponse, Game, GameDraft, GameListQuery, GamePatch,
    GameStats, UpdatedCount,
};
use crate::services::game_service;

fn game_id(raw: &str) -> CatalogResult<u32> {
    lenient_id(raw).ok_or_else(|| game_service::not_found(raw))
}

/// Handler for GET /api/games - Lists games with optional filters, sorting and paging
pub async fn list_games(
    State(state): State<AppState>,
    Query(params): Query<GameListQuery>,
) -> CatalogResult<Json<Listing<Game>>> {
    let games = game_service::list_games(&state, &params).await?;
    Ok(Json(games))
}

/// Handler for GET /api/games/retro
pub async fn get_retro_games(State(state): State<AppState>) -> Json<Vec<Game>> {
    Json(game_service::get_retro_games(&state).await)
}

/// Handler for GET /api/games/favorites
pub async fn get_favorite_games(State(state): State<AppState>) -> Json<Vec<Game>> {
    Json(game_service::get_favorite_games(&state).await)
}

/// Handler for GET /api/games/platforms
pub async fn get_platforms(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(game_service::get_platforms(&state).await)
}

/// Handler for GET /api/games/stats
pub async fn get_stats(State(state): State<AppState>) -> Json<GameStats> {
    Json(game_service::get_stats(&state).await)
}

/// Handler for GET /api/games/{id}
pub async fn get_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> CatalogResult<Json<Game>> {
    let game = game_service::get_game(&state, game_id(&id)?).await?;
    Ok(Json(game))
}

/// Handler for POST /api/games
pub async fn create_game(
    State(state): State<AppState>,
    AppJson(draft): AppJson<GameDraft>,
) -> CatalogResult<(StatusCode, Json<Game>)> {
    let game = game_service::create_game(&state, draft).await?;
    Ok((StatusCode::CREATED, Json(game)))
}

/// Handler for POST /api/games/batch - Adds every valid game in the array
pub async fn create_games(
    State(state): State<AppState>,
    AppJson(drafts): AppJson<Vec<GameDraft>>,
) -> (StatusCode, Json<BatchCreated<Game>>) {
    let created = game_service::create_games(&state, drafts).await;
    (StatusCode::CREATED, Json(created))
}

/// Handler for POST /api/games/{id}/duplicate
pub async fn duplicate_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> CatalogResult<(StatusCode, Json<Game>)> {
    let game = game_service::duplicate_game(&state, game_id(&id)?).await?;
    Ok((StatusCode::CREATED, Json(game)))
}

/// Handler for PUT /api/games/{id}
pub async fn replace_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(draft): AppJson<GameDraft>,
) -> CatalogResult<Json<Game>> {
    let game = game_service::replace_game(&state, game_id(&id)?, draft).await?;
    Ok(Json(game))
}

/// Handler for PATCH /api/games/{id}
pub async fn patch_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(patch): AppJson<GamePatch>,
) -> CatalogResult<Json<Game>> {
    let game = game_service::patch_game(&state, game_id(&id)?, patch).await?;
    Ok(Json(game))
}

/// Handler for PATCH /api/games/{id}/favorite
pub async fn toggle_favorite(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> CatalogResult<Json<Game>> {
    let game = game_service::toggle_favorite(&state, game_id(&id)?).await?;
    Ok(Json(game))
}

/// Handler for PATCH /api/games/favorites/clear
pub async fn clear_favorites(State(state): State<AppState>) -> Json<UpdatedCount> {
    Json(game_service::clear_favorites(&state).await)
}

/// Handler for DELETE /api/games/{id}
pub async fn delete_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> CatalogResult<Json<DeletedResponse<Game>>> {
    let deleted = game_service::delete_game(&state, game_id(&id)?).await?;
    Ok(Json(deleted))
}

/// Handler for DELETE /api/games/released-before/{year}
pub async fn delete_released_before(
    State(state): State<AppState>,
    Path(year): Path<String>,
) -> CatalogResult<Json<BulkDeleted>> {
    let year: i32 = year.trim().parse().map_err(|_| {
        CatalogError::InvalidRequest(format!("Invalid year '{}': must be a number", year))
    })?;
    Ok(Json(game_service::delete_released_before(&state, year).await))
}
