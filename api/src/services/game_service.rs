// Game service - business logic over the in-memory games collection

use std::fmt::Display;

use crate::collection::{query, stats, Listing};
use crate::error::{CatalogError, CatalogResult};
use crate::handlers::AppState;
use crate::models::{
    BatchCreated, BulkDeleted, DeletedResponse, Game, GameDraft, GameListQuery, GamePatch,
    GameStats, UpdatedCount,
};

/// Latest release year still counted as retro
pub const RETRO_CUTOFF_YEAR: i32 = 2000;

pub fn not_found(id: impl Display) -> CatalogError {
    CatalogError::NotFound(format!("Game with id {} not found", id))
}

/// Filtered, sorted and optionally paginated games
pub async fn list_games(state: &AppState, params: &GameListQuery) -> CatalogResult<Listing<Game>> {
    let options = params.list.options()?;
    let games = state.games.read(|games| games.filtered(|g| params.matches(g))).await;
    Ok(query::apply(games, &options))
}

pub async fn get_game(state: &AppState, id: u32) -> CatalogResult<Game> {
    state
        .games
        .read(|games| games.get(id).cloned())
        .await
        .ok_or_else(|| not_found(id))
}

/// Games released in or before the retro cutoff, in collection order
pub async fn get_retro_games(state: &AppState) -> Vec<Game> {
    state
        .games
        .read(|games| games.filtered(|g| g.year <= RETRO_CUTOFF_YEAR))
        .await
}

pub async fn get_favorite_games(state: &AppState) -> Vec<Game> {
    state.games.read(|games| games.filtered(|g| g.is_favorite)).await
}

/// Distinct platforms in first-seen order
pub async fn get_platforms(state: &AppState) -> Vec<String> {
    state
        .games
        .read(|games| stats::distinct(games.all(), |g| g.platform.clone()))
        .await
}

pub async fn get_stats(state: &AppState) -> GameStats {
    state
        .games
        .read(|games| {
            let all = games.all();
            GameStats {
                total: all.len(),
                favorites: stats::count_where(all, |g| g.is_favorite),
                average_year: stats::mean(all, |g| g.year as f64),
                oldest: stats::min_by(all, |a, b| a.year.cmp(&b.year)).cloned(),
                newest: stats::max_by(all, |a, b| a.year.cmp(&b.year)).cloned(),
            }
        })
        .await
}

pub async fn create_game(state: &AppState, draft: GameDraft) -> CatalogResult<Game> {
    draft.validate()?;
    let game = state
        .games
        .write(|games| games.insert_with(|id| draft.into_record(id)))
        .await;
    tracing::info!("Created game {} ({})", game.id, game.title);
    Ok(game)
}

/// Adds every valid draft; invalid ones are skipped
pub async fn create_games(state: &AppState, drafts: Vec<GameDraft>) -> BatchCreated<Game> {
    let submitted = drafts.len();
    let created: Vec<Game> = state
        .games
        .write(|games| {
            drafts
                .into_iter()
                .filter(|draft| draft.validate().is_ok())
                .map(|draft| games.insert_with(|id| draft.into_record(id)))
                .collect()
        })
        .await;
    tracing::info!("Batch created {} of {} games", created.len(), submitted);
    BatchCreated {
        count: created.len(),
        created,
    }
}

pub async fn duplicate_game(state: &AppState, id: u32) -> CatalogResult<Game> {
    state
        .games
        .write(|games| {
            let original = games.get(id).cloned().ok_or_else(|| not_found(id))?;
            Ok(games.insert_with(|new_id| original.duplicate(new_id)))
        })
        .await
}

/// Full replace; omitted optional fields take their create defaults
pub async fn replace_game(state: &AppState, id: u32, draft: GameDraft) -> CatalogResult<Game> {
    state
        .games
        .write(|games| {
            if !games.contains(id) {
                return Err(not_found(id));
            }
            draft.validate()?;
            games
                .replace(id, draft.into_record(id))
                .ok_or_else(|| not_found(id))
        })
        .await
}

pub async fn patch_game(state: &AppState, id: u32, patch: GamePatch) -> CatalogResult<Game> {
    state
        .games
        .write(|games| {
            if !games.contains(id) {
                return Err(not_found(id));
            }
            patch.validate()?;
            games
                .update(id, |game| patch.apply_to(game))
                .ok_or_else(|| not_found(id))
        })
        .await
}

pub async fn toggle_favorite(state: &AppState, id: u32) -> CatalogResult<Game> {
    state
        .games
        .write(|games| games.update(id, |game| game.is_favorite = !game.is_favorite))
        .await
        .ok_or_else(|| not_found(id))
}

/// Unmarks every favorite game
pub async fn clear_favorites(state: &AppState) -> UpdatedCount {
    let updated = state
        .games
        .write(|games| {
            games.update_all(|game| std::mem::replace(&mut game.is_favorite, false))
        })
        .await;
    UpdatedCount {
        message: format!("Cleared {} favorite games", updated),
        updated,
    }
}

pub async fn delete_game(state: &AppState, id: u32) -> CatalogResult<DeletedResponse<Game>> {
    let deleted = state
        .games
        .write(|games| games.remove(id))
        .await
        .ok_or_else(|| not_found(id))?;
    tracing::info!("Deleted game {}", id);
    Ok(DeletedResponse {
        message: format!("Game {} deleted", id),
        deleted,
    })
}

/// Removes every game released strictly before `year`
pub async fn delete_released_before(state: &AppState, year: i32) -> BulkDeleted {
    let deleted = state
        .games
        .write(|games| games.remove_where(|g| g.year < year))
        .await;
    tracing::info!("Deleted {} games released before {}", deleted, year);
    BulkDeleted {
        message: format!("Deleted {} games released before {}", deleted, year),
        deleted,
        not_found: None,
    }
}
