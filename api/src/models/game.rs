// Game records and their request bodies

use serde::{Deserialize, Serialize};

use super::{contains_ci, current_year, parse_flag, reject_blank, require_text, ListParams};
use crate::collection::{Record, SortKey};
use crate::error::CatalogResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: u32,
    pub title: String,
    pub platform: String,
    pub year: i32,
    pub is_favorite: bool,
}

impl Record for Game {
    fn id(&self) -> u32 {
        self.id
    }

    fn sort_key(&self, field: &str) -> Option<SortKey> {
        match field {
            "id" => Some(SortKey::Int(self.id as i64)),
            "title" => Some(SortKey::Text(self.title.clone())),
            "platform" => Some(SortKey::Text(self.platform.clone())),
            "year" => Some(SortKey::Int(self.year as i64)),
            "isFavorite" => Some(SortKey::Bool(self.is_favorite)),
            _ => None,
        }
    }
}

impl Game {
    /// Same game under a new id, titled "Copy of ..."
    pub fn duplicate(&self, id: u32) -> Game {
        Game {
            id,
            title: format!("Copy of {}", self.title),
            ..self.clone()
        }
    }
}

/// Body for POST and PUT. `title` and `platform` are required.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDraft {
    pub title: Option<String>,
    pub platform: Option<String>,
    pub year: Option<i32>,
    pub is_favorite: Option<bool>,
}

impl GameDraft {
    pub fn validate(&self) -> CatalogResult<()> {
        require_text(self.title.as_deref(), "title")?;
        require_text(self.platform.as_deref(), "platform")?;
        Ok(())
    }

    /// Builds the record; call [`GameDraft::validate`] first
    pub fn into_record(self, id: u32) -> Game {
        Game {
            id,
            title: self.title.unwrap_or_default().trim().to_string(),
            platform: self.platform.unwrap_or_default().trim().to_string(),
            year: self.year.unwrap_or_else(current_year),
            is_favorite: self.is_favorite.unwrap_or(false),
        }
    }
}

/// Body for PATCH; only supplied fields change
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GamePatch {
    pub title: Option<String>,
    pub platform: Option<String>,
    pub year: Option<i32>,
    pub is_favorite: Option<bool>,
}

impl GamePatch {
    pub fn validate(&self) -> CatalogResult<()> {
        reject_blank(self.title.as_deref(), "title")?;
        reject_blank(self.platform.as_deref(), "platform")?;
        Ok(())
    }

    pub fn apply_to(self, game: &mut Game) {
        if let Some(title) = self.title {
            game.title = title.trim().to_string();
        }
        if let Some(platform) = self.platform {
            game.platform = platform.trim().to_string();
        }
        if let Some(year) = self.year {
            game.year = year;
        }
        if let Some(is_favorite) = self.is_favorite {
            game.is_favorite = is_favorite;
        }
    }
}

/// Query parameters for GET /api/games
#[derive(Debug, Deserialize, Default)]
pub struct GameListQuery {
    pub title: Option<String>,
    pub platform: Option<String>,
    #[serde(rename = "isFavorite")]
    pub is_favorite: Option<String>,
    #[serde(flatten)]
    pub list: ListParams,
}

impl GameListQuery {
    pub fn matches(&self, game: &Game) -> bool {
        if let Some(title) = &self.title {
            if !contains_ci(&game.title, title) {
                return false;
            }
        }
        if let Some(platform) = &self.platform {
            if !game.platform.eq_ignore_ascii_case(platform) {
                return false;
            }
        }
        if let Some(favorite) = parse_flag(self.is_favorite.as_deref()) {
            if game.is_favorite != favorite {
                return false;
            }
        }
        true
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStats {
    pub total: usize,
    pub favorites: usize,
    pub average_year: Option<f64>,
    pub oldest: Option<Game>,
    pub newest: Option<Game>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> Game {
        Game {
            id: 3,
            title: "Doom".into(),
            platform: "PC".into(),
            year: 1993,
            is_favorite: true,
        }
    }

    #[test]
    fn test_draft_requires_title_and_platform() {
        let draft = GameDraft {
            title: Some("Tetris".into()),
            ..Default::default()
        };
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_draft_defaults() {
        let draft = GameDraft {
            title: Some("Tetris".into()),
            platform: Some("Game Boy".into()),
            ..Default::default()
        };
        draft.validate().unwrap();
        let game = draft.into_record(9);
        assert_eq!(game.id, 9);
        assert!(!game.is_favorite);
        assert_eq!(game.year, current_year());
    }

    #[test]
    fn test_patch_only_touches_supplied_fields() {
        let mut target = game();
        GamePatch {
            year: Some(1994),
            ..Default::default()
        }
        .apply_to(&mut target);
        assert_eq!(target, Game { year: 1994, ..game() });
    }

    #[test]
    fn test_duplicate_renames_and_keeps_fields() {
        let copy = game().duplicate(10);
        assert_eq!(copy.id, 10);
        assert_eq!(copy.title, "Copy of Doom");
        assert_eq!(copy.platform, "PC");
        assert!(copy.is_favorite);
    }

    #[test]
    fn test_list_query_filters() {
        let query = GameListQuery {
            platform: Some("pc".into()),
            is_favorite: Some("true".into()),
            ..Default::default()
        };
        assert!(query.matches(&game()));
        let query = GameListQuery {
            title: Some("quake".into()),
            ..Default::default()
        };
        assert!(!query.matches(&game()));
    }
}
