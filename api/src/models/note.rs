// Note request/response bodies

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{contains_ci, deserialize_nullable, parse_flag, reject_blank, require_text, ListParams};
use crate::collection::{Record, SortKey};
use crate::entity::notes;
use crate::error::{CatalogError, CatalogResult};

pub const DEFAULT_COLOR: &str = "red";

/// Note as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteData {
    pub id: i32,
    pub title: String,
    pub color: String,
    pub content: String,
    pub date: NaiveDate,
    pub is_favorite: bool,
    #[serde(rename = "category_id")]
    pub category_id: Option<i32>,
}

impl From<notes::Model> for NoteData {
    fn from(model: notes::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            color: model.color,
            content: model.content,
            date: model.date,
            is_favorite: model.is_favorite,
            category_id: model.category_id,
        }
    }
}

impl Record for NoteData {
    fn id(&self) -> u32 {
        self.id.unsigned_abs()
    }

    fn sort_key(&self, field: &str) -> Option<SortKey> {
        match field {
            "id" => Some(SortKey::Int(self.id as i64)),
            "title" => Some(SortKey::Text(self.title.clone())),
            "date" => Some(SortKey::Text(self.date.to_string())),
            "color" => Some(SortKey::Text(self.color.clone())),
            "isFavorite" => Some(SortKey::Bool(self.is_favorite)),
            _ => None,
        }
    }
}

/// Body for POST and PUT. `title` and `content` are required.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteDraft {
    pub title: Option<String>,
    pub content: Option<String>,
    pub color: Option<String>,
    pub date: Option<NaiveDate>,
    pub is_favorite: Option<bool>,
    #[serde(rename = "category_id")]
    pub category_id: Option<i32>,
}

/// Fully resolved column values for an insert or a full replace
#[derive(Debug, Clone, PartialEq)]
pub struct NoteInput {
    pub title: String,
    pub content: String,
    pub color: String,
    pub date: NaiveDate,
    pub is_favorite: bool,
    pub category_id: Option<i32>,
}

impl NoteDraft {
    /// Validates required fields and fills defaults for the rest
    pub fn into_input(self, today: NaiveDate) -> CatalogResult<NoteInput> {
        let title = require_text(self.title.as_deref(), "title")?;
        let content = require_text(self.content.as_deref(), "content")?;
        Ok(NoteInput {
            title,
            content,
            color: self
                .color
                .filter(|c| !c.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_COLOR.to_string()),
            date: self.date.unwrap_or(today),
            is_favorite: self.is_favorite.unwrap_or(false),
            category_id: self.category_id,
        })
    }
}

impl NoteInput {
    pub fn into_note(self, id: i32) -> NoteData {
        NoteData {
            id,
            title: self.title,
            color: self.color,
            content: self.content,
            date: self.date,
            is_favorite: self.is_favorite,
            category_id: self.category_id,
        }
    }
}

/// Body for PATCH; only supplied columns are written
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub color: Option<String>,
    pub date: Option<NaiveDate>,
    pub is_favorite: Option<bool>,
    #[serde(rename = "category_id", default, deserialize_with = "deserialize_nullable")]
    pub category_id: Option<Option<i32>>,
}

impl NotePatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.color.is_none()
            && self.date.is_none()
            && self.is_favorite.is_none()
            && self.category_id.is_none()
    }

    pub fn validate(&self) -> CatalogResult<()> {
        if self.is_empty() {
            return Err(CatalogError::InvalidRequest(
                "No fields provided to update".to_string(),
            ));
        }
        reject_blank(self.title.as_deref(), "title")?;
        reject_blank(self.content.as_deref(), "content")?;
        reject_blank(self.color.as_deref(), "color")?;
        Ok(())
    }

    pub fn apply_to(self, note: &mut NoteData) {
        if let Some(title) = self.title {
            note.title = title.trim().to_string();
        }
        if let Some(content) = self.content {
            note.content = content;
        }
        if let Some(color) = self.color {
            note.color = color.trim().to_string();
        }
        if let Some(date) = self.date {
            note.date = date;
        }
        if let Some(is_favorite) = self.is_favorite {
            note.is_favorite = is_favorite;
        }
        if let Some(category_id) = self.category_id {
            note.category_id = category_id;
        }
    }
}

/// Query parameters for GET /api/notes
#[derive(Debug, Deserialize, Default)]
pub struct NoteListQuery {
    pub title: Option<String>,
    pub category_id: Option<String>,
    #[serde(rename = "isFavorite")]
    pub is_favorite: Option<String>,
    #[serde(flatten)]
    pub list: ListParams,
}

/// Parsed note filters pushed down into SQL
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteFilter {
    pub title: Option<String>,
    pub category_id: Option<i32>,
    pub is_favorite: Option<bool>,
}

impl NoteListQuery {
    pub fn filter(&self) -> CatalogResult<NoteFilter> {
        let category_id = match self.category_id.as_deref() {
            Some(raw) => Some(raw.trim().parse::<i32>().map_err(|_| {
                CatalogError::InvalidRequest(format!(
                    "'category_id' must be an integer, got '{}'",
                    raw
                ))
            })?),
            None => None,
        };
        Ok(NoteFilter {
            title: self.title.clone().filter(|t| !t.is_empty()),
            category_id,
            is_favorite: parse_flag(self.is_favorite.as_deref()),
        })
    }
}

impl NoteFilter {
    /// Same semantics as the SQL filter: substring title, exact category and flag
    pub fn matches(&self, note: &NoteData) -> bool {
        self.title
            .as_deref()
            .map_or(true, |title| contains_ci(&note.title, title))
            && self
                .category_id
                .map_or(true, |id| note.category_id == Some(id))
            && self
                .is_favorite
                .map_or(true, |flag| note.is_favorite == flag)
    }
}
