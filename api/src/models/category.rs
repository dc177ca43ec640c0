// Category request bodies (rows are served as `entity::categories::Model`)

use serde::Deserialize;

use super::{deserialize_nullable, reject_blank, require_text};
use crate::collection::{Record, SortKey};
use crate::entity::categories;
use crate::error::CatalogResult;

impl Record for categories::Model {
    fn id(&self) -> u32 {
        self.id.unsigned_abs()
    }

    fn sort_key(&self, field: &str) -> Option<SortKey> {
        match field {
            "id" => Some(SortKey::Int(self.id as i64)),
            "name" => Some(SortKey::Text(self.name.clone())),
            _ => None,
        }
    }
}

/// Body for POST and PUT. `name` is required.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryDraft {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl CategoryDraft {
    /// Returns the validated name
    pub fn validate(&self) -> CatalogResult<String> {
        require_text(self.name.as_deref(), "name")
    }
}

/// Body for PATCH; `description` may be set to `null`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryPatch {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub description: Option<Option<String>>,
}

impl CategoryPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }

    pub fn validate(&self) -> CatalogResult<()> {
        reject_blank(self.name.as_deref(), "name")
    }

    pub fn apply_to(self, category: &mut categories::Model) {
        if let Some(name) = self.name {
            category.name = name.trim().to_string();
        }
        if let Some(description) = self.description {
            category.description = description;
        }
    }
}

/// Query parameters for GET /api/categories
#[derive(Debug, Deserialize, Default)]
pub struct CategoryListQuery {
    pub name: Option<String>,
}
