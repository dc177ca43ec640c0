// Author records and their request bodies

use serde::{Deserialize, Serialize};

use super::{contains_ci, deserialize_nullable, reject_blank, require_text, ListParams};
use crate::collection::{Record, SortKey};
use crate::error::CatalogResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub nationality: String,
    pub birth_year: Option<i32>,
}

impl Record for Author {
    fn id(&self) -> u32 {
        self.id
    }

    fn sort_key(&self, field: &str) -> Option<SortKey> {
        match field {
            "id" => Some(SortKey::Int(self.id as i64)),
            "firstName" => Some(SortKey::Text(self.first_name.clone())),
            "lastName" => Some(SortKey::Text(self.last_name.clone())),
            "nationality" => Some(SortKey::Text(self.nationality.clone())),
            "birthYear" => Some(SortKey::from(self.birth_year)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDraft {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub nationality: Option<String>,
    pub birth_year: Option<i32>,
}

impl AuthorDraft {
    pub fn validate(&self) -> CatalogResult<()> {
        require_text(self.first_name.as_deref(), "firstName")?;
        require_text(self.last_name.as_deref(), "lastName")?;
        Ok(())
    }

    pub fn into_record(self, id: u32) -> Author {
        Author {
            id,
            first_name: self.first_name.unwrap_or_default().trim().to_string(),
            last_name: self.last_name.unwrap_or_default().trim().to_string(),
            nationality: self
                .nationality
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| "Unknown".to_string()),
            birth_year: self.birth_year,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub nationality: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub birth_year: Option<Option<i32>>,
}

impl AuthorPatch {
    pub fn validate(&self) -> CatalogResult<()> {
        reject_blank(self.first_name.as_deref(), "firstName")?;
        reject_blank(self.last_name.as_deref(), "lastName")?;
        reject_blank(self.nationality.as_deref(), "nationality")?;
        Ok(())
    }

    pub fn apply_to(self, author: &mut Author) {
        if let Some(first_name) = self.first_name {
            author.first_name = first_name.trim().to_string();
        }
        if let Some(last_name) = self.last_name {
            author.last_name = last_name.trim().to_string();
        }
        if let Some(nationality) = self.nationality {
            author.nationality = nationality.trim().to_string();
        }
        if let Some(birth_year) = self.birth_year {
            author.birth_year = birth_year;
        }
    }
}

/// Query parameters for GET /api/authors
#[derive(Debug, Deserialize, Default)]
pub struct AuthorListQuery {
    /// Matches either first or last name
    pub name: Option<String>,
    pub nationality: Option<String>,
    #[serde(flatten)]
    pub list: ListParams,
}

impl AuthorListQuery {
    pub fn matches(&self, author: &Author) -> bool {
        if let Some(name) = &self.name {
            if !contains_ci(&author.first_name, name) && !contains_ci(&author.last_name, name) {
                return false;
            }
        }
        if let Some(nationality) = &self.nationality {
            if !author.nationality.eq_ignore_ascii_case(nationality) {
                return false;
            }
        }
        true
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorStats {
    pub total: usize,
    pub nationalities: usize,
    pub oldest: Option<Author>,
}
