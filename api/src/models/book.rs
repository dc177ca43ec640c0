// Book records and their request bodies

use serde::{Deserialize, Serialize};

use super::{contains_ci, current_year, reject_blank, require_text, ListParams};
use crate::collection::{Record, SortKey};
use crate::error::{CatalogError, CatalogResult};

pub const MAX_RATING: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub genre: String,
    pub price: f64,
    pub in_stock: bool,
    pub rating: f64,
}

impl Record for Book {
    fn id(&self) -> u32 {
        self.id
    }

    fn sort_key(&self, field: &str) -> Option<SortKey> {
        match field {
            "id" => Some(SortKey::Int(self.id as i64)),
            "title" => Some(SortKey::Text(self.title.clone())),
            "author" => Some(SortKey::Text(self.author.clone())),
            "year" => Some(SortKey::Int(self.year as i64)),
            "genre" => Some(SortKey::Text(self.genre.clone())),
            "price" => Some(SortKey::Float(self.price)),
            "inStock" => Some(SortKey::Bool(self.in_stock)),
            "rating" => Some(SortKey::Float(self.rating)),
            _ => None,
        }
    }
}

impl Book {
    pub fn duplicate(&self, id: u32) -> Book {
        Book {
            id,
            title: format!("Copy of {}", self.title),
            ..self.clone()
        }
    }
}

/// Rating must lie in `0..=5`
pub fn validate_rating(rating: f64) -> CatalogResult<()> {
    if (0.0..=MAX_RATING).contains(&rating) {
        Ok(())
    } else {
        Err(CatalogError::InvalidRequest(format!(
            "Rating must be between 0 and {}, got {}",
            MAX_RATING, rating
        )))
    }
}

fn validate_price(price: f64) -> CatalogResult<()> {
    if price.is_finite() && price >= 0.0 {
        Ok(())
    } else {
        Err(CatalogError::InvalidRequest(format!(
            "Price must be a non-negative number, got {}",
            price
        )))
    }
}

/// Body for POST and PUT. `title`, `author` and `price` are required.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDraft {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<i32>,
    pub genre: Option<String>,
    pub price: Option<f64>,
    pub in_stock: Option<bool>,
    pub rating: Option<f64>,
}

impl BookDraft {
    pub fn validate(&self) -> CatalogResult<()> {
        require_text(self.title.as_deref(), "title")?;
        require_text(self.author.as_deref(), "author")?;
        let price = self
            .price
            .ok_or_else(|| CatalogError::InvalidRequest("Field 'price' is required".to_string()))?;
        validate_price(price)?;
        if let Some(rating) = self.rating {
            validate_rating(rating)?;
        }
        Ok(())
    }

    /// Builds the record; call [`BookDraft::validate`] first
    pub fn into_record(self, id: u32) -> Book {
        Book {
            id,
            title: self.title.unwrap_or_default().trim().to_string(),
            author: self.author.unwrap_or_default().trim().to_string(),
            year: self.year.unwrap_or_else(current_year),
            genre: self
                .genre
                .map(|g| g.trim().to_string())
                .filter(|g| !g.is_empty())
                .unwrap_or_else(|| "Unknown".to_string()),
            price: self.price.unwrap_or_default(),
            in_stock: self.in_stock.unwrap_or(true),
            rating: self.rating.unwrap_or(0.0),
        }
    }
}

/// Body for PATCH; only supplied fields change
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<i32>,
    pub genre: Option<String>,
    pub price: Option<f64>,
    pub in_stock: Option<bool>,
    pub rating: Option<f64>,
}

impl BookPatch {
    pub fn validate(&self) -> CatalogResult<()> {
        reject_blank(self.title.as_deref(), "title")?;
        reject_blank(self.author.as_deref(), "author")?;
        reject_blank(self.genre.as_deref(), "genre")?;
        if let Some(price) = self.price {
            validate_price(price)?;
        }
        if let Some(rating) = self.rating {
            validate_rating(rating)?;
        }
        Ok(())
    }

    pub fn apply_to(self, book: &mut Book) {
        if let Some(title) = self.title {
            book.title = title.trim().to_string();
        }
        if let Some(author) = self.author {
            book.author = author.trim().to_string();
        }
        if let Some(year) = self.year {
            book.year = year;
        }
        if let Some(genre) = self.genre {
            book.genre = genre.trim().to_string();
        }
        if let Some(price) = self.price {
            book.price = price;
        }
        if let Some(in_stock) = self.in_stock {
            book.in_stock = in_stock;
        }
        if let Some(rating) = self.rating {
            book.rating = rating;
        }
    }
}

/// Query parameters for GET /api/books
#[derive(Debug, Deserialize, Default)]
pub struct BookListQuery {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    #[serde(rename = "inStock")]
    pub in_stock: Option<String>,
    #[serde(flatten)]
    pub list: ListParams,
}

impl BookListQuery {
    pub fn matches(&self, book: &Book) -> bool {
        let text_filters = [
            (&self.title, &book.title),
            (&self.author, &book.author),
            (&self.genre, &book.genre),
        ];
        for (filter, value) in text_filters {
            if let Some(needle) = filter {
                if !contains_ci(value, needle) {
                    return false;
                }
            }
        }
        // Only the literal "true" narrows the list
        if self.in_stock.as_deref() == Some("true") && !book.in_stock {
            return false;
        }
        true
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookStats {
    pub total: usize,
    pub in_stock: usize,
    pub average_price: Option<f64>,
    pub average_rating: Option<f64>,
    pub cheapest: Option<Book>,
    pub most_expensive: Option<Book>,
    pub top_rated: Option<Book>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> BookDraft {
        BookDraft {
            title: Some("Dune".into()),
            author: Some("Frank Herbert".into()),
            price: Some(9.99),
            ..Default::default()
        }
    }

    #[test]
    fn test_draft_requires_author_and_price() {
        let only_title = BookDraft {
            title: Some("X".into()),
            ..Default::default()
        };
        assert!(only_title.validate().is_err());
        let no_price = BookDraft {
            price: None,
            ..draft()
        };
        assert!(no_price.validate().is_err());
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn test_draft_defaults() {
        let book = draft().into_record(1);
        assert_eq!(book.genre, "Unknown");
        assert!(book.in_stock);
        assert_eq!(book.rating, 0.0);
    }

    #[test]
    fn test_rating_bounds() {
        assert!(validate_rating(0.0).is_ok());
        assert!(validate_rating(5.0).is_ok());
        assert!(validate_rating(5.1).is_err());
        assert!(validate_rating(-1.0).is_err());
        let bad = BookDraft {
            rating: Some(7.0),
            ..draft()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_patch_rejects_negative_price() {
        let patch = BookPatch {
            price: Some(-2.0),
            ..Default::default()
        };
        assert!(patch.validate().is_err());
    }

    #[test]
    fn test_patch_genre_is_trimmed_and_not_blank() {
        let blank = BookPatch {
            genre: Some("  ".into()),
            ..Default::default()
        };
        assert!(blank.validate().is_err());

        let patch = BookPatch {
            genre: Some(" Fantasy ".into()),
            ..Default::default()
        };
        patch.validate().unwrap();
        let mut book = draft().into_record(1);
        patch.apply_to(&mut book);
        assert_eq!(book.genre, "Fantasy");
    }

    #[test]
    fn test_in_stock_filter_needs_literal_true() {
        let mut book = draft().into_record(1);
        book.in_stock = false;
        let query = BookListQuery {
            in_stock: Some("yes".into()),
            ..Default::default()
        };
        assert!(query.matches(&book));
        let query = BookListQuery {
            in_stock: Some("true".into()),
            ..Default::default()
        };
        assert!(!query.matches(&book));
    }
}
