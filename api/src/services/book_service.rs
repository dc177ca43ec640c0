// Book service - business logic over the in-memory books collection

use std::fmt::Display;

use crate::collection::{query, stats, Listing};
use crate::error::{CatalogError, CatalogResult};
use crate::handlers::AppState;
use crate::models::book::validate_rating;
use crate::models::{
    BatchCreated, Book, BookDraft, BookListQuery, BookPatch, BookStats, BulkDeleted,
    DeletedResponse, UpdatedCount,
};

pub fn not_found(id: impl Display) -> CatalogError {
    CatalogError::NotFound(format!("Book with id {} not found", id))
}

fn require_percent(percent: Option<f64>) -> CatalogResult<f64> {
    match percent {
        Some(p) if p.is_finite() => Ok(p),
        _ => Err(CatalogError::InvalidRequest(
            "Field 'percent' is required".to_string(),
        )),
    }
}

/// Filtered, sorted and optionally paginated books
pub async fn list_books(state: &AppState, params: &BookListQuery) -> CatalogResult<Listing<Book>> {
    let options = params.list.options()?;
    let books = state.books.read(|books| books.filtered(|b| params.matches(b))).await;
    Ok(query::apply(books, &options))
}

pub async fn get_book(state: &AppState, id: u32) -> CatalogResult<Book> {
    state
        .books
        .read(|books| books.get(id).cloned())
        .await
        .ok_or_else(|| not_found(id))
}

/// Distinct genres in first-seen order
pub async fn get_genres(state: &AppState) -> Vec<String> {
    state
        .books
        .read(|books| stats::distinct(books.all(), |b| b.genre.clone()))
        .await
}

pub async fn get_stats(state: &AppState) -> BookStats {
    state
        .books
        .read(|books| {
            let all = books.all();
            BookStats {
                total: all.len(),
                in_stock: stats::count_where(all, |b| b.in_stock),
                average_price: stats::mean(all, |b| b.price),
                average_rating: stats::mean(all, |b| b.rating),
                cheapest: stats::min_by(all, |a, b| stats::cmp_f64(a.price, b.price)).cloned(),
                most_expensive: stats::max_by(all, |a, b| stats::cmp_f64(a.price, b.price))
                    .cloned(),
                top_rated: stats::max_by(all, |a, b| stats::cmp_f64(a.rating, b.rating)).cloned(),
            }
        })
        .await
}

pub async fn create_book(state: &AppState, draft: BookDraft) -> CatalogResult<Book> {
    draft.validate()?;
    let book = state
        .books
        .write(|books| books.insert_with(|id| draft.into_record(id)))
        .await;
    tracing::info!("Created book {} ({})", book.id, book.title);
    Ok(book)
}

/// Adds every valid draft; invalid ones are skipped
pub async fn create_books(state: &AppState, drafts: Vec<BookDraft>) -> BatchCreated<Book> {
    let submitted = drafts.len();
    let created: Vec<Book> = state
        .books
        .write(|books| {
            drafts
                .into_iter()
                .filter(|draft| draft.validate().is_ok())
                .map(|draft| books.insert_with(|id| draft.into_record(id)))
                .collect()
        })
        .await;
    tracing::info!("Batch created {} of {} books", created.len(), submitted);
    BatchCreated {
        count: created.len(),
        created,
    }
}

pub async fn duplicate_book(state: &AppState, id: u32) -> CatalogResult<Book> {
    state
        .books
        .write(|books| {
            let original = books.get(id).cloned().ok_or_else(|| not_found(id))?;
            Ok(books.insert_with(|new_id| original.duplicate(new_id)))
        })
        .await
}

/// Full replace; omitted optional fields take their create defaults
pub async fn replace_book(state: &AppState, id: u32, draft: BookDraft) -> CatalogResult<Book> {
    state
        .books
        .write(|books| {
            if !books.contains(id) {
                return Err(not_found(id));
            }
            draft.validate()?;
            books
                .replace(id, draft.into_record(id))
                .ok_or_else(|| not_found(id))
        })
        .await
}

pub async fn patch_book(state: &AppState, id: u32, patch: BookPatch) -> CatalogResult<Book> {
    state
        .books
        .write(|books| {
            if !books.contains(id) {
                return Err(not_found(id));
            }
            patch.validate()?;
            books
                .update(id, |book| patch.apply_to(book))
                .ok_or_else(|| not_found(id))
        })
        .await
}

/// Lowers the price by `percent` (0 < percent <= 100), rounded to cents
pub async fn apply_discount(
    state: &AppState,
    id: u32,
    percent: Option<f64>,
) -> CatalogResult<Book> {
    state
        .books
        .write(|books| {
            if !books.contains(id) {
                return Err(not_found(id));
            }
            let percent = require_percent(percent)?;
            if percent <= 0.0 || percent > 100.0 {
                return Err(CatalogError::InvalidRequest(format!(
                    "Discount must be greater than 0 and at most 100, got {}",
                    percent
                )));
            }
            books
                .update(id, |book| {
                    book.price = stats::round2(book.price * (1.0 - percent / 100.0))
                })
                .ok_or_else(|| not_found(id))
        })
        .await
}

pub async fn set_rating(state: &AppState, id: u32, rating: Option<f64>) -> CatalogResult<Book> {
    state
        .books
        .write(|books| {
            if !books.contains(id) {
                return Err(not_found(id));
            }
            let rating = rating.ok_or_else(|| {
                CatalogError::InvalidRequest("Field 'rating' is required".to_string())
            })?;
            validate_rating(rating)?;
            books
                .update(id, |book| book.rating = rating)
                .ok_or_else(|| not_found(id))
        })
        .await
}

pub async fn toggle_stock(state: &AppState, id: u32) -> CatalogResult<Book> {
    state
        .books
        .write(|books| books.update(id, |book| book.in_stock = !book.in_stock))
        .await
        .ok_or_else(|| not_found(id))
}

/// Scales every price by `percent` (negative lowers prices; must stay above -100)
fn price_overflow(id: u32) -> CatalogError {
    CatalogError::InvalidRequest(format!(
        "Adjustment would push the price of book {} out of range",
        id
    ))
}

pub async fn adjust_prices(state: &AppState, percent: Option<f64>) -> CatalogResult<UpdatedCount> {
    let percent = require_percent(percent)?;
    if percent <= -100.0 {
        return Err(CatalogError::InvalidRequest(format!(
            "Adjustment must be greater than -100, got {}",
            percent
        )));
    }
    let factor = 1.0 + percent / 100.0;
    let updated = state
        .books
        .write(|books| {
            if let Some(book) = books.all().iter().find(|b| !(b.price * factor).is_finite()) {
                return Err(price_overflow(book.id));
            }
            Ok(books.update_all(|book| {
                book.price = stats::round2(book.price * factor);
                true
            }))
        })
        .await?;
    tracing::info!("Adjusted {} book prices by {}%", updated, percent);
    Ok(UpdatedCount {
        message: format!("Adjusted {} prices by {}%", updated, percent),
        updated,
    })
}

pub async fn delete_book(state: &AppState, id: u32) -> CatalogResult<DeletedResponse<Book>> {
    let deleted = state
        .books
        .write(|books| books.remove(id))
        .await
        .ok_or_else(|| not_found(id))?;
    tracing::info!("Deleted book {}", id);
    Ok(DeletedResponse {
        message: format!("Book {} deleted", id),
        deleted,
    })
}

pub async fn delete_out_of_stock(state: &AppState) -> BulkDeleted {
    let deleted = state
        .books
        .write(|books| books.remove_where(|b| !b.in_stock))
        .await;
    tracing::info!("Deleted {} out-of-stock books", deleted);
    BulkDeleted {
        message: format!("Deleted {} out-of-stock books", deleted),
        deleted,
        not_found: None,
    }
}

/// Deletes the listed ids and reports those that did not exist beforehand
pub async fn delete_books(state: &AppState, ids: &[u32]) -> CatalogResult<BulkDeleted> {
    if ids.is_empty() {
        return Err(CatalogError::InvalidRequest(
            "Field 'ids' must contain at least one id".to_string(),
        ));
    }
    let (deleted, not_found) = state.books.write(|books| books.remove_ids(ids)).await;
    tracing::info!("Bulk deleted {} books", deleted);
    Ok(BulkDeleted {
        message: format!("Deleted {} books", deleted),
        deleted,
        not_found: Some(not_found),
    })
}
