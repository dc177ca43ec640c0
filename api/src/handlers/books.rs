// Handlers for book endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::collection::Listing;
use crate::error::CatalogResult;
use crate::handlers::{lenient_id, strict_id, AppJson, AppState};
use crate::models::{
    BatchCreated, Book, BookDraft, BookListQuery, BookPatch, BookStats, BulkDeleted,
    DeletedResponse, IdsRequest, PercentRequest, RatingRequest, UpdatedCount,
};
use crate::services::book_service;

fn book_id(raw: &str) -> CatalogResult<u32> {
    lenient_id(raw).ok_or_else(|| book_service::not_found(raw))
}

/// Handler for GET /api/books - Lists books with optional filters, sorting and paging
pub async fn list_books(
    State(state): State<AppState>,
    Query(params): Query<BookListQuery>,
) -> CatalogResult<Json<Listing<Book>>> {
    let books = book_service::list_books(&state, &params).await?;
    Ok(Json(books))
}

/// Handler for GET /api/books/stats
pub async fn get_stats(State(state): State<AppState>) -> Json<BookStats> {
    Json(book_service::get_stats(&state).await)
}

/// Handler for GET /api/books/genres
pub async fn get_genres(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(book_service::get_genres(&state).await)
}

/// Handler for GET /api/books/{id} - Rejects non-numeric ids with 400
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> CatalogResult<Json<Book>> {
    let book = book_service::get_book(&state, strict_id(&id)?).await?;
    Ok(Json(book))
}

/// Handler for POST /api/books
pub async fn create_book(
    State(state): State<AppState>,
    AppJson(draft): AppJson<BookDraft>,
) -> CatalogResult<(StatusCode, Json<Book>)> {
    let book = book_service::create_book(&state, draft).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// Handler for POST /api/books/batch
pub async fn create_books(
    State(state): State<AppState>,
    AppJson(drafts): AppJson<Vec<BookDraft>>,
) -> (StatusCode, Json<BatchCreated<Book>>) {
    let created = book_service::create_books(&state, drafts).await;
    (StatusCode::CREATED, Json(created))
}

/// Handler for POST /api/books/{id}/duplicate
pub async fn duplicate_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> CatalogResult<(StatusCode, Json<Book>)> {
    let book = book_service::duplicate_book(&state, book_id(&id)?).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// Handler for PUT /api/books/{id}
pub async fn replace_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(draft): AppJson<BookDraft>,
) -> CatalogResult<Json<Book>> {
    let book = book_service::replace_book(&state, book_id(&id)?, draft).await?;
    Ok(Json(book))
}

/// Handler for PATCH /api/books/{id}
pub async fn patch_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(patch): AppJson<BookPatch>,
) -> CatalogResult<Json<Book>> {
    let book = book_service::patch_book(&state, book_id(&id)?, patch).await?;
    Ok(Json(book))
}

/// Handler for PATCH /api/books/{id}/discount
pub async fn apply_discount(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(body): AppJson<PercentRequest>,
) -> CatalogResult<Json<Book>> {
    let book = book_service::apply_discount(&state, book_id(&id)?, body.percent).await?;
    Ok(Json(book))
}

/// Handler for PATCH /api/books/{id}/rating
pub async fn set_rating(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(body): AppJson<RatingRequest>,
) -> CatalogResult<Json<Book>> {
    let book = book_service::set_rating(&state, book_id(&id)?, body.rating).await?;
    Ok(Json(book))
}

/// Handler for PATCH /api/books/{id}/stock
pub async fn toggle_stock(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> CatalogResult<Json<Book>> {
    let book = book_service::toggle_stock(&state, book_id(&id)?).await?;
    Ok(Json(book))
}

/// Handler for PATCH /api/books/prices - Scales every price by a percentage
pub async fn adjust_prices(
    State(state): State<AppState>,
    AppJson(body): AppJson<PercentRequest>,
) -> CatalogResult<Json<UpdatedCount>> {
    let updated = book_service::adjust_prices(&state, body.percent).await?;
    Ok(Json(updated))
}

/// Handler for DELETE /api/books/{id} - Rejects non-numeric ids with 400
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> CatalogResult<Json<DeletedResponse<Book>>> {
    let deleted = book_service::delete_book(&state, strict_id(&id)?).await?;
    Ok(Json(deleted))
}

/// Handler for DELETE /api/books/out-of-stock
pub async fn delete_out_of_stock(State(state): State<AppState>) -> Json<BulkDeleted> {
    Json(book_service::delete_out_of_stock(&state).await)
}

/// Handler for POST /api/books/bulk-delete
pub async fn delete_books(
    State(state): State<AppState>,
    AppJson(body): AppJson<IdsRequest>,
) -> CatalogResult<Json<BulkDeleted>> {
    let deleted = book_service::delete_books(&state, &body.ids).await?;
    Ok(Json(deleted))
}
