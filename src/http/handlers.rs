//! Axum handlers for the book routes
//!
//! Each handler takes the library lock for the whole operation and returns the
//! affected record as JSON.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tracing::info;

use super::body::BookBody;
use crate::errors::AppError;
use crate::library::{parse_book_id, Book};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct ApiDescription {
    pub message: &'static str,
    pub endpoints: Endpoints,
}

#[derive(Debug, Serialize)]
pub struct Endpoints {
    #[serde(rename = "POST /books")]
    pub create: &'static str,
    #[serde(rename = "GET /books")]
    pub list: &'static str,
    #[serde(rename = "GET /books/:id")]
    pub get: &'static str,
    #[serde(rename = "PUT /books/:id")]
    pub update: &'static str,
    #[serde(rename = "DELETE /books/:id")]
    pub delete: &'static str,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub message: &'static str,
    pub book: Book,
}

pub async fn describe_api() -> Json<ApiDescription> {
    Json(ApiDescription {
        message: "Library REST API",
        endpoints: Endpoints {
            create: "Add a new book",
            list: "Get all books",
            get: "Get book by ID",
            update: "Update book",
            delete: "Delete book",
        },
    })
}

pub async fn create_book(
    State(state): State<AppState>,
    BookBody(fields): BookBody,
) -> Result<(StatusCode, Json<Book>), AppError> {
    let book = state.library.lock().await.create(fields);
    info!(book_id = book.id, "book created");
    Ok((StatusCode::CREATED, Json(book)))
}

pub async fn list_books(State(state): State<AppState>) -> Json<Vec<Book>> {
    let library = state.library.lock().await;
    Json(library.list().to_vec())
}

pub async fn get_book(
    State(state): State<AppState>,
    segment: Result<Path<String>, PathRejection>,
) -> Result<Json<Book>, AppError> {
    let id = book_id(segment)?;
    let library = state.library.lock().await;
    Ok(Json(library.get(id)?.clone()))
}

pub async fn update_book(
    State(state): State<AppState>,
    segment: Result<Path<String>, PathRejection>,
    BookBody(patch): BookBody,
) -> Result<Json<Book>, AppError> {
    let id = book_id(segment)?;
    let book = state.library.lock().await.update(id, patch)?;
    info!(book_id = book.id, "book updated");
    Ok(Json(book))
}

pub async fn delete_book(
    State(state): State<AppState>,
    segment: Result<Path<String>, PathRejection>,
) -> Result<Json<DeletedResponse>, AppError> {
    let id = book_id(segment)?;
    let book = state.library.lock().await.delete(id)?;
    info!(book_id = book.id, "book deleted");
    Ok(Json(DeletedResponse {
        message: "Book deleted",
        book,
    }))
}

// Segments that are not numbers can never match a stored id.
fn book_id(segment: Result<Path<String>, PathRejection>) -> Result<u64, AppError> {
    let Path(segment) = segment?;
    parse_book_id(&segment).ok_or(AppError::NotFound)
}
