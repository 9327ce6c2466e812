//! Book API routes
//!
//! # Route Structure
//!
//! - `POST /books` - Create a book
//! - `GET /books` - List every book
//! - `GET /books/:id` - Get a single book
//! - `PUT /books/:id` - Replace a book's fields
//! - `DELETE /books/:id` - Delete a book
//!
//! Write endpoints accept JSON, form or multipart bodies and query-string
//! fields. Success bodies are the resource itself (or a small confirmation
//! object); failures use [`ErrorResponse`](crate::api::response::ErrorResponse) via [`AppError`].

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use super::{
    commands::{
        CreateBookCommand, CreateBookError, DeleteBookCommand, DeleteBookError, UpdateBookCommand,
        UpdateBookError,
    },
    queries::{GetBookError, GetBookQuery, ListBooksError, ListBooksQuery},
    repository::{RepositoryError, SharedBookRepository},
    types::BookPayload,
};
use crate::error::AppError;
use crate::features::shared::{parse_id, FormValues};

// ============================================================================
// Router Configuration
// ============================================================================

/// Creates the books router
///
/// Paths are absolute, so the router is merged rather than nested:
///
/// ```rust,ignore
/// let app = Router::new().merge(books_routes().with_state(repository));
/// ```
pub fn books_routes() -> Router<SharedBookRepository> {
    Router::new()
        .route("/books", get(list_books).post(create_book))
        .route("/books/:id", get(get_book).put(update_book).delete(delete_book))
}

// ============================================================================
// Command Handlers (Write Operations)
// ============================================================================

/// Create a new book
///
/// # Response
///
/// - `201 Created` - `{"id": <n>}`
/// - `400 Bad Request` - Missing title/author or malformed body
/// - `500 Internal Server Error` - Storage failure
#[tracing::instrument(skip(books, payload))]
async fn create_book(
    State(books): State<SharedBookRepository>,
    FormValues(payload): FormValues<BookPayload>,
) -> Result<Response, AppError> {
    let command = CreateBookCommand::from(payload);
    let response = super::commands::create::handle(books.as_ref(), command).await?;

    Ok((StatusCode::CREATED, Json(response)).into_response())
}

/// Replace every mutable field of a book
///
/// # Response
///
/// - `200 OK` - `{"id": <n>, "updated": true}`
/// - `400 Bad Request` - Non-integer id, missing title/author or malformed body
/// - `404 Not Found` - No book with that id
/// - `500 Internal Server Error` - Storage failure
#[tracing::instrument(skip(books, payload), fields(id = %id))]
async fn update_book(
    State(books): State<SharedBookRepository>,
    Path(id): Path<String>,
    FormValues(payload): FormValues<BookPayload>,
) -> Result<Response, AppError> {
    let id = parse_id(&id)?;
    let command = UpdateBookCommand::new(id, payload);
    let response = super::commands::update::handle(books.as_ref(), command).await?;

    Ok((StatusCode::OK, Json(response)).into_response())
}

/// Delete a book
///
/// # Response
///
/// - `200 OK` - `{"id": <n>, "deleted": true}`
/// - `400 Bad Request` - Non-integer id
/// - `404 Not Found` - No book with that id
/// - `500 Internal Server Error` - Storage failure
#[tracing::instrument(skip(books), fields(id = %id))]
async fn delete_book(
    State(books): State<SharedBookRepository>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_id(&id)?;
    let response = super::commands::delete::handle(books.as_ref(), DeleteBookCommand { id }).await?;

    Ok((StatusCode::OK, Json(response)).into_response())
}

// ============================================================================
// Query Handlers (Read Operations)
// ============================================================================

#[tracing::instrument(skip(books), fields(id = %id))]
async fn get_book(
    State(books): State<SharedBookRepository>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_id(&id)?;
    let book = super::queries::get::handle(books.as_ref(), GetBookQuery { id }).await?;

    Ok((StatusCode::OK, Json(book)).into_response())
}

/// List every book ordered by id; an empty table is `[]`
#[tracing::instrument(skip(books))]
async fn list_books(State(books): State<SharedBookRepository>) -> Result<Response, AppError> {
    let items = super::queries::list::handle(books.as_ref(), ListBooksQuery).await?;

    Ok((StatusCode::OK, Json(items)).into_response())
}

// ============================================================================
// Error Handling
// ============================================================================

fn not_found(id: i64) -> AppError {
    AppError::NotFound(RepositoryError::NotFound(id).to_string())
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(id) => not_found(id),
            RepositoryError::Storage(e) => AppError::Storage(e),
        }
    }
}

impl From<CreateBookError> for AppError {
    fn from(err: CreateBookError) -> Self {
        match err {
            CreateBookError::Validation(e) => AppError::Validation(e),
            CreateBookError::Repository(e) => e.into(),
        }
    }
}

impl From<UpdateBookError> for AppError {
    fn from(err: UpdateBookError) -> Self {
        match err {
            UpdateBookError::Validation(e) => AppError::Validation(e),
            UpdateBookError::NotFound(id) => not_found(id),
            UpdateBookError::Storage(e) => AppError::Storage(e),
        }
    }
}

impl From<DeleteBookError> for AppError {
    fn from(err: DeleteBookError) -> Self {
        match err {
            DeleteBookError::NotFound(id) => not_found(id),
            DeleteBookError::Storage(e) => AppError::Storage(e),
        }
    }
}

impl From<GetBookError> for AppError {
    fn from(err: GetBookError) -> Self {
        match err {
            GetBookError::NotFound(id) => not_found(id),
            GetBookError::Storage(e) => AppError::Storage(e),
        }
    }
}

impl From<ListBooksError> for AppError {
    fn from(err: ListBooksError) -> Self {
        match err {
            ListBooksError::Repository(e) => e.into(),
        }
    }
}
