//! List books query
//!
//! Returns the whole collection ordered by id. There is no pagination or
//! filtering; an empty table yields an empty list, never an error.

use serde::{Deserialize, Serialize};

use crate::features::books::repository::{BookRepository, RepositoryError};
use crate::features::books::types::Book;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListBooksQuery;

#[derive(Debug, thiserror::Error)]
pub enum ListBooksError {
    #[error("Failed to list books: {0}")]
    Repository(#[from] RepositoryError),
}

#[tracing::instrument(skip(books, _query))]
pub async fn handle(
    books: &dyn BookRepository,
    _query: ListBooksQuery,
) -> Result<Vec<Book>, ListBooksError> {
    let items = books.list_all().await?;

    tracing::debug!(count = items.len(), "Books listed");

    Ok(items)
}
