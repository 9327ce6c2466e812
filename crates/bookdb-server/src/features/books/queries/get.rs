use serde::{Deserialize, Serialize};

use crate::db::StorageError;
use crate::features::books::repository::{BookRepository, RepositoryError};
use crate::features::books::types::Book;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetBookQuery {
    pub id: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum GetBookError {
    #[error("Book with id {0} not found")]
    NotFound(i64),

    #[error("Failed to get book: {0}")]
    Storage(#[from] StorageError),
}

impl From<RepositoryError> for GetBookError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(id) => Self::NotFound(id),
            RepositoryError::Storage(e) => Self::Storage(e),
        }
    }
}

#[tracing::instrument(skip(books))]
pub async fn handle(books: &dyn BookRepository, query: GetBookQuery) -> Result<Book, GetBookError> {
    Ok(books.get_by_id(query.id).await?)
}
