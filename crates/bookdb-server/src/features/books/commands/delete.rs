use serde::{Deserialize, Serialize};

use crate::db::StorageError;
use crate::features::books::repository::{BookRepository, RepositoryError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteBookCommand {
    pub id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteBookResponse {
    pub id: i64,
    pub deleted: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum DeleteBookError {
    #[error("Book with id {0} not found")]
    NotFound(i64),

    #[error("Failed to delete book: {0}")]
    Storage(#[from] StorageError),
}

impl From<RepositoryError> for DeleteBookError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(id) => Self::NotFound(id),
            RepositoryError::Storage(e) => Self::Storage(e),
        }
    }
}

#[tracing::instrument(skip(books))]
pub async fn handle(
    books: &dyn BookRepository,
    command: DeleteBookCommand,
) -> Result<DeleteBookResponse, DeleteBookError> {
    books.delete(command.id).await?;

    tracing::info!(book_id = command.id, "Book deleted");

    Ok(DeleteBookResponse {
        id: command.id,
        deleted: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::books::repository::InMemoryBookRepository;

    #[tokio::test]
    async fn test_handle_deletes_book_once() {
        let repo = InMemoryBookRepository::new();
        let id = repo.create("Dune", "Herbert", "").await.unwrap();

        let response = handle(&repo, DeleteBookCommand { id }).await.unwrap();
        assert_eq!(response, DeleteBookResponse { id, deleted: true });

        let second = handle(&repo, DeleteBookCommand { id }).await;
        assert!(matches!(second, Err(DeleteBookError::NotFound(n)) if n == id));
    }

    #[tokio::test]
    async fn test_handle_storage_failure() {
        let repo = InMemoryBookRepository::unavailable();
        let result = handle(&repo, DeleteBookCommand { id: 1 }).await;
        assert!(matches!(result, Err(DeleteBookError::Storage(_))));
    }
}
