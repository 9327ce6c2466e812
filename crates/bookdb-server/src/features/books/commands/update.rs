//! Update book command
//!
//! Replaces every mutable field of an existing book in one statement. There
//! are no partial updates: an omitted `description` becomes empty.

use serde::{Deserialize, Serialize};

use crate::db::StorageError;
use crate::features::books::repository::{BookRepository, RepositoryError};
use crate::features::books::types::BookPayload;
use crate::features::shared::validation::{
    validate_required_text, validate_text, ValidationError,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBookCommand {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub description: String,
}

/// Confirmation returned after an update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateBookResponse {
    pub id: i64,
    pub updated: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum UpdateBookError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Book with id {0} not found")]
    NotFound(i64),

    #[error("Failed to update book: {0}")]
    Storage(#[from] StorageError),
}

impl From<RepositoryError> for UpdateBookError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(id) => Self::NotFound(id),
            RepositoryError::Storage(e) => Self::Storage(e),
        }
    }
}

impl UpdateBookCommand {
    pub fn new(id: i64, payload: BookPayload) -> Self {
        let (title, author, description) = payload.into_parts();
        Self {
            id,
            title,
            author,
            description,
        }
    }

    pub fn validate(&self) -> Result<(), UpdateBookError> {
        validate_required_text(&self.title, "title")?;
        validate_required_text(&self.author, "author")?;
        validate_text(&self.description, "description")?;
        Ok(())
    }
}

#[tracing::instrument(skip(books, command), fields(book_id = command.id))]
pub async fn handle(
    books: &dyn BookRepository,
    command: UpdateBookCommand,
) -> Result<UpdateBookResponse, UpdateBookError> {
    command.validate()?;

    books
        .update(command.id, &command.title, &command.author, &command.description)
        .await?;

    tracing::info!("Book updated");

    Ok(UpdateBookResponse {
        id: command.id,
        updated: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::books::repository::InMemoryBookRepository;

    fn command(id: i64, title: &str, author: &str, description: &str) -> UpdateBookCommand {
        UpdateBookCommand {
            id,
            title: title.to_string(),
            author: author.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_validation_requires_title_and_author() {
        assert!(command(1, "T", "A", "").validate().is_ok());
        assert!(matches!(
            command(1, "", "A", "").validate(),
            Err(UpdateBookError::Validation(_))
        ));
        assert!(matches!(
            command(1, "T", "", "").validate(),
            Err(UpdateBookError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_handle_replaces_all_fields() {
        let repo = InMemoryBookRepository::new();
        let id = repo.create("Dune", "Herbert", "desert planet").await.unwrap();

        let response = handle(&repo, command(id, "Dune Messiah", "Frank Herbert", ""))
            .await
            .unwrap();
        assert_eq!(response, UpdateBookResponse { id, updated: true });

        let book = repo.get_by_id(id).await.unwrap();
        assert_eq!(book.id, id);
        assert_eq!(book.title, "Dune Messiah");
        assert_eq!(book.author, "Frank Herbert");
        assert_eq!(book.description, "");
    }

    #[tokio::test]
    async fn test_handle_is_idempotent() {
        let repo = InMemoryBookRepository::new();
        let id = repo.create("Dune", "Herbert", "").await.unwrap();

        handle(&repo, command(id, "Emma", "Austen", "novel")).await.unwrap();
        let after_first = repo.get_by_id(id).await.unwrap();
        handle(&repo, command(id, "Emma", "Austen", "novel")).await.unwrap();
        let after_second = repo.get_by_id(id).await.unwrap();

        assert_eq!(after_first, after_second);
    }

    #[tokio::test]
    async fn test_handle_nul_leaves_book_untouched() {
        let repo = InMemoryBookRepository::new();
        let id = repo.create("Dune", "Herbert", "").await.unwrap();

        let result = handle(&repo, command(id, "Dune", "Herbert", "a\0b")).await;
        assert!(matches!(
            result,
            Err(UpdateBookError::Validation(ValidationError::InvalidCharacter {
                field: "description"
            }))
        ));
        assert_eq!(repo.get_by_id(id).await.unwrap().description, "");
    }

    #[tokio::test]
    async fn test_handle_not_found() {
        let repo = InMemoryBookRepository::new();
        let result = handle(&repo, command(999_999, "T", "A", "")).await;
        assert!(matches!(result, Err(UpdateBookError::NotFound(999_999))));
    }
}
