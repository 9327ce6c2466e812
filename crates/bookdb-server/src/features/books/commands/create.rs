//! Create book command
//!
//! - Command: plain data plus validation
//! - Handler: standalone async function calling the repository
//!
//! Validation runs first; an invalid command never reaches storage.

use serde::{Deserialize, Serialize};

use crate::features::books::repository::{BookRepository, RepositoryError};
use crate::features::books::types::BookPayload;
use crate::features::shared::validation::{
    validate_required_text, validate_text, ValidationError,
};

/// Command to create a new book
///
/// # Examples
///
/// ```rust,ignore
/// use bookdb_server::features::books::commands::CreateBookCommand;
///
/// let command = CreateBookCommand {
///     title: "Dune".to_string(),
///     author: "Frank Herbert".to_string(),
///     description: String::new(),
/// };
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateBookCommand {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub description: String,
}

/// Response from creating a book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBookResponse {
    pub id: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum CreateBookError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to create book: {0}")]
    Repository(#[from] RepositoryError),
}

impl From<BookPayload> for CreateBookCommand {
    fn from(payload: BookPayload) -> Self {
        let (title, author, description) = payload.into_parts();
        Self {
            title,
            author,
            description,
        }
    }
}

impl CreateBookCommand {
    /// Validates the command parameters
    ///
    /// # Errors
    ///
    /// - `title` or `author` is empty
    /// - any field contains a NUL character
    pub fn validate(&self) -> Result<(), CreateBookError> {
        validate_required_text(&self.title, "title")?;
        validate_required_text(&self.author, "author")?;
        validate_text(&self.description, "description")?;
        Ok(())
    }
}

/// Handler function for creating books
///
/// # Returns
///
/// The id assigned by storage
///
/// # Errors
///
/// - `Validation` if a required field is empty (no storage call is made)
/// - `Repository` if the insert fails
#[tracing::instrument(skip(books, command), fields(title = %command.title))]
pub async fn handle(
    books: &dyn BookRepository,
    command: CreateBookCommand,
) -> Result<CreateBookResponse, CreateBookError> {
    command.validate()?;

    let id = books
        .create(&command.title, &command.author, &command.description)
        .await?;

    tracing::info!(book_id = id, "Book created");

    Ok(CreateBookResponse { id })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::books::repository::InMemoryBookRepository;

    fn command(title: &str, author: &str) -> CreateBookCommand {
        CreateBookCommand {
            title: title.to_string(),
            author: author.to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_validation_success() {
        assert!(command("Dune", "Herbert").validate().is_ok());
    }

    #[test]
    fn test_validation_empty_title() {
        assert!(matches!(
            command("", "Herbert").validate(),
            Err(CreateBookError::Validation(ValidationError::Required { field: "title" }))
        ));
    }

    #[test]
    fn test_validation_empty_author() {
        assert!(matches!(
            command("Dune", "").validate(),
            Err(CreateBookError::Validation(ValidationError::Required { field: "author" }))
        ));
    }

    #[test]
    fn test_validation_rejects_nul_in_any_field() {
        let mut cmd = command("a\0b", "Herbert");
        assert!(matches!(
            cmd.validate(),
            Err(CreateBookError::Validation(ValidationError::InvalidCharacter { field: "title" }))
        ));

        cmd = command("Dune", "Herbert");
        cmd.description = "nul\0".to_string();
        assert!(matches!(
            cmd.validate(),
            Err(CreateBookError::Validation(ValidationError::InvalidCharacter {
                field: "description"
            }))
        ));
    }

    #[test]
    fn test_from_payload_defaults_missing_fields() {
        let cmd = CreateBookCommand::from(BookPayload {
            title: Some("Dune".to_string()),
            ..BookPayload::default()
        });
        assert_eq!(cmd.title, "Dune");
        assert_eq!(cmd.author, "");
        assert_eq!(cmd.description, "");
    }

    #[tokio::test]
    async fn test_handle_creates_book() {
        let repo = InMemoryBookRepository::new();
        let response = handle(&repo, command("Dune", "Herbert")).await.unwrap();

        let book = repo.get_by_id(response.id).await.unwrap();
        assert_eq!(book.title, "Dune");
        assert_eq!(book.author, "Herbert");
        assert_eq!(book.description, "");
    }

    #[tokio::test]
    async fn test_handle_invalid_command_never_reaches_storage() {
        // An unavailable repository would fail any call; validation must win.
        let repo = InMemoryBookRepository::unavailable();
        let result = handle(&repo, command("", "Herbert")).await;
        assert!(matches!(result, Err(CreateBookError::Validation(_))));
    }

    #[tokio::test]
    async fn test_handle_nul_is_rejected_before_storage() {
        let repo = InMemoryBookRepository::new();
        let result = handle(&repo, command("Dune", "Her\0bert")).await;
        assert!(matches!(result, Err(CreateBookError::Validation(_))));
        assert!(repo.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_handle_storage_failure() {
        let repo = InMemoryBookRepository::unavailable();
        let result = handle(&repo, command("Dune", "Herbert")).await;
        assert!(matches!(result, Err(CreateBookError::Repository(_))));
    }
}
