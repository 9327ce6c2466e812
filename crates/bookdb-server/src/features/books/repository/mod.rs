//! Book repository
//!
//! Translates book operations into storage gateway calls. `NotFound` is
//! derived here and only here, from two signals: a point query that returned
//! no row, or an update/delete that affected no row.

mod memory;
mod postgres;

pub use memory::InMemoryBookRepository;
pub use postgres::PgBookRepository;

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use super::types::Book;
use crate::db::StorageError;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Book with id {0} not found")]
    NotFound(i64),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Shared handle injected into the router state
pub type SharedBookRepository = Arc<dyn BookRepository>;

#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Insert a book and return the id assigned by storage
    async fn create(&self, title: &str, author: &str, description: &str) -> RepositoryResult<i64>;

    async fn get_by_id(&self, id: i64) -> RepositoryResult<Book>;

    /// Every book, ordered by id
    async fn list_all(&self) -> RepositoryResult<Vec<Book>>;

    /// Replace all mutable fields of an existing book
    async fn update(
        &self,
        id: i64,
        title: &str,
        author: &str,
        description: &str,
    ) -> RepositoryResult<()>;

    async fn delete(&self, id: i64) -> RepositoryResult<()>;

    /// Probe the backing store
    async fn health_check(&self) -> RepositoryResult<()> {
        Ok(())
    }
}
