use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

use super::{BookRepository, RepositoryError, RepositoryResult};
use crate::db::StorageError;
use crate::features::books::types::Book;

/// In-process repository used as a test double and for local demos
///
/// Ids are assigned from 1 upwards and never reused, like a `BIGSERIAL`.
#[derive(Debug, Default)]
pub struct InMemoryBookRepository {
    state: RwLock<State>,
    unavailable: AtomicBool,
}

#[derive(Debug, Default)]
struct State {
    next_id: i64,
    books: BTreeMap<i64, Book>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose every operation fails with a storage error
    pub fn unavailable() -> Self {
        let repo = Self::default();
        repo.set_unavailable(true);
        repo
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> RepositoryResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(RepositoryError::Storage(StorageError::Sqlx(
                sqlx::Error::PoolTimedOut,
            )));
        }
        Ok(())
    }
}

// Mirrors PostgreSQL, which refuses U+0000 in `TEXT` columns (SQLSTATE 22021).
fn check_storable(fields: &[&str]) -> RepositoryResult<()> {
    if fields.iter().any(|field| field.contains('\0')) {
        return Err(RepositoryError::Storage(StorageError::Sqlx(sqlx::Error::Protocol(
            "invalid byte sequence for encoding \"UTF8\": 0x00".to_string(),
        ))));
    }
    Ok(())
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn create(&self, title: &str, author: &str, description: &str) -> RepositoryResult<i64> {
        self.check_available()?;
        check_storable(&[title, author, description])?;

        let mut state = self.state.write().await;
        state.next_id += 1;
        let id = state.next_id;
        state.books.insert(
            id,
            Book {
                id,
                title: title.to_string(),
                author: author.to_string(),
                description: description.to_string(),
            },
        );
        Ok(id)
    }

    async fn get_by_id(&self, id: i64) -> RepositoryResult<Book> {
        self.check_available()?;

        self.state
            .read()
            .await
            .books
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound(id))
    }

    async fn list_all(&self) -> RepositoryResult<Vec<Book>> {
        self.check_available()?;

        Ok(self.state.read().await.books.values().cloned().collect())
    }

    async fn update(
        &self,
        id: i64,
        title: &str,
        author: &str,
        description: &str,
    ) -> RepositoryResult<()> {
        self.check_available()?;
        check_storable(&[title, author, description])?;

        let mut state = self.state.write().await;
        let book = state
            .books
            .get_mut(&id)
            .ok_or(RepositoryError::NotFound(id))?;
        book.title = title.to_string();
        book.author = author.to_string();
        book.description = description.to_string();
        Ok(())
    }

    async fn delete(&self, id: i64) -> RepositoryResult<()> {
        self.check_available()?;

        self.state
            .write()
            .await
            .books
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound(id))
    }

    async fn health_check(&self) -> RepositoryResult<()> {
        self.check_available()
    }
}
