use async_trait::async_trait;

use super::{BookRepository, RepositoryError, RepositoryResult};
use crate::db::{Gateway, StorageError};
use crate::features::books::types::Book;

const INSERT_BOOK: &str = r#"
    INSERT INTO books (title, author, description)
    VALUES ($1, $2, $3)
    RETURNING id
"#;

const SELECT_BOOK: &str = r#"
    SELECT id, title, author, description
    FROM books
    WHERE id = $1
"#;

const SELECT_BOOKS: &str = r#"
    SELECT id, title, author, description
    FROM books
    ORDER BY id
"#;

const UPDATE_BOOK: &str = r#"
    UPDATE books
    SET title = $1, author = $2, description = $3
    WHERE id = $4
"#;

const DELETE_BOOK: &str = "DELETE FROM books WHERE id = $1";

/// PostgreSQL-backed repository
#[derive(Debug, Clone)]
pub struct PgBookRepository {
    gateway: Gateway,
}

impl PgBookRepository {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl BookRepository for PgBookRepository {
    #[tracing::instrument(skip(self, title, author, description), fields(title = %title))]
    async fn create(&self, title: &str, author: &str, description: &str) -> RepositoryResult<i64> {
        let (id,) = self
            .gateway
            .query_one(
                sqlx::query_as::<_, (i64,)>(INSERT_BOOK)
                    .bind(title)
                    .bind(author)
                    .bind(description),
            )
            .await?;

        tracing::debug!(book_id = id, "Book inserted");
        Ok(id)
    }

    #[tracing::instrument(skip(self))]
    async fn get_by_id(&self, id: i64) -> RepositoryResult<Book> {
        self.gateway
            .query_one(sqlx::query_as::<_, Book>(SELECT_BOOK).bind(id))
            .await
            .map_err(|e| match e {
                StorageError::NoRows => RepositoryError::NotFound(id),
                other => RepositoryError::Storage(other),
            })
    }

    #[tracing::instrument(skip(self))]
    async fn list_all(&self) -> RepositoryResult<Vec<Book>> {
        Ok(self
            .gateway
            .query_many(sqlx::query_as::<_, Book>(SELECT_BOOKS))
            .await?)
    }

    #[tracing::instrument(skip(self, title, author, description), fields(title = %title))]
    async fn update(
        &self,
        id: i64,
        title: &str,
        author: &str,
        description: &str,
    ) -> RepositoryResult<()> {
        let affected = self
            .gateway
            .execute(
                sqlx::query(UPDATE_BOOK)
                    .bind(title)
                    .bind(author)
                    .bind(description)
                    .bind(id),
            )
            .await?;

        if affected == 0 {
            return Err(RepositoryError::NotFound(id));
        }
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepositoryResult<()> {
        let affected = self
            .gateway
            .execute(sqlx::query(DELETE_BOOK).bind(id))
            .await?;

        if affected == 0 {
            return Err(RepositoryError::NotFound(id));
        }
        Ok(())
    }

    async fn health_check(&self) -> RepositoryResult<()> {
        Ok(self.gateway.health_check().await?)
    }
}
