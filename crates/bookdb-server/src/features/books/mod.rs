//! Book catalog feature
//!
//! - `commands/` - create, update, delete
//! - `queries/` - get, list
//! - `repository/` - storage access behind the [`BookRepository`] trait
//! - `routes.rs` - HTTP handlers

pub mod commands;
pub mod queries;
pub mod repository;
pub mod routes;
pub mod types;

pub use repository::{
    BookRepository, InMemoryBookRepository, PgBookRepository, RepositoryError, SharedBookRepository,
};
pub use routes::books_routes;
pub use types::{Book, BookPayload};
