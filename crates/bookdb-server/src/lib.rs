//! BookDB Server Library
//!
//! HTTP service exposing CRUD over a catalog of books stored in PostgreSQL.
//!
//! # Architecture
//!
//! Requests flow through three layers:
//!
//! - **Routes** (`features::books::routes`): parse the id and body, then call a
//!   command or query handler
//! - **Repository** (`features::books::repository`): translates book
//!   operations into statements and derives `NotFound`
//! - **Gateway** (`db`): executes bound statements against the pool
//!
//! Writes are commands (create, update, delete) and reads are queries (get,
//! list). Every failure reaching the boundary is an [`AppError`] rendered as
//! the standard error envelope.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use bookdb_server::{api, config::Config, db, features::books::PgBookRepository};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     let pool = db::create_pool(&config.database).await?;
//!     let books = Arc::new(PgBookRepository::new(db::Gateway::new(pool)));
//!     let app = api::create_router(books, &config);
//!     api::serve(app, &config, std::future::pending()).await
//! }
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod features;
pub mod middleware;

pub use error::AppError;
