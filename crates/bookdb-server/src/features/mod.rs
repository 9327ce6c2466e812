//! Feature modules implementing the BookDB API
//!
//! Each feature is a vertical slice with its own commands, queries and
//! routes:
//! - `commands/` - Write operations (create, update, delete)
//! - `queries/` - Read operations (get, list)
//! - `routes.rs` - HTTP route definitions
//! - `types.rs` - Resource types
//!
//! # Features
//!
//! - **books**: CRUD over the book catalog

pub mod books;
pub mod shared;

use axum::Router;

use books::SharedBookRepository;

/// Shared state for all feature routes
#[derive(Clone)]
pub struct FeatureState {
    pub books: SharedBookRepository,
}

/// Creates the feature router with every slice mounted
pub fn router(state: FeatureState) -> Router<()> {
    Router::new().merge(books::books_routes().with_state(state.books))
}
