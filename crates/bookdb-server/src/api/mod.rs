//! HTTP surface
//!
//! Assembles the feature routes, the health probe and the middleware stack
//! into one router, and runs it.

pub mod response;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::future::Future;
use std::net::SocketAddr;

use crate::config::Config;
use crate::error::AppError;
use crate::features::{self, books::SharedBookRepository, FeatureState};
use crate::middleware;

/// Create the application router with all routes and middleware
pub fn create_router(books: SharedBookRepository, config: &Config) -> Router {
    let state = FeatureState { books };

    Router::new()
        .route("/health", get(health_check))
        .with_state(state.clone())
        .merge(features::router(state))
        // Applied innermost to outermost
        .layer(middleware::timeout_layer(config.server.request_timeout_secs))
        .layer(middleware::tracing_layer())
        .layer(middleware::cors_layer(&config.cors))
}

/// Bind `config.server.host:port` and serve until `shutdown` resolves
pub async fn serve<F>(app: Router, config: &Config, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}

/// Health check handler
///
/// `200 {"status":"healthy","database":"connected"}` when storage answers,
/// `503` otherwise.
async fn health_check(State(state): State<FeatureState>) -> Result<Response, AppError> {
    match state.books.health_check().await {
        Ok(()) => Ok((
            StatusCode::OK,
            Json(json!({
                "status": "healthy",
                "database": "connected"
            })),
        )
            .into_response()),
        Err(e) => {
            tracing::error!("Database health check failed: {}", e);
            Err(AppError::Unavailable("database is not reachable".to_string()))
        },
    }
}
