//! BookDB Server - Main entry point

use anyhow::Result;
use bookdb_common::logging::{init_logging, LogConfig};
use std::{sync::Arc, time::Duration};
use tokio::signal;
use tracing::info;

use bookdb_server::{
    api,
    config::Config,
    db::{self, Gateway},
    features::books::{PgBookRepository, SharedBookRepository},
};

#[tokio::main]
async fn main() -> Result<()> {
    // Environment variables take precedence over these defaults
    let log_config = LogConfig::builder()
        .log_file_prefix("bookdb-server")
        .filter_directives("bookdb_server=debug,tower_http=debug,sqlx=warn")
        .build()
        .merge_env()?;

    init_logging(&log_config)?;

    info!("Starting BookDB Server");

    let config = Config::load()?;
    info!(
        "Configuration loaded - server will bind to {}:{}",
        config.server.host, config.server.port
    );

    let pool = db::create_pool(&config.database).await?;
    db::health_check(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Database is not reachable at startup: {}", e))?;
    info!("Database connection pool established");

    let books: SharedBookRepository = Arc::new(PgBookRepository::new(Gateway::new(pool.clone())));
    let app = api::create_router(books, &config);

    api::serve(app, &config, shutdown_signal(config.server.shutdown_timeout_secs)).await?;

    pool.close().await;
    info!("Server shut down gracefully");

    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal(timeout_secs: u64) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received terminate signal, starting graceful shutdown");
        },
    }

    info!("Waiting up to {} seconds for connections to close", timeout_secs);
    tokio::time::sleep(Duration::from_secs(timeout_secs.min(5))).await;
}
