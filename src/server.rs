//! HTTP server initialization and runtime setup.
//!
//! Handles the store lifecycle, counter bootstrap, and Axum server lifecycle.

use crate::application::services::{LinkService, UrlValidator};
use crate::config::{Config, StoreBackend};
use crate::domain::repositories::UrlRepository;
use crate::infrastructure::dns::SystemResolver;
use crate::infrastructure::persistence::{MemoryUrlRepository, PgUrlRepository};
use crate::routes::{StaticAssets, app_router};
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool (or the in-memory registry)
/// - Apply migrations
/// - Short code counter
/// - Axum HTTP server
///
/// The pool is closed after the server has shut down gracefully.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let (repository, pool) = open_store(&config).await?;

    let validator = UrlValidator::new(Arc::new(SystemResolver::new()));
    let link_service = Arc::new(LinkService::new(repository, validator));
    link_service
        .bootstrap()
        .await
        .context("Failed to initialize the short code counter")?;

    let state = AppState::new(link_service);
    let assets = StaticAssets {
        static_dir: config.static_dir.clone(),
        index_page: config.index_page.clone(),
    };
    let app = app_router(state, &assets);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_addr))?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(pool) = pool {
        pool.close().await;
        tracing::info!("Database pool closed");
    }

    tracing::info!("Server stopped");
    Ok(())
}

/// Opens the configured registry.
///
/// The pool is returned alongside the repository so the caller can close it.
async fn open_store(config: &Config) -> Result<(Arc<dyn UrlRepository>, Option<PgPool>)> {
    match config.store_backend {
        StoreBackend::Postgres => {
            let pool = connect_pool(config).await?;

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to migrate")?;
            tracing::info!("Migrations applied");

            let repository: Arc<dyn UrlRepository> =
                Arc::new(PgUrlRepository::new(Arc::new(pool.clone())));
            Ok((repository, Some(pool)))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; entries are lost on exit");
            let repository: Arc<dyn UrlRepository> = Arc::new(MemoryUrlRepository::new());
            Ok((repository, None))
        }
    }
}

/// Connects a PostgreSQL pool using the configured pool settings.
///
/// # Errors
///
/// Returns an error if no database URL is configured or the connection fails.
pub async fn connect_pool(config: &Config) -> Result<PgPool> {
    let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL is not configured")?;

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(database_url)
        .await
        .context("Failed to connect to database")?;

    tracing::info!("Connected to database");
    Ok(pool)
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
