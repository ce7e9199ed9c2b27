//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`                        - Landing page
//! - `GET  /public/*`                - Static assets
//! - `GET  /health`                  - Health check
//! - `/api/*`                        - Short URL API (see [`crate::api::routes`])
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin may call the API
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::{ServeDir, ServeFile};

/// Filesystem locations of the landing page and static assets.
#[derive(Debug, Clone)]
pub struct StaticAssets {
    pub static_dir: String,
    pub index_page: String,
}

impl Default for StaticAssets {
    fn default() -> Self {
        Self {
            static_dir: "public".to_string(),
            index_page: "views/index.html".to_string(),
        }
    }
}

/// Builds the router with all routes and middleware except path normalization.
pub fn router(state: AppState, assets: &StaticAssets) -> Router {
    Router::new()
        .route_service("/", ServeFile::new(&assets.index_page))
        .nest_service("/public", ServeDir::new(&assets.static_dir))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::public_routes())
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(tracing::layer())
}

/// Constructs the application service with trailing slashes trimmed.
pub fn app_router(state: AppState, assets: &StaticAssets) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, assets))
}
