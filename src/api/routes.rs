//! API route configuration.

use crate::api::handlers::{hello_handler, redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes mounted under `/api`.
///
/// # Endpoints
///
/// - `GET  /hello`                  - Fixed greeting
/// - `POST /shorturl`               - Create or fetch the short URL for a long URL
/// - `GET  /shorturl/{short_code}`  - Redirect to the original URL
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/hello", get(hello_handler))
        .route("/shorturl", post(shorten_handler))
        .route("/shorturl/{short_code}", get(redirect_handler))
}
