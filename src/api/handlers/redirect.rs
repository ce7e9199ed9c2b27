//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::info;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /api/shorturl/{short_code}`
///
/// # Response
///
/// `302 Found` with `Location` set to the stored URL exactly as submitted.
///
/// # Errors
///
/// Returns 400 Bad Request if the code is not a number.
/// Returns 404 Not Found if the code was never issued.
pub async fn redirect_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let entry = state.link_service.resolve(&short_code).await?;

    let location = HeaderValue::from_str(&entry.original_url)
        .map_err(|_| AppError::internal("Stored URL is not a valid Location header"))?;

    info!(
        "Redirecting {} to {}",
        entry.short_code, entry.original_url
    );

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
