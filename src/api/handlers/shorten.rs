//! Handler for the short URL creation endpoint.

use axum::{Form, Json, extract::State};

use crate::api::dto::shorten::{ShortenForm, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates (or returns the existing) short URL for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorturl`
///
/// # Request Body
///
/// `application/x-www-form-urlencoded` with a single `url` field:
///
/// ```text
/// url=https://www.freecodecamp.org
/// ```
///
/// # Response
///
/// ```json
/// { "original_url": "https://www.freecodecamp.org", "short_url": 1 }
/// ```
///
/// Submitting the same URL again returns the same `short_url`.
///
/// # Errors
///
/// Returns `{"error":"invalid url"}` with status 200 if the URL is malformed
/// or its host does not resolve.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Form(form): Form<ShortenForm>,
) -> Result<Json<ShortenResponse>, AppError> {
    let entry = state.link_service.shorten(&form.url).await?;
    Ok(Json(entry.into()))
}
