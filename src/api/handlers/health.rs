//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{HealthChecks, HealthResponse, RegistryCheck};
use crate::state::AppState;

/// Returns service health status with the registry check.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Registry store reachable
/// - **503 Service Unavailable**: Registry store unreachable or counter missing
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "database": { "status": "ok", "entries": 2, "next_short_code": 3 }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let database = check_registry(&state).await;

    let (code, status) = if database.is_ok() {
        (StatusCode::OK, "healthy")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    let response = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        checks: HealthChecks { database },
    };

    (code, Json(response))
}

async fn check_registry(state: &AppState) -> RegistryCheck {
    if let Err(e) = state.link_service.health_check().await {
        return RegistryCheck::error(e.to_string());
    }

    match state.link_service.summary().await {
        Ok((entries, next)) => RegistryCheck::ok(entries, next),
        Err(e) => RegistryCheck::error(e.to_string()),
    }
}
