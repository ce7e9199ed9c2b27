//! DTO for the greeting endpoint.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HelloResponse {
    pub greeting: &'static str,
}
