//! DTOs for the short URL endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::UrlEntry;

/// Form body of `POST /api/shorturl`.
///
/// A missing `url` field is treated like an empty one so the request
/// fails validation instead of being rejected by the extractor.
#[derive(Debug, Deserialize)]
pub struct ShortenForm {
    #[serde(default)]
    pub url: String,
}

/// Successful shortening result.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ShortenResponse {
    pub original_url: String,
    pub short_url: i64,
}

impl From<UrlEntry> for ShortenResponse {
    fn from(entry: UrlEntry) -> Self {
        Self {
            original_url: entry.original_url,
            short_url: entry.short_code,
        }
    }
}
