//! URL entry entity representing a short code to original URL mapping.

use chrono::{DateTime, Utc};

/// A stored mapping between a sequential short code and the submitted URL.
///
/// Both `short_code` and `original_url` are unique across the registry and
/// never change once the entry has been written.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UrlEntry {
    pub short_code: i64,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

impl UrlEntry {
    /// Creates a new UrlEntry instance.
    pub fn new(short_code: i64, original_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            short_code,
            original_url,
            created_at,
        }
    }
}

/// Input data for minting a new entry.
///
/// The short code is not part of the input: it is taken from the counter
/// by the repository in the same step that stores the row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlEntry {
    pub original_url: String,
}

impl NewUrlEntry {
    pub fn new(original_url: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
        }
    }
}
