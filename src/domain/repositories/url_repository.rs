//! Repository trait for the short URL registry.

use crate::domain::entities::{NewUrlEntry, UrlEntry};
use crate::error::AppError;
use async_trait::async_trait;

/// Name of the single counter record used to mint short codes.
pub const COUNTER_NAME: &str = "counter";

/// Repository interface for URL entries and the short code counter.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryUrlRepository`] - process-local implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_url.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Creates the counter record with `next_number = 1` if it does not exist.
    ///
    /// Safe to call on every start. Returns `true` when the record was created
    /// by this call and `false` when it already existed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    async fn ensure_counter(&self) -> Result<bool, AppError>;

    /// Finds an entry by its exact original URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    async fn find_by_url(&self, original_url: &str) -> Result<Option<UrlEntry>, AppError>;

    /// Finds an entry by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlEntry))` if found
    /// - `Ok(None)` if the code was never issued
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    async fn find_by_code(&self, short_code: i64) -> Result<Option<UrlEntry>, AppError>;

    /// Takes the next number from the counter and stores it with the URL.
    ///
    /// The counter increment and the insert are one atomic step: either both
    /// are persisted or neither is. When the URL is already registered nothing
    /// is written and `Ok(None)` is returned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the counter record is missing.
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    async fn insert_next(&self, new_entry: NewUrlEntry) -> Result<Option<UrlEntry>, AppError>;

    /// Returns the number the next new entry will receive.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the counter record is missing.
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    async fn next_number(&self) -> Result<i64, AppError>;

    /// Counts stored entries.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Performs a round-trip to the backing store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] if the store cannot be reached.
    async fn health_check(&self) -> Result<(), AppError>;
}
