//! Short URL creation and retrieval service.

use std::sync::Arc;

use tracing::{debug, info};

use crate::application::services::url_validator::UrlValidator;
use crate::domain::entities::{NewUrlEntry, UrlEntry};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Message returned when a short code does not exist.
pub const NOT_FOUND_MESSAGE: &str = "No short URL found for the given input";

/// Message returned when a short code is not a number.
pub const WRONG_FORMAT_MESSAGE: &str = "Wrong format";

/// Service for shortening URLs and resolving short codes.
///
/// Gates every write through the [`UrlValidator`] and deduplicates on the
/// exact submitted URL so one long URL always maps to one short code.
pub struct LinkService {
    repository: Arc<dyn UrlRepository>,
    validator: UrlValidator,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(repository: Arc<dyn UrlRepository>, validator: UrlValidator) -> Self {
        Self {
            repository,
            validator,
        }
    }

    /// Creates the short code counter if this is the first start.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    pub async fn bootstrap(&self) -> Result<(), AppError> {
        if self.repository.ensure_counter().await? {
            info!("Counter initialized");
        } else {
            info!("Counter exists");
        }
        Ok(())
    }

    /// Validates `candidate` and returns its short URL entry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] if validation fails; the registry
    /// is not touched in that case.
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    pub async fn shorten(&self, candidate: &str) -> Result<UrlEntry, AppError> {
        self.validator.validate(candidate).await?;
        self.create_or_get(candidate).await
    }

    /// Returns the existing entry for `original_url` or mints a new one.
    ///
    /// # Deduplication
    ///
    /// Matching is on the exact string. If another request registers the
    /// same URL between the lookup and the insert, the repository writes
    /// nothing and the winner's entry is returned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    /// Returns [`AppError::Internal`] if the counter is missing.
    pub async fn create_or_get(&self, original_url: &str) -> Result<UrlEntry, AppError> {
        if let Some(existing) = self.repository.find_by_url(original_url).await? {
            debug!("Found existing entry {}", existing.short_code);
            return Ok(existing);
        }

        if let Some(created) = self
            .repository
            .insert_next(NewUrlEntry::new(original_url))
            .await?
        {
            info!(
                "Created entry {} for {}",
                created.short_code, created.original_url
            );
            return Ok(created);
        }

        self.repository
            .find_by_url(original_url)
            .await?
            .ok_or_else(|| AppError::internal("Entry vanished after conflicting insert"))
    }

    /// Exact-match lookup by original URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    pub async fn find_by_url(&self, original_url: &str) -> Result<Option<UrlEntry>, AppError> {
        self.repository.find_by_url(original_url).await
    }

    /// Exact-match lookup by short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    pub async fn find_by_code(&self, short_code: i64) -> Result<Option<UrlEntry>, AppError> {
        self.repository.find_by_code(short_code).await
    }

    /// Resolves a short code taken from a request path.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] if `raw_code` is not a decimal number.
    /// Returns [`AppError::NotFound`] if no entry has this code.
    pub async fn resolve(&self, raw_code: &str) -> Result<UrlEntry, AppError> {
        let Some(short_code) = parse_short_code(raw_code)? else {
            return Err(AppError::not_found(NOT_FOUND_MESSAGE));
        };

        match self.repository.find_by_code(short_code).await? {
            Some(entry) => Ok(entry),
            None => {
                debug!("Short code {} does not exist", short_code);
                Err(AppError::not_found(NOT_FOUND_MESSAGE))
            }
        }
    }

    /// Returns `(entry count, next number)` for reporting.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    pub async fn summary(&self) -> Result<(i64, i64), AppError> {
        let count = self.repository.count().await?;
        let next = self.repository.next_number().await?;
        Ok((count, next))
    }

    /// Checks that the registry's store answers.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] if the store cannot be reached.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.repository.health_check().await
    }
}

/// Parses a path segment into a short code.
///
/// Only ASCII digits are accepted. A digit string too large for `i64` can
/// never have been issued, so it yields `Ok(None)` instead of an error.
///
/// # Errors
///
/// Returns [`AppError::BadRequest`] for empty or non-numeric input.
pub fn parse_short_code(raw: &str) -> Result<Option<i64>, AppError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::bad_request(WRONG_FORMAT_MESSAGE));
    }
    Ok(raw.parse::<i64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUrlRepository;
    use crate::infrastructure::dns::{MockHostResolver, ResolveError};
    use chrono::Utc;

    fn entry(code: i64, url: &str) -> UrlEntry {
        UrlEntry::new(code, url.to_string(), Utc::now())
    }

    fn resolving_validator() -> UrlValidator {
        let mut resolver = MockHostResolver::new();
        resolver.expect_resolve().returning(|_| Ok(()));
        UrlValidator::new(Arc::new(resolver))
    }

    fn service(repo: MockUrlRepository) -> LinkService {
        LinkService::new(Arc::new(repo), resolving_validator())
    }

    #[tokio::test]
    async fn test_create_or_get_creates_new_entry() {
        let mut repo = MockUrlRepository::new();
        repo.expect_find_by_url().times(1).returning(|_| Ok(None));
        repo.expect_insert_next()
            .withf(|new_entry| new_entry.original_url == "https://www.freecodecamp.org")
            .times(1)
            .returning(|new_entry| Ok(Some(entry(1, &new_entry.original_url))));

        let created = service(repo)
            .create_or_get("https://www.freecodecamp.org")
            .await
            .unwrap();

        assert_eq!(created.short_code, 1);
        assert_eq!(created.original_url, "https://www.freecodecamp.org");
    }

    #[tokio::test]
    async fn test_create_or_get_returns_existing_entry() {
        let mut repo = MockUrlRepository::new();
        repo.expect_find_by_url()
            .times(1)
            .returning(|url| Ok(Some(entry(7, url))));
        repo.expect_insert_next().times(0);

        let found = service(repo)
            .create_or_get("https://example.org")
            .await
            .unwrap();

        assert_eq!(found.short_code, 7);
    }

    #[tokio::test]
    async fn test_create_or_get_lost_race_rereads_winner() {
        let mut repo = MockUrlRepository::new();
        let mut seq = mockall::Sequence::new();
        repo.expect_find_by_url()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(None));
        repo.expect_insert_next()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(None));
        repo.expect_find_by_url()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|url| Ok(Some(entry(3, url))));

        let found = service(repo)
            .create_or_get("https://race.example")
            .await
            .unwrap();

        assert_eq!(found.short_code, 3);
    }

    #[tokio::test]
    async fn test_shorten_invalid_url_never_reaches_registry() {
        let mut repo = MockUrlRepository::new();
        repo.expect_find_by_url().times(0);
        repo.expect_insert_next().times(0);

        let result = service(repo).shorten("not a url").await;

        assert!(matches!(result, Err(AppError::InvalidUrl { .. })));
    }

    #[tokio::test]
    async fn test_shorten_unresolvable_host_never_reaches_registry() {
        let mut repo = MockUrlRepository::new();
        repo.expect_find_by_url().times(0);
        repo.expect_insert_next().times(0);

        let mut resolver = MockHostResolver::new();
        resolver.expect_resolve().returning(|host| {
            Err(ResolveError::NoAddresses(host.to_string()))
        });
        let service = LinkService::new(Arc::new(repo), UrlValidator::new(Arc::new(resolver)));

        let result = service
            .shorten("http://thisdomaindoesnotexist.invalid")
            .await;

        assert!(matches!(result, Err(AppError::InvalidUrl { .. })));
    }

    #[tokio::test]
    async fn test_shorten_store_failure_propagates() {
        let mut repo = MockUrlRepository::new();
        repo.expect_find_by_url()
            .returning(|_| Err(AppError::StoreUnavailable(sqlx::Error::PoolTimedOut)));

        let result = service(repo).shorten("https://example.org").await;

        assert!(matches!(result, Err(AppError::StoreUnavailable(_))));
    }

    #[tokio::test]
    async fn test_resolve_existing_code() {
        let mut repo = MockUrlRepository::new();
        repo.expect_find_by_code()
            .withf(|code| *code == 2)
            .times(1)
            .returning(|code| Ok(Some(entry(code, "https://example.org"))));

        let found = service(repo).resolve("2").await.unwrap();
        assert_eq!(found.original_url, "https://example.org");
    }

    #[tokio::test]
    async fn test_resolve_unknown_code() {
        let mut repo = MockUrlRepository::new();
        repo.expect_find_by_code().times(1).returning(|_| Ok(None));

        let result = service(repo).resolve("999").await;
        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_resolve_non_numeric_code() {
        let mut repo = MockUrlRepository::new();
        repo.expect_find_by_code().times(0);

        let result = service(repo).resolve("abc").await;
        assert!(matches!(result, Err(AppError::BadRequest { .. })));
    }

    #[tokio::test]
    async fn test_resolve_overflowing_code_is_not_found() {
        let mut repo = MockUrlRepository::new();
        repo.expect_find_by_code().times(0);

        let result = service(repo).resolve("99999999999999999999999").await;
        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_plain_lookups_pass_through() {
        let mut repo = MockUrlRepository::new();
        repo.expect_find_by_url()
            .withf(|url| url == "https://example.org")
            .times(1)
            .returning(|url| Ok(Some(entry(4, url))));
        repo.expect_find_by_code().times(1).returning(|_| Ok(None));

        let service = service(repo);

        let by_url = service.find_by_url("https://example.org").await.unwrap();
        assert_eq!(by_url.map(|e| e.short_code), Some(4));
        assert!(service.find_by_code(5).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_bootstrap_creates_counter_once() {
        let mut repo = MockUrlRepository::new();
        repo.expect_ensure_counter().times(1).returning(|| Ok(true));

        assert!(service(repo).bootstrap().await.is_ok());
    }

    #[test]
    fn test_parse_short_code() {
        assert_eq!(parse_short_code("1").unwrap(), Some(1));
        assert_eq!(parse_short_code("007").unwrap(), Some(7));
        assert!(parse_short_code("").is_err());
        assert!(parse_short_code("-1").is_err());
        assert!(parse_short_code("+1").is_err());
        assert!(parse_short_code("1a").is_err());
        assert!(parse_short_code(" 1").is_err());
    }
}
