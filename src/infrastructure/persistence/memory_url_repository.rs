//! Process-local implementation of the URL registry.
//!
//! Entries live only as long as the process. Used for development without a
//! database and by the handler tests.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::Mutex;

use crate::domain::entities::{NewUrlEntry, UrlEntry};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

#[derive(Debug, Default)]
struct Registry {
    /// `None` until [`UrlRepository::ensure_counter`] runs.
    next_number: Option<i64>,
    by_code: BTreeMap<i64, UrlEntry>,
    code_by_url: HashMap<String, i64>,
}

/// In-memory repository guarded by a single async mutex.
///
/// Holding the lock across the counter read, the insert and the counter
/// write makes [`UrlRepository::insert_next`] atomic.
#[derive(Debug, Default)]
pub struct MemoryUrlRepository {
    inner: Mutex<Registry>,
}

impl MemoryUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UrlRepository for MemoryUrlRepository {
    async fn ensure_counter(&self) -> Result<bool, AppError> {
        let mut registry = self.inner.lock().await;
        if registry.next_number.is_some() {
            return Ok(false);
        }
        registry.next_number = Some(1);
        Ok(true)
    }

    async fn find_by_url(&self, original_url: &str) -> Result<Option<UrlEntry>, AppError> {
        let registry = self.inner.lock().await;
        Ok(registry
            .code_by_url
            .get(original_url)
            .and_then(|code| registry.by_code.get(code))
            .cloned())
    }

    async fn find_by_code(&self, short_code: i64) -> Result<Option<UrlEntry>, AppError> {
        let registry = self.inner.lock().await;
        Ok(registry.by_code.get(&short_code).cloned())
    }

    async fn insert_next(&self, new_entry: NewUrlEntry) -> Result<Option<UrlEntry>, AppError> {
        let mut registry = self.inner.lock().await;

        let Some(short_code) = registry.next_number else {
            return Err(AppError::internal("Counter record is missing"));
        };

        if registry.code_by_url.contains_key(&new_entry.original_url) {
            return Ok(None);
        }

        let entry = UrlEntry::new(short_code, new_entry.original_url, Utc::now());
        registry
            .code_by_url
            .insert(entry.original_url.clone(), short_code);
        registry.by_code.insert(short_code, entry.clone());
        registry.next_number = Some(short_code + 1);

        Ok(Some(entry))
    }

    async fn next_number(&self) -> Result<i64, AppError> {
        let registry = self.inner.lock().await;
        registry
            .next_number
            .ok_or_else(|| AppError::internal("Counter record is missing"))
    }

    async fn count(&self) -> Result<i64, AppError> {
        let registry = self.inner.lock().await;
        Ok(registry.by_code.len() as i64)
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Ok(())
    }
}
