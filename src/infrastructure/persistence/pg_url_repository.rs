//! PostgreSQL implementation of the URL registry.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUrlEntry, UrlEntry};
use crate::domain::repositories::UrlRepository;
use crate::domain::repositories::url_repository::COUNTER_NAME;
use crate::error::AppError;

/// PostgreSQL repository for URL entries and the short code counter.
///
/// Uses SQLx prepared statements for SQL injection protection and type safety.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn ensure_counter(&self) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO counters (name, next_number)
            VALUES ($1, 1)
            ON CONFLICT (name) DO NOTHING
            "#,
        )
        .bind(COUNTER_NAME)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn find_by_url(&self, original_url: &str) -> Result<Option<UrlEntry>, AppError> {
        let entry = sqlx::query_as::<_, UrlEntry>(
            r#"
            SELECT short_code, original_url, created_at
            FROM url_entries
            WHERE original_url = $1
            "#,
        )
        .bind(original_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(entry)
    }

    async fn find_by_code(&self, short_code: i64) -> Result<Option<UrlEntry>, AppError> {
        let entry = sqlx::query_as::<_, UrlEntry>(
            r#"
            SELECT short_code, original_url, created_at
            FROM url_entries
            WHERE short_code = $1
            "#,
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(entry)
    }

    async fn insert_next(&self, new_entry: NewUrlEntry) -> Result<Option<UrlEntry>, AppError> {
        let mut tx = self.pool.begin().await?;

        // The row lock taken here serializes concurrent mints until commit.
        let issued: Option<i64> = sqlx::query_scalar(
            r#"
            UPDATE counters
            SET next_number = next_number + 1
            WHERE name = $1
            RETURNING next_number - 1
            "#,
        )
        .bind(COUNTER_NAME)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(short_code) = issued else {
            return Err(AppError::internal("Counter record is missing"));
        };

        let entry = sqlx::query_as::<_, UrlEntry>(
            r#"
            INSERT INTO url_entries (short_code, original_url)
            VALUES ($1, $2)
            ON CONFLICT (original_url) DO NOTHING
            RETURNING short_code, original_url, created_at
            "#,
        )
        .bind(short_code)
        .bind(&new_entry.original_url)
        .fetch_optional(&mut *tx)
        .await?;

        match entry {
            Some(entry) => {
                tx.commit().await?;
                Ok(Some(entry))
            }
            None => {
                // Another request registered this URL; give the number back.
                tx.rollback().await?;
                Ok(None)
            }
        }
    }

    async fn next_number(&self) -> Result<i64, AppError> {
        let next: Option<i64> =
            sqlx::query_scalar("SELECT next_number FROM counters WHERE name = $1")
                .bind(COUNTER_NAME)
                .fetch_optional(self.pool.as_ref())
                .await?;

        next.ok_or_else(|| AppError::internal("Counter record is missing"))
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM url_entries")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn health_check(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
