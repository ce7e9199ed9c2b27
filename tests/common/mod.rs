#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use std::sync::Arc;
use shorturl_service::application::services::{LinkService, UrlValidator};
use shorturl_service::domain::entities::{NewUrlEntry, UrlEntry};
use shorturl_service::domain::repositories::UrlRepository;
use shorturl_service::error::AppError;
use shorturl_service::infrastructure::dns::StaticResolver;
use shorturl_service::infrastructure::persistence::MemoryUrlRepository;
use shorturl_service::routes::{StaticAssets, router};
use shorturl_service::state::AppState;

/// Hosts the test resolver answers for. Everything else fails to resolve.
pub const KNOWN_HOSTS: &[&str] = &["www.freecodecamp.org", "example.org", "example.com"];

pub async fn create_test_state() -> (AppState, Arc<MemoryUrlRepository>) {
    let repo = Arc::new(MemoryUrlRepository::new());
    let validator = UrlValidator::new(Arc::new(StaticResolver::new(KNOWN_HOSTS)));

    let link_service = Arc::new(LinkService::new(repo.clone(), validator));
    link_service.bootstrap().await.unwrap();

    (AppState::new(link_service), repo)
}

pub async fn create_test_server() -> (TestServer, Arc<MemoryUrlRepository>) {
    let (state, repo) = create_test_state().await;
    let app = router(state, &StaticAssets::default());
    (TestServer::new(app).unwrap(), repo)
}

/// Registry whose store never answers.
pub struct UnavailableRepository;

fn unavailable() -> AppError {
    AppError::StoreUnavailable(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl UrlRepository for UnavailableRepository {
    async fn ensure_counter(&self) -> Result<bool, AppError> {
        Err(unavailable())
    }

    async fn find_by_url(&self, _original_url: &str) -> Result<Option<UrlEntry>, AppError> {
        Err(unavailable())
    }

    async fn find_by_code(&self, _short_code: i64) -> Result<Option<UrlEntry>, AppError> {
        Err(unavailable())
    }

    async fn insert_next(&self, _new_entry: NewUrlEntry) -> Result<Option<UrlEntry>, AppError> {
        Err(unavailable())
    }

    async fn next_number(&self) -> Result<i64, AppError> {
        Err(unavailable())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Err(unavailable())
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Err(unavailable())
    }
}

pub fn create_unavailable_server() -> TestServer {
    let validator = UrlValidator::new(Arc::new(StaticResolver::new(KNOWN_HOSTS)));
    let link_service = Arc::new(LinkService::new(Arc::new(UnavailableRepository), validator));
    let app = router(AppState::new(link_service), &StaticAssets::default());
    TestServer::new(app).unwrap()
}

pub async fn shorten(server: &TestServer, url: &str) -> serde_json::Value {
    let response = server
        .post("/api/shorturl")
        .form(&[("url", url)])
        .await;

    response.assert_status_ok();
    response.json::<serde_json::Value>()
}
