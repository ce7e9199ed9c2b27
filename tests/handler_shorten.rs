mod common;

use serde_json::json;
use shorturl_service::domain::repositories::UrlRepository;

#[tokio::test]
async fn test_shorten_first_url_gets_code_one() {
    let (server, _repo) = common::create_test_server().await;

    let json = common::shorten(&server, "https://www.freecodecamp.org").await;

    assert_eq!(
        json,
        json!({ "original_url": "https://www.freecodecamp.org", "short_url": 1 })
    );
}

#[tokio::test]
async fn test_shorten_deduplication() {
    let (server, repo) = common::create_test_server().await;

    let first = common::shorten(&server, "https://www.freecodecamp.org").await;
    let second = common::shorten(&server, "https://www.freecodecamp.org").await;

    assert_eq!(first["short_url"], 1);
    assert_eq!(second["short_url"], 1);
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_shorten_sequential_codes() {
    let (server, _repo) = common::create_test_server().await;

    let first = common::shorten(&server, "https://www.freecodecamp.org").await;
    let again = common::shorten(&server, "https://www.freecodecamp.org").await;
    let second = common::shorten(&server, "https://example.org").await;
    let third = common::shorten(&server, "https://example.com/page").await;

    assert_eq!(first["short_url"], 1);
    assert_eq!(again["short_url"], 1);
    assert_eq!(second["short_url"], 2);
    assert_eq!(third["short_url"], 3);
}

#[tokio::test]
async fn test_shorten_exact_match_only() {
    let (server, _repo) = common::create_test_server().await;

    let plain = common::shorten(&server, "https://example.org").await;
    let slash = common::shorten(&server, "https://example.org/").await;

    assert_eq!(plain["short_url"], 1);
    assert_eq!(slash["short_url"], 2);
    assert_eq!(slash["original_url"], "https://example.org/");
}

#[tokio::test]
async fn test_shorten_invalid_url() {
    let (server, repo) = common::create_test_server().await;

    let json = common::shorten(&server, "not a url").await;

    assert_eq!(json, json!({ "error": "invalid url" }));
    assert_eq!(repo.count().await.unwrap(), 0);
    assert_eq!(repo.next_number().await.unwrap(), 1);
}

#[tokio::test]
async fn test_shorten_unresolvable_host() {
    let (server, repo) = common::create_test_server().await;

    let json = common::shorten(&server, "http://thisdomaindoesnotexist.invalid").await;

    assert_eq!(json, json!({ "error": "invalid url" }));
    assert_eq!(repo.count().await.unwrap(), 0);
    assert_eq!(repo.next_number().await.unwrap(), 1);
}

#[tokio::test]
async fn test_shorten_non_http_scheme_with_host() {
    let (server, _repo) = common::create_test_server().await;

    let json = common::shorten(&server, "ftp://example.org/file.txt").await;

    assert_eq!(
        json,
        json!({ "original_url": "ftp://example.org/file.txt", "short_url": 1 })
    );
}

#[tokio::test]
async fn test_shorten_hostless_scheme() {
    let (server, repo) = common::create_test_server().await;

    let json = common::shorten(&server, "mailto:someone@example.org").await;

    assert_eq!(json, json!({ "error": "invalid url" }));
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_shorten_control_character_rejected() {
    let (server, repo) = common::create_test_server().await;

    let json = common::shorten(&server, "https://example.org/a\nb").await;

    assert_eq!(json, json!({ "error": "invalid url" }));
    assert_eq!(repo.count().await.unwrap(), 0);
    assert_eq!(repo.next_number().await.unwrap(), 1);
}

#[tokio::test]
async fn test_shorten_missing_url_field() {
    let (server, repo) = common::create_test_server().await;

    let response = server
        .post("/api/shorturl")
        .form(&[("other", "value")])
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "error": "invalid url" })
    );
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_rejected_url_does_not_consume_code() {
    let (server, _repo) = common::create_test_server().await;

    common::shorten(&server, "not a url").await;
    common::shorten(&server, "http://thisdomaindoesnotexist.invalid").await;
    let json = common::shorten(&server, "https://example.org").await;

    assert_eq!(json["short_url"], 1);
}
