mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_redirect_success() {
    let (server, repo) = common::make_server();
    repo.seed("abc123", "https://example.com/target");

    let response = server.get("/abc123").await;

    response.assert_status(StatusCode::FOUND);
    let location = response.header("location");
    assert_eq!(location, "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_counts_every_visit() {
    let (server, repo) = common::make_server();
    repo.seed("abc123", "https://example.com");

    for _ in 0..3 {
        server
            .get("/abc123")
            .await
            .assert_status(StatusCode::FOUND);
    }

    let link = repo.get("abc123").unwrap();
    assert_eq!(link.clicks, 3);
    assert!(link.last_accessed.is_some());
}

#[tokio::test]
async fn test_redirect_sets_last_accessed() {
    let (server, repo) = common::make_server();
    let seeded = repo.seed("abc123", "https://example.com");
    assert!(seeded.last_accessed.is_none());

    server.get("/abc123").await;

    let link = repo.get("abc123").unwrap();
    let seen = link.last_accessed.expect("visit recorded");
    assert!(seen >= link.created_at);
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (server, repo) = common::make_server();
    repo.seed("abc123", "https://example.com");

    let response = server.get("/nope").await;

    response.assert_status_not_found();
    assert_eq!(response.text(), "URL not found");

    let link = repo.get("abc123").unwrap();
    assert_eq!(link.clicks, 0);
    assert_eq!(repo.len(), 1);
}

#[tokio::test]
async fn test_redirect_code_is_case_sensitive() {
    let (server, repo) = common::make_server();
    repo.seed("AbC", "https://example.com");

    server.get("/abc").await.assert_status_not_found();
    server.get("/AbC").await.assert_status(StatusCode::FOUND);
}

#[tokio::test]
async fn test_redirect_does_not_touch_other_links() {
    let (server, repo) = common::make_server();
    repo.seed("one", "https://one.example.com");
    repo.seed("two", "https://two.example.com");

    server.get("/one").await;

    assert_eq!(repo.get("one").unwrap().clicks, 1);
    assert_eq!(repo.get("two").unwrap().clicks, 0);
}

#[tokio::test]
async fn test_redirect_store_failure() {
    let server = common::make_failing_server();

    let response = server.get("/abc123").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text(), "Server error");
}

#[tokio::test]
async fn test_redirect_with_trailing_slash() {
    let (server, repo) = common::make_normalized_server();
    repo.seed("abc123", "https://example.com/target");

    let response = server.get("/abc123/").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://example.com/target");
    assert_eq!(repo.get("abc123").unwrap().clicks, 1);
}

#[tokio::test]
async fn test_pages_with_trailing_slash() {
    let (server, _repo) = common::make_normalized_server();

    server.get("/health/").await.assert_status_ok();

    let response = server
        .post("/shorten/")
        .form(&[("originalUrl", "https://example.com")])
        .await;
    response.assert_status_ok();
    assert!(response.text().contains("Short URL created"));
}
