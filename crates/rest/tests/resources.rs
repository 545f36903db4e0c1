//! Resource lookup and search endpoint tests.

mod common;

use axum::http::StatusCode;
use serde_json::Value;

use common::fixtures::ResourceFixture;
use common::harness::RestTestHarness;

fn sorted_titles(body: &Value) -> Vec<String> {
    let mut titles: Vec<String> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["title"].as_str().unwrap().to_string())
        .collect();
    titles.sort();
    titles
}

// =============================================================================
// GET /api/resource/{id}
// =============================================================================

#[tokio::test]
async fn test_read_by_store_id() {
    let harness = RestTestHarness::new();
    let ids = harness
        .seed_resources(vec![ResourceFixture::new("Ownership in Rust").tags(&["rust"]).build()])
        .await;

    let response = harness.server.get(&format!("/api/resource/{}", ids[0])).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["id"], ids[0].as_str());
    assert_eq!(body["title"], "Ownership in Rust");
    assert_eq!(body["type"], "video");
    assert_eq!(body["tags"][0], "rust");
    assert!(body.get("_id").is_none());
}

#[tokio::test]
async fn test_read_by_external_id() {
    let harness = RestTestHarness::new();
    let ids = harness
        .seed_resources(vec![
            ResourceFixture::new("first").build(),
            ResourceFixture::new("second").external_id("yt-42").build(),
        ])
        .await;

    let response = harness.server.get("/api/resource/yt-42").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["title"], "second");
    assert_eq!(body["id"], ids[1].as_str());
}

#[tokio::test]
async fn test_read_unknown_is_404() {
    let harness = RestTestHarness::new();
    harness
        .seed_resources(vec![ResourceFixture::new("only").build()])
        .await;

    let response = harness.server.get("/api/resource/nonexistent").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["detail"], "Resource not found");
    assert_eq!(body["code"], "not-found");
}

// =============================================================================
// GET /api/search
// =============================================================================

#[tokio::test]
async fn test_search_matches_title_or_tags_case_insensitively() {
    let harness = RestTestHarness::new();
    harness
        .seed_resources(vec![
            ResourceFixture::new("Async RUST in depth").build(),
            ResourceFixture::new("Systems programming").tags(&["C", "Rustacean"]).build(),
            ResourceFixture::new("Linear algebra").tags(&["math"]).build(),
        ])
        .await;

    let response = harness.server.get("/api/search?q=rust").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(
        sorted_titles(&body),
        vec!["Async RUST in depth", "Systems programming"]
    );
    assert!(body.get("meta").is_none());
    for item in body["data"].as_array().unwrap() {
        assert!(item["id"].is_string());
        assert!(item.get("_id").is_none());
    }
}

#[tokio::test]
async fn test_search_requires_q() {
    let harness = RestTestHarness::new();

    let response = harness.server.get("/api/search?category=Programming").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["code"], "invalid");
    assert!(body["detail"].as_str().unwrap().contains("'q'"));
}

#[tokio::test]
async fn test_search_empty_q_matches_everything() {
    let harness = RestTestHarness::new();
    harness
        .seed_resources(vec![
            ResourceFixture::new("one").build(),
            ResourceFixture::new("two").build(),
        ])
        .await;

    let response = harness.server.get("/api/search?q=").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_search_limit_is_clamped() {
    let harness = RestTestHarness::new();
    let fixtures = (0..4)
        .map(|i| ResourceFixture::new(format!("Go lesson {}", i)).build())
        .collect();
    harness.seed_resources(fixtures).await;

    let cases = [("limit=2", 2), ("limit=0", 1), ("limit=-7", 1), ("limit=500", 4)];
    for (query, expected) in cases {
        let response = harness
            .server
            .get(&format!("/api/search?q=go&{}", query))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"].as_array().unwrap().len(), expected, "{}", query);
    }
}

#[tokio::test]
async fn test_search_category_and_level_are_substrings() {
    let harness = RestTestHarness::new();
    harness
        .seed_resources(vec![
            ResourceFixture::new("Go web").category("Web Development").build(),
            ResourceFixture::new("Go tools").category("Tooling").build(),
            ResourceFixture::new("Go deep")
                .category("Web Development")
                .level("Advanced")
                .build(),
        ])
        .await;

    let response = harness.server.get("/api/search?q=go&category=web").await;
    let body: Value = response.json();
    assert_eq!(sorted_titles(&body), vec!["Go deep", "Go web"]);

    let response = harness
        .server
        .get("/api/search?q=go&category=web&level=adv")
        .await;
    let body: Value = response.json();
    assert_eq!(sorted_titles(&body), vec!["Go deep"]);
}

#[tokio::test]
async fn test_search_text_is_literal() {
    let harness = RestTestHarness::new();
    harness
        .seed_resources(vec![
            ResourceFixture::new("C++ primer").build(),
            ResourceFixture::new("Cobol").build(),
        ])
        .await;

    let response = harness.server.get("/api/search?q=c%2B%2B").await;
    let body: Value = response.json();
    assert_eq!(sorted_titles(&body), vec!["C++ primer"]);

    let response = harness.server.get("/api/search?q=.*").await;
    let body: Value = response.json();
    assert!(body["data"].as_array().unwrap().is_empty());
}

// =============================================================================
// Unknown routes
// =============================================================================

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let harness = RestTestHarness::new();

    let response = harness.server.get("/api/nothing-here").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["code"], "not-found");
}
