// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{create_test_app, create_test_app_with_health, frequency_map};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use pagestats::domain::models::page::PageStatus;
use serde_json::{json, Value};
use tower::util::ServiceExt;

fn object_keys(value: &Value) -> Vec<String> {
    value
        .as_object()
        .expect("expected a JSON object")
        .keys()
        .cloned()
        .collect()
}

/// 创建页面：返回 201 和页面ID，页面为 PENDING 且作业已入队
#[tokio::test]
async fn test_create_page_success() {
    let app = create_test_app();

    let response = app
        .server
        .post("/pages/")
        .json(&json!({ "target_url": "https://example.com" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    let page_id = body["page_id"].as_i64().unwrap() as i32;

    let page = app.repository.get(page_id).unwrap();
    assert_eq!(page.status, PageStatus::Pending);
    assert_eq!(page.target_url, "https://example.com");
    assert!(page.results.is_none());
    assert_eq!(app.queue.pending(), vec![page_id]);
}

#[tokio::test]
async fn test_create_page_rejects_invalid_url() {
    let app = create_test_app();

    let response = app
        .server
        .post("/pages/")
        .json(&json!({ "target_url": "not a url" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].is_string());
    assert!(app.queue.pending().is_empty());
    assert!(app.repository.get(1).is_none());
}

/// 入队失败返回 500，页面保持 PENDING
#[tokio::test]
async fn test_create_page_enqueue_failure() {
    let app = create_test_app();
    app.queue.set_fail_enqueue(true);

    let response = app
        .server
        .post("/pages/")
        .json(&json!({ "target_url": "https://example.com" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let page = app.repository.get(1).unwrap();
    assert_eq!(page.status, PageStatus::Pending);
}

#[tokio::test]
async fn test_list_pages() {
    let app = create_test_app();
    for url in ["https://a.example", "https://b.example"] {
        app.server
            .post("/pages/")
            .json(&json!({ "target_url": url }))
            .await
            .assert_status(StatusCode::CREATED);
    }
    app.repository
        .seed_done("https://c.example", &frequency_map(&[("go", 2)]))
        .await;

    let response = app.server.get("/pages/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let pages: Vec<Value> = response.json();
    assert_eq!(pages.len(), 3);

    let ids: Vec<i64> = pages.iter().map(|p| p["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    assert_eq!(pages[0]["target_url"], "https://a.example");
    assert_eq!(pages[0]["status"], "PENDING");
    assert!(pages[0]["results"].is_null());
    assert!(pages[0]["key"].is_null());
    assert!(pages[0]["created_at"].is_string());

    assert_eq!(pages[2]["status"], "DONE");
    assert_eq!(pages[2]["results"], json!({ "go": 2 }));
    assert_eq!(pages[2]["key"], "seeded-key");
}

#[tokio::test]
async fn test_get_missing_page_returns_404() {
    let app = create_test_app();

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/pages/999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({ "error": "Page not found" }));
}

#[tokio::test]
async fn test_get_pending_page_has_empty_results() {
    let app = create_test_app();
    app.server
        .post("/pages/")
        .json(&json!({ "target_url": "https://example.com" }))
        .await;

    let response = app.server.get("/pages/1").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["target_url"], "https://example.com");
    assert_eq!(body["status"], "PENDING");
    assert_eq!(body["results"], json!({}));
    assert!(body["created_at"].is_string());
    assert!(body.get("key").is_none());
}

#[tokio::test]
async fn test_get_page_ordering() {
    let app = create_test_app();
    let stored = frequency_map(&[("pear", 2), ("apple", 1), ("fig", 3), ("banana", 2)]);
    let page = app.repository.seed_done("https://example.com", &stored).await;

    let cases = [
        ("", vec!["pear", "apple", "fig", "banana"]),
        ("?ordering=unordered", vec!["pear", "apple", "fig", "banana"]),
        ("?ordering=frequency", vec!["fig", "banana", "pear", "apple"]),
        ("?ordering=alphabetical", vec!["apple", "banana", "fig", "pear"]),
        ("?ordering=ALPHABETICAL", vec!["apple", "banana", "fig", "pear"]),
        ("?ordering=sideways", vec!["pear", "apple", "fig", "banana"]),
    ];

    for (query, expected) in cases {
        let response = app.server.get(&format!("/pages/{}{}", page.id, query)).await;
        assert_eq!(response.status_code(), StatusCode::OK, "query {}", query);

        let body: Value = response.json();
        assert_eq!(body["status"], "DONE");
        assert_eq!(object_keys(&body["results"]), expected, "query {}", query);
        assert_eq!(body["results"]["fig"], 3);
    }
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app_with_health(true, false);

    let response = app.server.get("/health/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(
        body,
        json!({ "celery": "HEALTHY", "postgres": "UNHEALTHY" })
    );
}

#[tokio::test]
async fn test_unrouted_paths_return_404() {
    let app = create_test_app();

    for path in ["/version", "/pages/1/results", "/health"] {
        let response = app.server.get(path).await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND, "path {}", path);
    }
}
