// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{frequency_map, sqlite_db};
use pagestats::domain::models::page::PageStatus;
use pagestats::domain::repositories::page_repository::{PageRepository, RepositoryError};
use pagestats::infrastructure::repositories::page_repo_impl::PageRepositoryImpl;
use std::sync::Arc;

async fn repository() -> PageRepositoryImpl {
    PageRepositoryImpl::new(Arc::new(sqlite_db().await))
}

#[tokio::test]
async fn test_create_and_find_page() {
    let repo = repository().await;

    let created = repo.create("https://example.com").await.unwrap();
    let found = repo.find_by_id(created.id).await.unwrap().unwrap();

    assert_eq!(found.id, created.id);
    assert_eq!(found.target_url, "https://example.com");
    assert_eq!(found.status, PageStatus::Pending);
    assert!(found.results.is_none());
    assert!(found.key.is_none());
    assert!(repo.find_by_id(created.id + 100).await.unwrap().is_none());
}

#[tokio::test]
async fn test_list_is_ordered_by_id() {
    let repo = repository().await;
    for url in ["https://a.example", "https://b.example", "https://c.example"] {
        repo.create(url).await.unwrap();
    }

    let pages = repo.list().await.unwrap();

    let urls: Vec<&str> = pages.iter().map(|p| p.target_url.as_str()).collect();
    assert_eq!(urls, vec!["https://a.example", "https://b.example", "https://c.example"]);
    assert!(pages.windows(2).all(|w| w[0].id < w[1].id));
}

#[tokio::test]
async fn test_lifecycle_to_done_keeps_result_order() {
    let repo = repository().await;
    let page = repo.create("https://example.com").await.unwrap();
    let results = frequency_map(&[("zebra", 1), ("apple", 4), ("mango", 2)]);

    repo.mark_started(page.id).await.unwrap();
    assert_eq!(
        repo.find_by_id(page.id).await.unwrap().unwrap().status,
        PageStatus::Started
    );

    repo.mark_done(page.id, &results, "job-key").await.unwrap();

    let done = repo.find_by_id(page.id).await.unwrap().unwrap();
    assert_eq!(done.status, PageStatus::Done);
    assert_eq!(done.key.as_deref(), Some("job-key"));
    let stored = done.results.unwrap();
    let keys: Vec<&str> = stored.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["zebra", "apple", "mango"]);
    assert_eq!(stored.get("apple"), Some(&4));
}

#[tokio::test]
async fn test_mark_started_twice_is_allowed() {
    let repo = repository().await;
    let page = repo.create("https://example.com").await.unwrap();

    repo.mark_started(page.id).await.unwrap();
    repo.mark_started(page.id).await.unwrap();

    repo.mark_failed(page.id).await.unwrap();
    let failed = repo.find_by_id(page.id).await.unwrap().unwrap();
    assert_eq!(failed.status, PageStatus::Failed);
    assert!(failed.results.is_none());
}

#[tokio::test]
async fn test_invalid_transitions_are_rejected() {
    let repo = repository().await;
    let page = repo.create("https://example.com").await.unwrap();

    // PENDING cannot finish without starting
    let err = repo
        .mark_done(page.id, &frequency_map(&[("a", 1)]), "k")
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::InvalidTransition { .. }));

    repo.mark_started(page.id).await.unwrap();
    repo.mark_failed(page.id).await.unwrap();

    for result in [
        repo.mark_started(page.id).await,
        repo.mark_done(page.id, &frequency_map(&[("a", 1)]), "k").await,
        repo.mark_failed(page.id).await,
    ] {
        match result {
            Err(RepositoryError::InvalidTransition { from, .. }) => assert_eq!(from, "FAILED"),
            other => panic!("expected InvalidTransition, got {:?}", other),
        }
    }

    let page = repo.find_by_id(page.id).await.unwrap().unwrap();
    assert_eq!(page.status, PageStatus::Failed);
    assert!(page.results.is_none());
}

#[tokio::test]
async fn test_transition_on_missing_page() {
    let repo = repository().await;

    assert!(matches!(
        repo.mark_started(404).await,
        Err(RepositoryError::NotFound)
    ));
}
