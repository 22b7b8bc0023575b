// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod memory_repository;
pub mod stub_fetcher;

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;
use migration::{Migrator, MigratorTrait};
use pagestats::application::use_cases::create_page::CreatePageUseCase;
use pagestats::application::use_cases::scrape_page::ScrapePageUseCase;
use pagestats::domain::models::page::FrequencyMap;
use pagestats::domain::repositories::page_repository::PageRepository;
use pagestats::domain::services::health_service::{HealthChecker, HealthService};
use pagestats::domain::services::page_statistics::PageStatisticsService;
use pagestats::engines::traits::PageFetcher;
use pagestats::presentation::routes;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;

pub use memory_queue::InMemoryJobQueue;
pub use memory_repository::InMemoryPageRepository;
pub use stub_fetcher::StubFetcher;

pub const SIMPLE_PAGE: &str =
    "<html><head><title>X</title></head><body><p>go go stay</p></body></html>";

/// 固定结果的健康检查器
pub struct StaticChecker(pub bool);

#[async_trait]
impl HealthChecker for StaticChecker {
    async fn is_healthy(&self) -> bool {
        self.0
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub server: TestServer,
    pub repository: Arc<InMemoryPageRepository>,
    pub queue: Arc<InMemoryJobQueue>,
}

pub fn create_test_app() -> TestApp {
    create_test_app_with_health(true, true)
}

pub fn create_test_app_with_health(queue_healthy: bool, db_healthy: bool) -> TestApp {
    let repository = Arc::new(InMemoryPageRepository::new());
    let queue = Arc::new(InMemoryJobQueue::new());

    let create_page = Arc::new(CreatePageUseCase::new(repository.clone(), queue.clone()));
    let health = Arc::new(HealthService::new(
        Arc::new(StaticChecker(queue_healthy)),
        Arc::new(StaticChecker(db_healthy)),
        Duration::from_millis(200),
    ));

    let router = routes::app(repository.clone(), create_page, health);
    let server = TestServer::new(router.clone()).unwrap();

    TestApp {
        router,
        server,
        repository,
        queue,
    }
}

pub fn scrape_use_case(
    repository: Arc<dyn PageRepository>,
    fetcher: Arc<dyn PageFetcher>,
) -> Arc<ScrapePageUseCase> {
    let statistics = Arc::new(PageStatisticsService::with_defaults(fetcher));
    Arc::new(ScrapePageUseCase::new(repository, statistics))
}

pub fn frequency_map(entries: &[(&str, u64)]) -> FrequencyMap {
    entries
        .iter()
        .map(|(word, count)| (word.to_string(), *count))
        .collect()
}

/// 单连接的 SQLite 内存数据库，已执行迁移
pub async fn sqlite_db() -> DatabaseConnection {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = Database::connect(opt)
        .await
        .expect("Failed to open SQLite database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to apply migrations");
    db
}
