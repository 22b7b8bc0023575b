// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


use pagestats::application::use_cases::scrape_page::ScrapePageUseCase;
use pagestats::config::settings::Settings;
use pagestats::domain::repositories::page_repository::PageRepository;
use pagestats::domain::services::page_statistics::PageStatisticsService;
use pagestats::engines::reqwest_engine::ReqwestFetcher;
use pagestats::infrastructure::cache::redis_client::RedisClient;
use pagestats::infrastructure::database::connection;
use pagestats::infrastructure::metrics;
use pagestats::infrastructure::repositories::page_repo_impl::PageRepositoryImpl;
use pagestats::queue::job_queue::{JobQueue, RedisJobQueue};
use pagestats::utils::telemetry;
use pagestats::workers::manager::WorkerManager;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_telemetry();
    info!("Starting pagestats worker...");

    let settings = Settings::new()?;
    metrics::init_metrics(&settings.metrics);

    let db = Arc::new(connection::create_pool(&settings.database).await?);
    info!("Database connection established");

    let redis_client = RedisClient::new(&settings.redis.url)?;
    let queue: Arc<dyn JobQueue> = Arc::new(RedisJobQueue::new(
        redis_client.clone(),
        settings.queue.name.clone(),
    ));

    let repository: Arc<dyn PageRepository> = Arc::new(PageRepositoryImpl::new(db));
    let fetcher = Arc::new(ReqwestFetcher::new(&settings.scraper)?);
    let statistics = Arc::new(PageStatisticsService::from_settings(
        fetcher,
        &settings.scraper,
    ));
    let use_case = Arc::new(ScrapePageUseCase::new(repository, statistics));

    let recovered = queue.recover_in_flight().await?;
    if recovered > 0 {
        info!(recovered, "Requeued jobs left in flight by a previous worker");
    }

    let mut manager = WorkerManager::new(
        queue,
        use_case,
        Duration::from_millis(settings.worker.poll_interval_ms),
    );
    manager.start_workers(settings.worker.concurrency.max(1));
    manager.start_heartbeat(redis_client, settings.worker.heartbeat_ttl_secs);
    info!(
        manager = manager.id(),
        queue = %settings.queue.name,
        concurrency = settings.worker.concurrency,
        "Worker started"
    );

    manager.wait_for_shutdown().await;

    Ok(())
}
