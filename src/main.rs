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


use pagestats::application::use_cases::create_page::CreatePageUseCase;
use pagestats::config::settings::Settings;
use pagestats::domain::repositories::page_repository::PageRepository;
use pagestats::domain::services::health_service::HealthService;
use pagestats::infrastructure::cache::redis_client::RedisClient;
use pagestats::infrastructure::database::connection;
use pagestats::infrastructure::health_checkers::{PostgresHealthChecker, QueueHealthChecker};
use pagestats::infrastructure::metrics;
use pagestats::infrastructure::repositories::page_repo_impl::PageRepositoryImpl;
use pagestats::presentation::routes;
use pagestats::queue::job_queue::{JobQueue, RedisJobQueue};
use pagestats::utils::telemetry;
use pagestats::workers::heartbeat::heartbeat_pattern;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting pagestats API...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    metrics::init_metrics(&settings.metrics);

    // 3. Connect to database and apply migrations
    let db = Arc::new(connection::connect_and_migrate(&settings.database).await?);
    info!("Database connection established");

    // 4. Broker
    let redis_client = RedisClient::new(&settings.redis.url)?;
    let queue: Arc<dyn JobQueue> = Arc::new(RedisJobQueue::new(
        redis_client.clone(),
        settings.queue.name.clone(),
    ));
    info!("Job queue '{}' ready", settings.queue.name);

    // 5. Components
    let repository: Arc<dyn PageRepository> = Arc::new(PageRepositoryImpl::new(db.clone()));
    let create_page = Arc::new(CreatePageUseCase::new(repository.clone(), queue));
    let health = Arc::new(HealthService::new(
        Arc::new(QueueHealthChecker::new(
            redis_client,
            heartbeat_pattern(),
            settings.health.require_worker_heartbeat,
        )),
        Arc::new(PostgresHealthChecker::new(db)),
        Duration::from_millis(settings.health.probe_timeout_ms),
    ));

    // 6. Start HTTP server
    let app = routes::app(repository, create_page, health);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Unable to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}
