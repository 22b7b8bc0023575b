// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::use_cases::scrape_page::ScrapePageUseCase;
use crate::infrastructure::cache::redis_client::RedisClient;
use crate::queue::job_queue::JobQueue;
use crate::workers::heartbeat::HeartbeatWorker;
use crate::workers::scrape_worker::ScrapeWorker;
use crate::workers::worker::Worker;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tokio::task::JoinHandle;
use tracing::{error, info};
use uuid::Uuid;

/// 工作管理器
pub struct WorkerManager {
    id: String,
    queue: Arc<dyn JobQueue>,
    use_case: Arc<ScrapePageUseCase>,
    poll_interval: Duration,
    handles: Vec<JoinHandle<()>>,
}

impl WorkerManager {
    pub fn new(
        queue: Arc<dyn JobQueue>,
        use_case: Arc<ScrapePageUseCase>,
        poll_interval: Duration,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            queue,
            use_case,
            poll_interval,
            handles: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// 正在运行的后台任务数量
    pub fn running(&self) -> usize {
        self.handles.iter().filter(|h| !h.is_finished()).count()
    }

    fn spawn(&mut self, worker: impl Worker + 'static) {
        let handle = tokio::spawn(async move {
            if let Err(e) = worker.run().await {
                error!("Worker {} stopped: {}", worker.name(), e);
            }
        });
        self.handles.push(handle);
    }

    /// 启动工作进程
    ///
    /// # 参数
    ///
    /// * `count` - 要启动的抓取工作器数量
    pub fn start_workers(&mut self, count: usize) {
        for _ in 0..count {
            let worker = ScrapeWorker::new(
                self.queue.clone(),
                self.use_case.clone(),
                self.poll_interval,
            );
            self.spawn(worker);
        }
        info!(manager = %self.id, count, "Scrape workers started");
    }

    /// 启动心跳任务
    pub fn start_heartbeat(&mut self, redis: RedisClient, ttl_secs: u64) {
        let heartbeat = HeartbeatWorker::new(redis, &self.id, ttl_secs);
        self.spawn(heartbeat);
    }

    /// 中止所有后台任务
    pub fn shutdown(&mut self) {
        info!("Shutting down workers...");
        for handle in self.handles.drain(..) {
            handle.abort();
        }
        info!("Workers shut down successfully");
    }

    /// 等待关闭信号并关闭工作进程
    pub async fn wait_for_shutdown(&mut self) {
        match signal::ctrl_c().await {
            Ok(()) => info!("Shutdown signal received"),
            Err(err) => error!("Unable to listen for shutdown signal: {}", err),
        }

        self.shutdown();
    }
}
