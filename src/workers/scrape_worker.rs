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

use crate::application::use_cases::scrape_page::{JobError, ScrapePageUseCase};
use crate::queue::job_queue::JobQueue;
use crate::utils::errors::WorkerError;
use crate::workers::worker::Worker;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{error, info, warn};
use uuid::Uuid;

/// 抓取工作者
///
/// 循环出队页面ID并交给作业执行器；队列为空、队列出错或仓库出错时休眠一个轮询间隔
pub struct ScrapeWorker {
    queue: Arc<dyn JobQueue>,
    use_case: Arc<ScrapePageUseCase>,
    poll_interval: Duration,
    worker_id: Uuid,
    name: String,
}

impl ScrapeWorker {
    /// 创建新的抓取工作器实例
    pub fn new(
        queue: Arc<dyn JobQueue>,
        use_case: Arc<ScrapePageUseCase>,
        poll_interval: Duration,
    ) -> Self {
        let worker_id = Uuid::new_v4();
        Self {
            queue,
            use_case,
            poll_interval,
            worker_id,
            name: format!("scrape-worker-{}", worker_id),
        }
    }

    /// 处理一个作业
    ///
    /// 作业成功或以页面终态结束时确认；仓库错误（如数据库不可用）时
    /// 把作业放回队列，页面保持原状态等待重新投递
    ///
    /// # 返回值
    ///
    /// * `Ok(true)` - 成功处理了一个作业
    /// * `Ok(false)` - 队列为空
    /// * `Err(WorkerError)` - 出队失败或作业失败
    pub async fn process_next_job(&self) -> Result<bool, WorkerError> {
        let Some(delivery) = self.queue.dequeue().await? else {
            return Ok(false);
        };
        let page_id = delivery.page_id;

        info!(worker = %self.worker_id, page_id, "Processing scrape job");
        let outcome = self.use_case.run(page_id).await;

        if let Err(JobError::Repository(e)) = &outcome {
            warn!(worker = %self.worker_id, page_id, "Requeueing job after repository error: {}", e);
            self.queue.requeue(&delivery).await?;
        } else {
            self.queue.ack(&delivery).await?;
        }

        outcome?;
        Ok(true)
    }
}

#[async_trait]
impl Worker for ScrapeWorker {
    async fn run(&self) -> Result<(), WorkerError> {
        info!("Scrape worker {} started", self.worker_id);

        loop {
            match self.process_next_job().await {
                Ok(true) => {}
                Ok(false) => sleep(self.poll_interval).await,
                // The job was requeued; back off until the store recovers
                Err(WorkerError::Job(JobError::Repository(e))) => {
                    error!(worker = %self.worker_id, "Scrape job interrupted: {}", e);
                    sleep(self.poll_interval).await;
                }
                // The page is already FAILED; move on to the next job
                Err(WorkerError::Job(e)) => {
                    error!(worker = %self.worker_id, "Scrape job failed: {}", e);
                }
                Err(e) => {
                    error!(worker = %self.worker_id, "Error processing job: {}", e);
                    sleep(self.poll_interval).await;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
