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

use crate::domain::repositories::page_repository::{PageRepository, RepositoryError};
use crate::domain::services::page_statistics::{PageStatisticsService, ScrapeError};
use crate::infrastructure::metrics::record_job;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

/// 作业执行错误
#[derive(Error, Debug)]
pub enum JobError {
    #[error("Page {0} not found")]
    PageNotFound(i32),
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
    #[error("Scrape failed: {0}")]
    Scrape(#[from] ScrapeError),
}

/// 抓取作业执行器
///
/// 页面状态唯一的修改者：先标记 STARTED，再根据流水线结果
/// 标记 DONE（同时写入结果和完成令牌）或 FAILED
pub struct ScrapePageUseCase {
    repository: Arc<dyn PageRepository>,
    statistics: Arc<PageStatisticsService>,
}

impl ScrapePageUseCase {
    pub fn new(repository: Arc<dyn PageRepository>, statistics: Arc<PageStatisticsService>) -> Self {
        Self {
            repository,
            statistics,
        }
    }

    /// 执行一个页面的抓取作业
    ///
    /// 已处于终态的页面（重复投递）直接确认，不修改记录
    #[instrument(skip(self))]
    pub async fn run(&self, page_id: i32) -> Result<(), JobError> {
        let page = self
            .repository
            .find_by_id(page_id)
            .await?
            .ok_or(JobError::PageNotFound(page_id))?;

        if page.is_terminal() {
            info!(status = %page.status, "Page already finished, skipping redelivered job");
            return Ok(());
        }

        self.repository.mark_started(page_id).await?;
        let started = Instant::now();

        match self
            .statistics
            .get_page_text_statistics(&page.target_url)
            .await
        {
            Ok(results) => {
                let key = Uuid::new_v4().to_string();
                if let Err(e) = self.repository.mark_done(page_id, &results, &key).await {
                    error!("Failed to store results: {}", e);
                    // Leave STARTED only if FAILED cannot be written either
                    match self.repository.mark_failed(page_id).await {
                        Ok(()) => record_job("failed", started.elapsed()),
                        Err(fail_err) => warn!("Failed to mark page as failed: {}", fail_err),
                    }
                    return Err(e.into());
                }
                record_job("done", started.elapsed());
                info!(distinct_words = results.len(), "Page scraped");
                Ok(())
            }
            Err(e) => {
                error!(target_url = %page.target_url, "Scrape failed: {}", e);
                self.repository.mark_failed(page_id).await?;
                record_job("failed", started.elapsed());
                Err(e.into())
            }
        }
    }
}
