// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::page_request::CreatePageRequestDto;
use crate::domain::models::page::Page;
use crate::domain::repositories::page_repository::{PageRepository, RepositoryError};
use crate::infrastructure::metrics::record_page_created;
use crate::queue::job_queue::{JobQueue, QueueError};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};
use validator::{Validate, ValidationErrors};

#[derive(Error, Debug)]
pub enum CreatePageError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
    #[error("Failed to enqueue job for page {page_id}: {source}")]
    Enqueue {
        page_id: i32,
        #[source]
        source: QueueError,
    },
}

/// 创建页面用例
///
/// 页面以 PENDING 状态写入后立即入队；入队失败时页面保持 PENDING
pub struct CreatePageUseCase {
    repository: Arc<dyn PageRepository>,
    queue: Arc<dyn JobQueue>,
}

impl CreatePageUseCase {
    pub fn new(repository: Arc<dyn PageRepository>, queue: Arc<dyn JobQueue>) -> Self {
        Self { repository, queue }
    }

    pub async fn execute(&self, dto: CreatePageRequestDto) -> Result<Page, CreatePageError> {
        dto.validate()?;

        let page = self.repository.create(&dto.target_url).await?;
        record_page_created();

        if let Err(source) = self.queue.enqueue(page.id).await {
            error!(page_id = page.id, "Failed to enqueue scrape job: {}", source);
            return Err(CreatePageError::Enqueue {
                page_id: page.id,
                source,
            });
        }

        info!(page_id = page.id, target_url = %page.target_url, "Page created");
        Ok(page)
    }
}
