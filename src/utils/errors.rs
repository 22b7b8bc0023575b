// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::use_cases::scrape_page::JobError;
use crate::queue::job_queue::QueueError;
use thiserror::Error;

/// Worker错误类型
#[derive(Error, Debug)]
pub enum WorkerError {
    #[error("队列错误: {0}")]
    Queue(#[from] QueueError),

    #[error("作业错误: {0}")]
    Job(#[from] JobError),

    #[error("心跳写入失败: {0}")]
    Heartbeat(String),
}
