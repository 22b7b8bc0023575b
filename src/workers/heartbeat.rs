// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::infrastructure::cache::redis_client::RedisClient;
use crate::utils::errors::WorkerError;
use crate::workers::worker::Worker;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

pub const HEARTBEAT_KEY_PREFIX: &str = "pagestats:workers:";

/// 匹配所有 Worker 心跳键的模式
pub fn heartbeat_pattern() -> String {
    format!("{}*", HEARTBEAT_KEY_PREFIX)
}

pub fn heartbeat_key(manager_id: &str) -> String {
    format!("{}{}", HEARTBEAT_KEY_PREFIX, manager_id)
}

/// 刷新间隔为 TTL 的三分之一，至少一秒
pub fn refresh_interval(ttl_secs: u64) -> Duration {
    Duration::from_secs((ttl_secs / 3).max(1))
}

/// Worker 心跳
///
/// 周期性写入带 TTL 的心跳键，进程退出后键自然过期
pub struct HeartbeatWorker {
    redis: RedisClient,
    key: String,
    ttl_secs: u64,
}

impl HeartbeatWorker {
    pub fn new(redis: RedisClient, manager_id: &str, ttl_secs: u64) -> Self {
        Self {
            redis,
            key: heartbeat_key(manager_id),
            ttl_secs: ttl_secs.max(1),
        }
    }

    /// 写入一次心跳
    pub async fn beat(&self) -> Result<(), WorkerError> {
        let timestamp = chrono::Utc::now().to_rfc3339();
        self.redis
            .set_ex(&self.key, &timestamp, self.ttl_secs)
            .await
            .map_err(|e| WorkerError::Heartbeat(e.to_string()))
    }
}

#[async_trait]
impl Worker for HeartbeatWorker {
    async fn run(&self) -> Result<(), WorkerError> {
        let mut interval = tokio::time::interval(refresh_interval(self.ttl_secs));

        loop {
            interval.tick().await;
            match self.beat().await {
                Ok(()) => debug!(key = %self.key, "Heartbeat written"),
                Err(e) => warn!("{}", e),
            }
        }
    }

    fn name(&self) -> &str {
        "heartbeat"
    }
}
