// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::services::health_service::HealthChecker;
use crate::infrastructure::cache::redis_client::RedisClient;
use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use std::sync::Arc;
use tracing::{debug, warn};

/// 数据库健康检查：执行 `SELECT 1`
pub struct PostgresHealthChecker {
    db: Arc<DatabaseConnection>,
}

impl PostgresHealthChecker {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl HealthChecker for PostgresHealthChecker {
    async fn is_healthy(&self) -> bool {
        let backend = self.db.get_database_backend();
        match self
            .db
            .execute(Statement::from_string(backend, "SELECT 1"))
            .await
        {
            Ok(_) => true,
            Err(e) => {
                warn!("Database health probe failed: {}", e);
                false
            }
        }
    }

    fn name(&self) -> &'static str {
        "postgres"
    }
}

/// 队列健康检查
///
/// Redis 可达，并且（可选）至少存在一个 Worker 心跳
pub struct QueueHealthChecker {
    redis: RedisClient,
    heartbeat_pattern: String,
    require_worker_heartbeat: bool,
}

impl QueueHealthChecker {
    pub fn new(redis: RedisClient, heartbeat_pattern: String, require_worker_heartbeat: bool) -> Self {
        Self {
            redis,
            heartbeat_pattern,
            require_worker_heartbeat,
        }
    }
}

#[async_trait]
impl HealthChecker for QueueHealthChecker {
    async fn is_healthy(&self) -> bool {
        if let Err(e) = self.redis.ping().await {
            warn!("Broker health probe failed: {}", e);
            return false;
        }

        if !self.require_worker_heartbeat {
            return true;
        }

        match self.redis.count_keys(&self.heartbeat_pattern).await {
            Ok(0) => {
                debug!("No worker heartbeat found");
                false
            }
            Ok(_) => true,
            Err(e) => {
                warn!("Worker heartbeat lookup failed: {}", e);
                false
            }
        }
    }

    fn name(&self) -> &'static str {
        "celery"
    }
}
