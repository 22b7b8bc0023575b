// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

pub const HEALTHY: &str = "HEALTHY";
pub const UNHEALTHY: &str = "UNHEALTHY";

/// 健康检查器特质
///
/// 实现者自行吞掉内部错误，只返回是否健康
#[async_trait]
pub trait HealthChecker: Send + Sync {
    async fn is_healthy(&self) -> bool;

    fn name(&self) -> &'static str;
}

/// 将探测结果转换为状态字符串
pub type HealthStatusParser = fn(bool) -> &'static str;

/// 默认状态解析：`HEALTHY` / `UNHEALTHY`
pub fn parse_health_boolean(healthy: bool) -> &'static str {
    if healthy {
        HEALTHY
    } else {
        UNHEALTHY
    }
}

/// 健康报告
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    /// 任务队列及 Worker
    pub celery: String,
    /// 数据库
    pub postgres: String,
}

/// 健康检查服务
pub struct HealthService {
    queue: Arc<dyn HealthChecker>,
    database: Arc<dyn HealthChecker>,
    probe_timeout: Duration,
    parser: HealthStatusParser,
}

impl HealthService {
    pub fn new(
        queue: Arc<dyn HealthChecker>,
        database: Arc<dyn HealthChecker>,
        probe_timeout: Duration,
    ) -> Self {
        Self {
            queue,
            database,
            probe_timeout,
            parser: parse_health_boolean,
        }
    }

    /// 替换状态解析函数
    pub fn with_parser(mut self, parser: HealthStatusParser) -> Self {
        self.parser = parser;
        self
    }

    /// 并发执行两项探测，单项超时视为不健康
    pub async fn check(&self) -> HealthReport {
        let (queue_ok, database_ok) = tokio::join!(
            probe(self.queue.as_ref(), self.probe_timeout),
            probe(self.database.as_ref(), self.probe_timeout),
        );

        HealthReport {
            celery: (self.parser)(queue_ok).to_string(),
            postgres: (self.parser)(database_ok).to_string(),
        }
    }
}

async fn probe(checker: &dyn HealthChecker, timeout: Duration) -> bool {
    match tokio::time::timeout(timeout, checker.is_healthy()).await {
        Ok(healthy) => {
            if !healthy {
                warn!(checker = checker.name(), "Health probe failed");
            }
            healthy
        }
        Err(_) => {
            warn!(
                checker = checker.name(),
                timeout_ms = timeout.as_millis() as u64,
                "Health probe timed out"
            );
            false
        }
    }
}
