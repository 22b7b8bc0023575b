// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::infrastructure::cache::redis_client::RedisClient;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use redis::Direction;
use tracing::{debug, warn};

/// 队列错误类型
#[derive(Error, Debug)]
pub enum QueueError {
    /// 消息代理错误
    #[error("Broker error: {0}")]
    Broker(#[from] redis::RedisError),

    /// 无法解析的消息
    #[error("Invalid job payload '{payload}': {reason}")]
    InvalidPayload { payload: String, reason: String },
}

/// 作业消息
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobMessage {
    pub page_id: i32,
}

impl JobMessage {
    pub fn encode(&self) -> String {
        serde_json::json!({ "page_id": self.page_id }).to_string()
    }

    pub fn decode(payload: &str) -> Result<Self, QueueError> {
        serde_json::from_str(payload).map_err(|e| QueueError::InvalidPayload {
            payload: payload.to_string(),
            reason: e.to_string(),
        })
    }
}

/// 已出队、尚未确认的作业
///
/// 保留原始消息内容，确认时按内容从处理中列表删除
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub page_id: i32,
    payload: String,
}

impl Delivery {
    pub fn new(page_id: i32) -> Self {
        Self {
            page_id,
            payload: JobMessage { page_id }.encode(),
        }
    }

    fn from_payload(payload: String) -> Result<Self, QueueError> {
        let message = JobMessage::decode(&payload)?;
        Ok(Self {
            page_id: message.page_id,
            payload,
        })
    }

    /// 队列中的原始消息
    pub fn payload(&self) -> &str {
        &self.payload
    }
}

/// 作业队列特质
///
/// 至少一次投递：出队的作业先进入处理中列表，只有 `ack` 之后才会删除。
/// 未确认的作业可以通过 `requeue` 或 `recover_in_flight` 重新投递
#[async_trait]
pub trait JobQueue: Send + Sync {
    /// 入队作业
    async fn enqueue(&self, page_id: i32) -> Result<(), QueueError>;

    /// 出队作业并移入处理中列表，队列为空时返回 `Ok(None)`
    async fn dequeue(&self) -> Result<Option<Delivery>, QueueError>;

    /// 确认作业已处理，从处理中列表删除
    async fn ack(&self, delivery: &Delivery) -> Result<(), QueueError>;

    /// 把作业从处理中列表放回队列尾部，等待重新投递
    async fn requeue(&self, delivery: &Delivery) -> Result<(), QueueError>;

    /// 把处理中列表遗留的作业（Worker 退出时未确认）放回队列头部
    ///
    /// # 返回值
    ///
    /// * `Ok(usize)` - 放回的作业数量
    async fn recover_in_flight(&self) -> Result<usize, QueueError>;
}

/// 基于 Redis 列表的作业队列
///
/// `LPUSH` 入队，`LMOVE` 出队到 `<queue>:processing`，先进先出
#[derive(Clone)]
pub struct RedisJobQueue {
    redis: RedisClient,
    queue_name: String,
    processing_name: String,
}

impl RedisJobQueue {
    pub fn new(redis: RedisClient, queue_name: impl Into<String>) -> Self {
        let queue_name = queue_name.into();
        Self {
            redis,
            processing_name: processing_list_name(&queue_name),
            queue_name,
        }
    }
}

/// 处理中列表的键名
pub fn processing_list_name(queue_name: &str) -> String {
    format!("{}:processing", queue_name)
}

#[async_trait]
impl JobQueue for RedisJobQueue {
    async fn enqueue(&self, page_id: i32) -> Result<(), QueueError> {
        let payload = JobMessage { page_id }.encode();
        let depth = self.redis.lpush(&self.queue_name, &payload).await?;
        debug!(page_id, depth, queue = %self.queue_name, "Job enqueued");
        Ok(())
    }

    async fn dequeue(&self) -> Result<Option<Delivery>, QueueError> {
        let moved = self
            .redis
            .lmove(
                &self.queue_name,
                &self.processing_name,
                Direction::Right,
                Direction::Left,
            )
            .await?;
        let Some(payload) = moved else {
            return Ok(None);
        };

        match Delivery::from_payload(payload.clone()) {
            Ok(delivery) => Ok(Some(delivery)),
            Err(e) => {
                // Unparseable messages would be recovered forever; drop them here
                self.redis.lrem(&self.processing_name, &payload).await?;
                Err(e)
            }
        }
    }

    async fn ack(&self, delivery: &Delivery) -> Result<(), QueueError> {
        let removed = self
            .redis
            .lrem(&self.processing_name, delivery.payload())
            .await?;
        if removed == 0 {
            warn!(page_id = delivery.page_id, "Acknowledged job was not in flight");
        }
        Ok(())
    }

    async fn requeue(&self, delivery: &Delivery) -> Result<(), QueueError> {
        self.redis
            .lrem_lpush(&self.processing_name, &self.queue_name, delivery.payload())
            .await?;
        debug!(page_id = delivery.page_id, queue = %self.queue_name, "Job requeued");
        Ok(())
    }

    async fn recover_in_flight(&self) -> Result<usize, QueueError> {
        let mut recovered = 0;
        while self
            .redis
            .lmove(
                &self.processing_name,
                &self.queue_name,
                Direction::Right,
                Direction::Right,
            )
            .await?
            .is_some()
        {
            recovered += 1;
        }
        Ok(recovered)
    }
}

#[async_trait]
impl<T: JobQueue + ?Sized> JobQueue for Arc<T> {
    async fn enqueue(&self, page_id: i32) -> Result<(), QueueError> {
        (**self).enqueue(page_id).await
    }

    async fn dequeue(&self) -> Result<Option<Delivery>, QueueError> {
        (**self).dequeue().await
    }

    async fn ack(&self, delivery: &Delivery) -> Result<(), QueueError> {
        (**self).ack(delivery).await
    }

    async fn requeue(&self, delivery: &Delivery) -> Result<(), QueueError> {
        (**self).requeue(delivery).await
    }

    async fn recover_in_flight(&self) -> Result<usize, QueueError> {
        (**self).recover_in_flight().await
    }
}
