// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use redis::{AsyncCommands, Direction, RedisResult};

/// Redis客户端
///
/// 提供对Redis数据库的异步操作接口，每次调用获取一个多路复用连接
#[derive(Clone)]
pub struct RedisClient {
    /// Redis客户端
    client: redis::Client,
}

impl RedisClient {
    /// 创建新的Redis客户端实例
    ///
    /// 只校验 URL，不建立连接
    ///
    /// # 参数
    ///
    /// * `redis_url` - Redis连接URL
    pub fn new(redis_url: &str) -> RedisResult<Self> {
        let client = redis::Client::open(redis_url)?;
        Ok(Self { client })
    }

    async fn connection(&self) -> RedisResult<redis::aio::MultiplexedConnection> {
        self.client.get_multiplexed_async_connection().await
    }

    /// 发送 PING
    pub async fn ping(&self) -> RedisResult<()> {
        let mut con = self.connection().await?;
        let _: String = redis::cmd("PING").query_async(&mut con).await?;
        Ok(())
    }

    /// 从列表左侧推入一个值
    ///
    /// # 返回值
    ///
    /// * `Ok(u64)` - 推入后列表的长度
    pub async fn lpush(&self, key: &str, value: &str) -> RedisResult<u64> {
        let mut con = self.connection().await?;
        con.lpush(key, value).await
    }

    /// 设置键值对并指定过期时间
    ///
    /// # 参数
    ///
    /// * `key` - 键
    /// * `value` - 值
    /// * `ttl_seconds` - 过期时间（秒）
    pub async fn set_ex(&self, key: &str, value: &str, ttl_seconds: u64) -> RedisResult<()> {
        let mut con = self.connection().await?;
        con.set_ex::<_, _, ()>(key, value, ttl_seconds).await
    }

    /// 原子地把 `source` 一端的元素移到 `destination` 的一端
    ///
    /// `source` 为空时返回 None
    pub async fn lmove(
        &self,
        source: &str,
        destination: &str,
        from: Direction,
        to: Direction,
    ) -> RedisResult<Option<String>> {
        let mut con = self.connection().await?;
        con.lmove(source, destination, from, to).await
    }

    /// 从列表中删除一个等于 `value` 的元素
    ///
    /// # 返回值
    ///
    /// * `Ok(usize)` - 实际删除的数量
    pub async fn lrem(&self, key: &str, value: &str) -> RedisResult<usize> {
        let mut con = self.connection().await?;
        con.lrem(key, 1, value).await
    }

    /// 在一个事务中把 `value` 从 `source` 删除并推入 `destination` 左侧
    pub async fn lrem_lpush(&self, source: &str, destination: &str, value: &str) -> RedisResult<()> {
        let mut con = self.connection().await?;
        let _: () = redis::pipe()
            .atomic()
            .lrem(source, 1, value)
            .ignore()
            .lpush(destination, value)
            .ignore()
            .query_async(&mut con)
            .await?;
        Ok(())
    }

    /// 匹配模式的键数量
    ///
    /// 使用 KEYS，仅用于心跳这类数量很少的键
    pub async fn count_keys(&self, pattern: &str) -> RedisResult<usize> {
        let mut con = self.connection().await?;
        let keys: Vec<String> = con.keys(pattern).await?;
        Ok(keys.len())
    }
}
