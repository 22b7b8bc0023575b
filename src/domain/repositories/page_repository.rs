// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::page::{FrequencyMap, Page};
use async_trait::async_trait;
use sea_orm::DbErr;
use thiserror::Error;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// 记录未找到
    #[error("Page not found")]
    NotFound,
    /// 当前状态不允许该转换
    #[error("Invalid state transition for page {id}: {from} -> {to}")]
    InvalidTransition {
        id: i32,
        from: String,
        to: String,
    },
    /// 结果序列化失败
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// 页面仓库特质
///
/// 负责 page 表的全部读写。状态转换以仓库操作的形式提供，
/// 每个转换都是一条带源状态条件的 UPDATE。
#[async_trait]
pub trait PageRepository: Send + Sync {
    /// 以 PENDING 状态创建页面
    async fn create(&self, target_url: &str) -> Result<Page, RepositoryError>;
    /// 根据ID查找页面，不存在时返回 `Ok(None)`
    async fn find_by_id(&self, id: i32) -> Result<Option<Page>, RepositoryError>;
    /// 按ID升序列出全部页面
    async fn list(&self) -> Result<Vec<Page>, RepositoryError>;
    /// 标记页面已开始
    async fn mark_started(&self, id: i32) -> Result<(), RepositoryError>;
    /// 标记页面已完成，同时写入结果和完成令牌
    async fn mark_done(
        &self,
        id: i32,
        results: &FrequencyMap,
        key: &str,
    ) -> Result<(), RepositoryError>;
    /// 标记页面已失败
    async fn mark_failed(&self, id: i32) -> Result<(), RepositoryError>;
}
