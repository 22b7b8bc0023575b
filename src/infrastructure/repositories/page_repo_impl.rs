// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::page::{FrequencyMap, Page, PageStatus};
use crate::domain::repositories::page_repository::{PageRepository, RepositoryError};
use crate::infrastructure::database::entities::page;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::*;
use std::sync::Arc;

/// 页面仓库实现
#[derive(Clone)]
pub struct PageRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl PageRepositoryImpl {
    /// 创建新的页面仓库实现
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// 带源状态条件的状态更新
    ///
    /// 没有行被更新时区分记录不存在与状态不允许两种情况
    async fn transition(
        &self,
        id: i32,
        next: PageStatus,
        update: UpdateMany<page::Entity>,
    ) -> Result<(), RepositoryError> {
        let sources: Vec<String> = PageStatus::allowed_sources(next)
            .iter()
            .map(ToString::to_string)
            .collect();

        let result = update
            .col_expr(page::Column::Status, Expr::value(next.to_string()))
            .filter(page::Column::Id.eq(id))
            .filter(page::Column::Status.is_in(sources))
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected > 0 {
            return Ok(());
        }

        match self.find_by_id(id).await? {
            None => Err(RepositoryError::NotFound),
            Some(current) => Err(RepositoryError::InvalidTransition {
                id,
                from: current.status.to_string(),
                to: next.to_string(),
            }),
        }
    }
}

#[async_trait]
impl PageRepository for PageRepositoryImpl {
    async fn create(&self, target_url: &str) -> Result<Page, RepositoryError> {
        let model = page::ActiveModel {
            target_url: Set(target_url.to_string()),
            status: Set(PageStatus::Pending.to_string()),
            results: Set(None),
            key: Set(None),
            created_at: Set(Utc::now().into()),
            ..Default::default()
        };

        let created = model.insert(self.db.as_ref()).await?;
        Page::try_from(created)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Page>, RepositoryError> {
        let model = page::Entity::find_by_id(id).one(self.db.as_ref()).await?;

        model.map(Page::try_from).transpose()
    }

    async fn list(&self) -> Result<Vec<Page>, RepositoryError> {
        let models = page::Entity::find()
            .order_by_asc(page::Column::Id)
            .all(self.db.as_ref())
            .await?;

        models.into_iter().map(Page::try_from).collect()
    }

    async fn mark_started(&self, id: i32) -> Result<(), RepositoryError> {
        self.transition(id, PageStatus::Started, page::Entity::update_many())
            .await
    }

    async fn mark_done(
        &self,
        id: i32,
        results: &FrequencyMap,
        key: &str,
    ) -> Result<(), RepositoryError> {
        let results = serde_json::to_value(results)?;
        let update = page::Entity::update_many()
            .col_expr(page::Column::Results, Expr::value(results))
            .col_expr(page::Column::Key, Expr::value(key.to_string()));

        self.transition(id, PageStatus::Done, update).await
    }

    async fn mark_failed(&self, id: i32) -> Result<(), RepositoryError> {
        self.transition(id, PageStatus::Failed, page::Entity::update_many())
            .await
    }
}

impl TryFrom<page::Model> for Page {
    type Error = RepositoryError;

    fn try_from(model: page::Model) -> Result<Self, Self::Error> {
        let status = model.status.parse::<PageStatus>().map_err(|_| {
            RepositoryError::Database(DbErr::Type(format!(
                "unknown page status '{}'",
                model.status
            )))
        })?;

        let results = model
            .results
            .map(serde_json::from_value::<FrequencyMap>)
            .transpose()?;

        Ok(Self {
            id: model.id,
            target_url: model.target_url,
            status,
            results,
            key: model.key,
            created_at: model.created_at,
        })
    }
}
