// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use chrono::Utc;
use pagestats::domain::models::page::{FrequencyMap, Page, PageStatus};
use pagestats::domain::repositories::page_repository::{PageRepository, RepositoryError};
use sea_orm::DbErr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// 内存页面仓库，状态转换规则与数据库实现一致
pub struct InMemoryPageRepository {
    pages: Mutex<Vec<Page>>,
    unavailable: AtomicBool,
    fail_mark_done: AtomicBool,
}

#[allow(dead_code)]
impl InMemoryPageRepository {
    pub fn new() -> Self {
        Self {
            pages: Mutex::new(Vec::new()),
            unavailable: AtomicBool::new(false),
            fail_mark_done: AtomicBool::new(false),
        }
    }

    /// 模拟数据库不可用：所有仓库操作返回数据库错误
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// 仅让 `mark_done` 返回数据库错误
    pub fn set_fail_mark_done(&self, fail: bool) {
        self.fail_mark_done.store(fail, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), RepositoryError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(RepositoryError::Database(DbErr::Custom(
                "database unavailable".to_string(),
            )));
        }
        Ok(())
    }

    pub fn get(&self, id: i32) -> Option<Page> {
        self.pages
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    /// 直接写入一个已完成的页面
    pub async fn seed_done(&self, target_url: &str, results: &FrequencyMap) -> Page {
        let page = self.create(target_url).await.unwrap();
        self.mark_started(page.id).await.unwrap();
        self.mark_done(page.id, results, "seeded-key").await.unwrap();
        self.get(page.id).unwrap()
    }

    fn transition(
        &self,
        id: i32,
        next: PageStatus,
        apply: impl FnOnce(&mut Page),
    ) -> Result<(), RepositoryError> {
        self.check_available()?;
        let mut pages = self.pages.lock().unwrap();
        let page = pages
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepositoryError::NotFound)?;

        if !page.status.can_transition_to(next) {
            return Err(RepositoryError::InvalidTransition {
                id,
                from: page.status.to_string(),
                to: next.to_string(),
            });
        }

        page.status = next;
        apply(page);
        Ok(())
    }
}

#[async_trait]
impl PageRepository for InMemoryPageRepository {
    async fn create(&self, target_url: &str) -> Result<Page, RepositoryError> {
        self.check_available()?;
        let mut pages = self.pages.lock().unwrap();
        let page = Page {
            id: pages.len() as i32 + 1,
            target_url: target_url.to_string(),
            status: PageStatus::Pending,
            results: None,
            key: None,
            created_at: Utc::now().into(),
        };
        pages.push(page.clone());
        Ok(page)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Page>, RepositoryError> {
        self.check_available()?;
        Ok(self.get(id))
    }

    async fn list(&self) -> Result<Vec<Page>, RepositoryError> {
        self.check_available()?;
        Ok(self.pages.lock().unwrap().clone())
    }

    async fn mark_started(&self, id: i32) -> Result<(), RepositoryError> {
        self.transition(id, PageStatus::Started, |_| {})
    }

    async fn mark_done(
        &self,
        id: i32,
        results: &FrequencyMap,
        key: &str,
    ) -> Result<(), RepositoryError> {
        if self.fail_mark_done.load(Ordering::SeqCst) {
            return Err(RepositoryError::Database(DbErr::Custom(
                "connection reset".to_string(),
            )));
        }
        self.transition(id, PageStatus::Done, |page| {
            page.results = Some(results.clone());
            page.key = Some(key.to_string());
        })
    }

    async fn mark_failed(&self, id: i32) -> Result<(), RepositoryError> {
        self.transition(id, PageStatus::Failed, |_| {})
    }
}
