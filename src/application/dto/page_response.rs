// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::page::{FrequencyMap, Page, PageStatus, ResultOrdering};
use crate::domain::services::result_presenter::order_results;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// 创建页面响应
#[derive(Debug, Deserialize, Serialize)]
pub struct CreatePageResponseDto {
    pub page_id: i32,
}

/// 页面详情
///
/// 结果按请求的排序方式排列；尚未完成的页面返回空结果
#[derive(Debug, Deserialize, Serialize)]
pub struct PageDetailDto {
    pub target_url: String,
    pub created_at: DateTime<FixedOffset>,
    pub status: PageStatus,
    pub results: FrequencyMap,
}

impl PageDetailDto {
    pub fn from_page(page: Page, ordering: ResultOrdering) -> Self {
        let results = order_results(page.results.as_ref(), ordering);
        Self {
            target_url: page.target_url,
            created_at: page.created_at,
            status: page.status,
            results,
        }
    }
}

/// 页面列表项，包含记录的全部字段
#[derive(Debug, Deserialize, Serialize)]
pub struct PageSummaryDto {
    pub id: i32,
    pub target_url: String,
    pub status: PageStatus,
    pub results: Option<FrequencyMap>,
    pub key: Option<String>,
    pub created_at: DateTime<FixedOffset>,
}

impl From<Page> for PageSummaryDto {
    fn from(page: Page) -> Self {
        Self {
            id: page.id,
            target_url: page.target_url,
            status: page.status,
            results: page.results,
            key: page.key,
            created_at: page.created_at,
        }
    }
}
