// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::page::ResultOrdering;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 创建页面请求
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct CreatePageRequestDto {
    /// 要抓取的网页URL
    #[validate(url)]
    pub target_url: String,
}

/// 页面详情查询参数
#[derive(Debug, Default, Deserialize)]
pub struct PageQueryDto {
    /// 结果排序方式，缺省为 unordered
    #[serde(default)]
    pub ordering: ResultOrdering,
}
