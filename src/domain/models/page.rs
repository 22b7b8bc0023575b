// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 词频映射
///
/// 词语到出现次数的映射，迭代顺序为词语首次出现的顺序
pub type FrequencyMap = IndexMap<String, u64>;

/// 页面实体
///
/// 表示一个抓取作业：目标URL、状态、词频结果和完成令牌。
/// 实体本身不具备持久化行为，状态流转由页面仓库负责。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// 页面唯一标识符，由数据库自增生成
    pub id: i32,
    /// 目标URL，由调用方提供，创建后不可变
    pub target_url: String,
    /// 页面状态
    pub status: PageStatus,
    /// 词频结果，仅在状态为 DONE 时存在
    pub results: Option<FrequencyMap>,
    /// 完成令牌，成功完成时生成
    pub key: Option<String>,
    /// 创建时间
    pub created_at: DateTime<FixedOffset>,
}

impl Page {
    /// 页面是否已处于终态
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}

/// 页面状态枚举
///
/// 状态转换遵循以下流程：
/// Pending → Started → Done/Failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PageStatus {
    /// 已创建，作业尚未开始
    #[default]
    Pending,
    /// 作业正在执行
    Started,
    /// 作业成功完成，结果已写入
    Done,
    /// 作业失败
    Failed,
}

impl PageStatus {
    /// 是否为终态
    pub fn is_terminal(self) -> bool {
        matches!(self, PageStatus::Done | PageStatus::Failed)
    }

    /// 允许转换到 `next` 的源状态集合
    ///
    /// Started 可以从 Started 重新进入，用于重新投递的作业
    pub fn allowed_sources(next: PageStatus) -> &'static [PageStatus] {
        match next {
            PageStatus::Pending => &[],
            PageStatus::Started => &[PageStatus::Pending, PageStatus::Started],
            PageStatus::Done | PageStatus::Failed => &[PageStatus::Started],
        }
    }

    /// 判断当前状态是否可以转换到 `next`
    pub fn can_transition_to(self, next: PageStatus) -> bool {
        Self::allowed_sources(next).contains(&self)
    }
}

impl fmt::Display for PageStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PageStatus::Pending => write!(f, "PENDING"),
            PageStatus::Started => write!(f, "STARTED"),
            PageStatus::Done => write!(f, "DONE"),
            PageStatus::Failed => write!(f, "FAILED"),
        }
    }
}

impl FromStr for PageStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(PageStatus::Pending),
            "STARTED" => Ok(PageStatus::Started),
            "DONE" => Ok(PageStatus::Done),
            "FAILED" => Ok(PageStatus::Failed),
            _ => Err(()),
        }
    }
}

/// 结果排序方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultOrdering {
    /// 保持存储顺序
    #[default]
    Unordered,
    /// 按出现次数降序，次数相同时按词语升序
    Frequency,
    /// 按词语升序
    Alphabetical,
}

impl ResultOrdering {
    /// 解析排序参数，大小写不敏感，无法识别时退回 Unordered
    pub fn parse_lenient(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "frequency" => ResultOrdering::Frequency,
            "alphabetical" => ResultOrdering::Alphabetical,
            _ => ResultOrdering::Unordered,
        }
    }
}

impl<'de> Deserialize<'de> for ResultOrdering {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(ResultOrdering::parse_lenient(&value))
    }
}
