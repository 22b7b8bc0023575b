// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::ScraperSettings;
use crate::domain::models::page::FrequencyMap;
use crate::domain::services::frequency_counter::count_word_frequencies;
use crate::domain::services::text_extractor::TextExtractor;
use crate::domain::services::token_filters::FilterChain;
use crate::engines::traits::{FetchError, PageFetcher};
use crate::utils::text_encoding::{decode_text, TextDecodeError};
use std::sync::Arc;
use thiserror::Error;

/// 页面统计错误类型
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// 抓取失败
    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),
    /// 响应内容无法解码
    #[error("Parse failed: {0}")]
    Parse(#[from] TextDecodeError),
}

/// 页面统计服务
///
/// 抓取 URL → 解码 → 提取可见文本 → 过滤词语 → 统计词频。
/// 各步骤严格顺序执行，失败时不产生任何部分结果。
pub struct PageStatisticsService {
    fetcher: Arc<dyn PageFetcher>,
    extractor: TextExtractor,
    filters: FilterChain,
}

impl PageStatisticsService {
    pub fn new(fetcher: Arc<dyn PageFetcher>, extractor: TextExtractor, filters: FilterChain) -> Self {
        Self {
            fetcher,
            extractor,
            filters,
        }
    }

    /// 使用默认的不可见标签集合与数字过滤器
    pub fn with_defaults(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self::new(
            fetcher,
            TextExtractor::default(),
            FilterChain::with_default_filters(),
        )
    }

    /// 根据抓取配置构建
    pub fn from_settings(fetcher: Arc<dyn PageFetcher>, settings: &ScraperSettings) -> Self {
        Self::new(
            fetcher,
            TextExtractor::new(settings.invisible_tags.iter().cloned()),
            FilterChain::from_kinds(&settings.token_filters),
        )
    }

    /// 抓取页面并计算词频
    pub async fn get_page_text_statistics(&self, url: &str) -> Result<FrequencyMap, ScrapeError> {
        let body = self.fetcher.fetch(url).await?;
        self.compute_statistics(&body)
    }

    /// 对已获取的响应体计算词频
    pub fn compute_statistics(&self, body: &[u8]) -> Result<FrequencyMap, ScrapeError> {
        let html = decode_text(body)?;
        let text = self.extractor.parse(&html);

        Ok(count_word_frequencies(
            text.tokens().filter(|token| self.filters.keep(token)),
        ))
    }
}
