// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use bytes::Bytes;
use pagestats::engines::traits::{FetchError, PageFetcher};
use std::collections::HashMap;

/// 按 URL 返回预设内容的抓取器，未登记的 URL 返回 404
#[derive(Default)]
pub struct StubFetcher {
    pages: HashMap<String, Bytes>,
}

#[allow(dead_code)]
impl StubFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, body: impl Into<Bytes>) -> Self {
        self.pages.insert(url.to_string(), body.into());
        self
    }
}

#[async_trait]
impl PageFetcher for StubFetcher {
    async fn fetch(&self, url: &str) -> Result<Bytes, FetchError> {
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Status {
                status: 404,
                url: url.to_string(),
            })
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}
