// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// 抓取错误类型
#[derive(Error, Debug)]
pub enum FetchError {
    /// URL 无法解析或协议不受支持
    #[error("Invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
    /// 网络、DNS 或超时错误
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// 非 2xx 响应
    #[error("Unexpected HTTP status {status} for {url}")]
    Status { status: u16, url: String },
}

impl FetchError {
    /// 是否为超时错误
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Request(e) if e.is_timeout())
    }
}

/// 页面抓取器特质
///
/// 对目标 URL 发起一次 GET 请求并返回原始响应体，不做重试
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// 抓取页面内容
    async fn fetch(&self, url: &str) -> Result<Bytes, FetchError>;

    /// 抓取器名称
    fn name(&self) -> &'static str;
}
