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

use crate::config::settings::ScraperSettings;
use crate::engines::traits::{FetchError, PageFetcher};
use async_trait::async_trait;
use bytes::Bytes;
use std::time::{Duration, Instant};
use tracing::debug;
use url::Url;

/// 抓取引擎
///
/// 基于reqwest实现的HTTP抓取器，客户端在构造时创建并复用连接池
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: reqwest::Client,
}

impl ReqwestFetcher {
    /// 根据配置创建抓取器
    ///
    /// `request_timeout_secs` 为 0 时不设置请求超时
    pub fn new(settings: &ScraperSettings) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder().user_agent(settings.user_agent.as_str());

        if settings.request_timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(settings.request_timeout_secs));
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

fn parse_target(url: &str) -> Result<Url, FetchError> {
    let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(FetchError::InvalidUrl {
            url: url.to_string(),
            reason: format!("unsupported scheme '{}'", scheme),
        }),
    }
}

#[async_trait]
impl PageFetcher for ReqwestFetcher {
    /// 执行HTTP GET
    ///
    /// # 返回值
    ///
    /// * `Ok(Bytes)` - 2xx 响应的原始内容
    /// * `Err(FetchError)` - URL 无效、网络失败或非成功状态码
    async fn fetch(&self, url: &str) -> Result<Bytes, FetchError> {
        let target = parse_target(url)?;

        let start = Instant::now();
        let response = self.client.get(target).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        debug!(
            url,
            bytes = body.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Fetched page"
        );

        Ok(body)
    }

    fn name(&self) -> &'static str {
        "reqwest"
    }
}

#[cfg(test)]
#[path = "reqwest_engine_test.rs"]
mod tests;
