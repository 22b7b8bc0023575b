// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

/// 设置为 `json` 时输出结构化 JSON 日志
pub const LOG_FORMAT_ENV: &str = "PAGESTATS_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info,pagestats=debug";

/// 初始化全局 tracing 订阅者
///
/// 过滤规则取自 `RUST_LOG`，未设置时使用 `info,pagestats=debug`
pub fn init_telemetry() {
    let json = std::env::var(LOG_FORMAT_ENV)
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let fmt_layer = if json {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .init();
}
