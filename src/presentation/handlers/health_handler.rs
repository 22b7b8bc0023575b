// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::services::health_service::{HealthReport, HealthService};
use axum::{extract::Extension, Json};
use std::sync::Arc;

/// 健康检查端点
///
/// 始终返回 200，探测失败体现在各项状态中
pub async fn health_check(Extension(service): Extension<Arc<HealthService>>) -> Json<HealthReport> {
    Json(service.check().await)
}
