// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::use_cases::create_page::CreatePageUseCase;
use crate::domain::repositories::page_repository::PageRepository;
use crate::domain::services::health_service::HealthService;
use crate::presentation::handlers::{health_handler, page_handler};
use axum::{
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// 创建应用路由
///
/// 处理器依赖通过 `Extension` 注入，见 [`app`]
pub fn routes() -> Router {
    Router::new()
        .route(
            "/pages/",
            post(page_handler::create_page).get(page_handler::list_pages),
        )
        .route("/pages/{page_id}", get(page_handler::get_page))
        .route("/health/", get(health_handler::health_check))
}

/// 组装完整的应用：路由、依赖和请求追踪
pub fn app(
    repository: Arc<dyn PageRepository>,
    create_page: Arc<CreatePageUseCase>,
    health: Arc<HealthService>,
) -> Router {
    routes()
        .layer(Extension(repository))
        .layer(Extension(create_page))
        .layer(Extension(health))
        .layer(TraceLayer::new_for_http())
}

