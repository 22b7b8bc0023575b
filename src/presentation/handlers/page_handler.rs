// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::page_request::{CreatePageRequestDto, PageQueryDto};
use crate::application::dto::page_response::{
    CreatePageResponseDto, PageDetailDto, PageSummaryDto,
};
use crate::application::use_cases::create_page::CreatePageUseCase;
use crate::domain::repositories::page_repository::{PageRepository, RepositoryError};
use crate::presentation::errors::AppError;
use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

/// 创建页面并入队抓取作业
pub async fn create_page(
    Extension(use_case): Extension<Arc<CreatePageUseCase>>,
    Json(payload): Json<CreatePageRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let page = use_case.execute(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatePageResponseDto { page_id: page.id }),
    ))
}

/// 列出全部页面
pub async fn list_pages(
    Extension(repository): Extension<Arc<dyn PageRepository>>,
) -> Result<Json<Vec<PageSummaryDto>>, AppError> {
    let pages = repository.list().await?;

    Ok(Json(pages.into_iter().map(PageSummaryDto::from).collect()))
}

/// 获取单个页面，结果按 `ordering` 排列
pub async fn get_page(
    Extension(repository): Extension<Arc<dyn PageRepository>>,
    Path(page_id): Path<i32>,
    Query(query): Query<PageQueryDto>,
) -> Result<Json<PageDetailDto>, AppError> {
    let page = repository
        .find_by_id(page_id)
        .await?
        .ok_or(RepositoryError::NotFound)?;

    Ok(Json(PageDetailDto::from_page(page, query.ordering)))
}
