// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 用例模块
///
/// - 创建页面（create_page）：持久化页面并入队作业
/// - 执行抓取（scrape_page）：驱动单个页面完成抓取与状态流转
pub mod create_page;
pub mod scrape_page;
