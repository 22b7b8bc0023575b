// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - 文本提取（text_extractor）：解析 HTML 并产出可见文本中的词语
/// - 词语过滤（token_filters）：基于谓词的可配置过滤链
/// - 词频统计（frequency_counter）：将词语序列聚合为词频映射
/// - 页面统计（page_statistics）：抓取、解码、提取、过滤、计数的完整流水线
/// - 结果排序（result_presenter）：读取时按指定方式排列词频结果
/// - 健康检查（health_service）：并发探测队列与数据库
pub mod frequency_counter;
pub mod health_service;
pub mod page_statistics;
pub mod result_presenter;
pub mod text_extractor;
pub mod token_filters;
