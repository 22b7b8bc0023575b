// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 包含的子模块：
/// - 缓存（cache）：Redis客户端，作业队列与 Worker 心跳的存储
/// - 数据库（database）：数据库连接和实体映射
/// - 健康检查（health_checkers）：队列与数据库探测的具体实现
/// - 指标（metrics）：Prometheus 导出器与业务指标
/// - 仓库实现（repositories）：领域仓库接口的具体实现
pub mod cache;
pub mod database;
pub mod health_checkers;
pub mod metrics;
pub mod repositories;
