// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 队列模块
///
/// 作业分发：API 入队页面ID，Worker 出队并执行
pub mod job_queue;
