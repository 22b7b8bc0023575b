// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// - 页面（page）：一个抓取作业的记录、状态以及结果排序方式
pub mod page;
