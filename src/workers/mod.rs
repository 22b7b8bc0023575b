// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 工作器模块
///
/// 抓取工作器循环、Worker 心跳以及工作器生命周期管理
pub mod heartbeat;
pub mod manager;
pub mod scrape_worker;
pub mod worker;

pub use worker::Worker;
