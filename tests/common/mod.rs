//! 集成测试共享工具模块
//!
//! 提供测试图、随机图生成与参照实现，供所有集成测试使用

#![allow(dead_code)]

pub mod assertions;
pub mod data_fixtures;

use std::sync::Arc;

use graphpath::common::ThreadPool;
use graphpath::BellmanFord;

/// 创建使用指定线程数的 Bellman-Ford 求解器
pub fn bellman_ford(threads: usize) -> BellmanFord {
    BellmanFord::new(Arc::new(ThreadPool::new(threads)))
}
