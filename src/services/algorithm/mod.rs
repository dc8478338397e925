//! 算法模块
//!
//! 包含单源最短路径的两种实现及其共享的松弛记录

pub mod bellman_ford;
pub mod dijkstra;
pub mod frontier;
pub mod record;
pub mod strategy;
pub mod tree;

// 重新导出常用算法结构体
pub use bellman_ford::BellmanFord;
pub use dijkstra::{Dijkstra, DijkstraRun, RunState};
pub use frontier::DijkstraFrontier;
pub use record::{CostTable, RelaxationRecord};
pub use strategy::{Algorithm, PathStrategy};
pub use tree::ShortestPathTree;
