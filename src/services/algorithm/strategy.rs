//! 最短路径策略
//!
//! 为两种算法提供统一接口，调用方可在运行时切换

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::common::ThreadPool;
use crate::core::{Cost, PathResult};
use crate::graph::{Graph, NodeId};
use crate::services::algorithm::bellman_ford::BellmanFord;
use crate::services::algorithm::dijkstra::Dijkstra;
use crate::services::algorithm::tree::ShortestPathTree;

/// 单源最短路径策略
pub trait PathStrategy<C: Cost>: Send + Sync {
    fn name(&self) -> &'static str;

    /// 计算从起点到所有节点的最短路径
    fn solve(&self, graph: &Arc<Graph<C>>, source: NodeId) -> PathResult<ShortestPathTree<C>>;

    /// 查找从起点到目标节点的最短路径与代价
    fn shortest_path(
        &self,
        graph: &Arc<Graph<C>>,
        source: NodeId,
        target: NodeId,
    ) -> PathResult<(Vec<NodeId>, C)> {
        graph.check_range(target)?;
        Ok(self.solve(graph, source)?.shortest_path(target))
    }
}

impl<C: Cost> PathStrategy<C> for Dijkstra {
    fn name(&self) -> &'static str {
        "dijkstra"
    }

    fn solve(&self, graph: &Arc<Graph<C>>, source: NodeId) -> PathResult<ShortestPathTree<C>> {
        Dijkstra::shortest_paths(graph.as_ref(), source)
    }
}

impl<C: Cost> PathStrategy<C> for BellmanFord {
    fn name(&self) -> &'static str {
        "bellman-ford"
    }

    fn solve(&self, graph: &Arc<Graph<C>>, source: NodeId) -> PathResult<ShortestPathTree<C>> {
        self.shortest_paths(graph, source)
    }
}

/// 可选算法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// 要求边权非负
    #[default]
    Dijkstra,
    /// 支持负权边，由线程池并发松弛
    BellmanFord,
}

impl Algorithm {
    /// 构建策略；Dijkstra 不使用线程池
    pub fn strategy<C: Cost>(self, pool: &Arc<ThreadPool>) -> Box<dyn PathStrategy<C>> {
        match self {
            Algorithm::Dijkstra => Box::new(Dijkstra),
            Algorithm::BellmanFord => Box::new(BellmanFord::new(Arc::clone(pool))),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Dijkstra => write!(f, "dijkstra"),
            Algorithm::BellmanFord => write!(f, "bellman-ford"),
        }
    }
}
