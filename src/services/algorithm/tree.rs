//! 最短路径树
//!
//! 一次单源计算的只读结果

use crate::core::Cost;
use crate::graph::NodeId;
use crate::services::algorithm::record::CostTable;

/// 单源最短路径结果
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathTree<C> {
    source: NodeId,
    table: CostTable<C>,
}

impl<C: Cost> ShortestPathTree<C> {
    pub fn new(source: NodeId, table: CostTable<C>) -> Self {
        Self { source, table }
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    /// 到目标节点的代价，不可达时为无穷大
    ///
    /// # Panics
    /// `target` 不小于图的节点数时 panic；入口函数已经用 `check_range` 校验过目标
    pub fn cost(&self, target: NodeId) -> C {
        self.table.cost(target)
    }

    /// # Panics
    /// 同 [`cost`](Self::cost)
    pub fn is_reachable(&self, target: NodeId) -> bool {
        self.table.cost(target).is_finite_cost()
    }

    /// # Panics
    /// 同 [`cost`](Self::cost)
    pub fn predecessor(&self, target: NodeId) -> Option<NodeId> {
        self.table.predecessor(target)
    }

    /// 从起点到目标节点的路径，不可达时只包含目标节点
    ///
    /// # Panics
    /// 同 [`cost`](Self::cost)
    pub fn path_to(&self, target: NodeId) -> Vec<NodeId> {
        self.table.reconstruct_path(target)
    }

    /// 路径与代价
    ///
    /// # Panics
    /// 同 [`cost`](Self::cost)
    pub fn shortest_path(&self, target: NodeId) -> (Vec<NodeId>, C) {
        (self.path_to(target), self.cost(target))
    }

    /// 所有节点的代价，下标即节点编号
    pub fn costs(&self) -> &[C] {
        self.table.costs()
    }

    /// 可达节点编号，升序
    pub fn reachable_nodes(&self) -> Vec<NodeId> {
        (0..self.table.len())
            .filter(|&id| self.is_reachable(id))
            .collect()
    }

    pub fn into_table(self) -> CostTable<C> {
        self.table
    }
}
