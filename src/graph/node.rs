//! 图节点
//!
//! 节点只保存邻居的编号，不持有邻居本身，所有节点归 `Graph` 所有

use crate::core::Cost;

/// 节点编号，与节点在图中的位置一致，取值为 `0..N-1`
pub type NodeId = usize;

/// 有向边：目标节点编号与边权
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<C> {
    pub to: NodeId,
    pub cost: C,
}

/// 图节点
#[derive(Debug, Clone)]
pub struct Node<C> {
    id: NodeId,
    neighbors: Vec<Edge<C>>,
}

impl<C: Cost> Node<C> {
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            neighbors: Vec::new(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// 追加一条出边，保持插入顺序
    pub fn add_neighbor(&mut self, to: NodeId, cost: C) {
        self.neighbors.push(Edge { to, cost });
    }

    pub fn neighbors(&self) -> &[Edge<C>] {
        &self.neighbors
    }

    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }
}
