//! Dijkstra 前沿集合
//!
//! 记录尚未确定最短距离的节点，以及其中代价有限、可被弹出的候选节点。
//! 每个节点只会在成为最小值时被弹出一次。

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::core::Cost;
use crate::graph::NodeId;
use crate::services::algorithm::record::CostTable;

/// 候选节点，用于优先队列
#[derive(Debug, Clone, Copy)]
struct Candidate<C> {
    node: NodeId,
    cost: C,
}

impl<C: PartialOrd> Ord for Candidate<C> {
    // 反转比较得到最小堆；代价相同时编号小的优先
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl<C: PartialOrd> PartialOrd for Candidate<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: PartialOrd> PartialEq for Candidate<C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<C: PartialOrd> Eq for Candidate<C> {}

/// Dijkstra 前沿集合，不加锁
#[derive(Debug)]
pub struct DijkstraFrontier<C> {
    table: CostTable<C>,
    finalized: Vec<bool>,
    remaining: usize,
    candidates: BinaryHeap<Candidate<C>>,
}

impl<C: Cost> DijkstraFrontier<C> {
    /// 创建包含 `size` 个未确定节点的前沿
    pub fn new(size: usize) -> Self {
        Self {
            table: CostTable::new(size),
            finalized: vec![false; size],
            remaining: size,
            candidates: BinaryHeap::new(),
        }
    }

    pub fn set_cost(&mut self, id: NodeId, cost: C) {
        self.table.set_cost(id, cost);
        self.push_candidate(id, cost);
    }

    pub fn set_cost_with_predecessor(&mut self, id: NodeId, cost: C, predecessor: NodeId) {
        self.table.set_cost_with_predecessor(id, cost, predecessor);
        self.push_candidate(id, cost);
    }

    pub fn cost(&self, id: NodeId) -> C {
        self.table.cost(id)
    }

    /// 弹出代价最小的候选节点并将其标记为已确定
    ///
    /// 没有代价有限的未确定节点时返回 `None`
    pub fn pop(&mut self) -> Option<(NodeId, C)> {
        while let Some(Candidate { node, cost }) = self.candidates.pop() {
            // 过期条目：节点已确定，或之后又被更新为更小的代价
            if self.finalized[node] || cost > self.table.cost(node) {
                continue;
            }
            self.finalized[node] = true;
            self.remaining -= 1;
            return Some((node, self.table.cost(node)));
        }
        None
    }

    /// 所有节点都已确定
    pub fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    /// 尚未确定的节点数，包含不可达节点
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn is_finalized(&self, id: NodeId) -> bool {
        self.finalized[id]
    }

    pub fn table(&self) -> &CostTable<C> {
        &self.table
    }

    pub fn into_table(self) -> CostTable<C> {
        self.table
    }

    fn push_candidate(&mut self, node: NodeId, cost: C) {
        if !self.finalized[node] {
            self.candidates.push(Candidate { node, cost });
        }
    }
}
