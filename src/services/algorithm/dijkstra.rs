//! Dijkstra算法模块
//!
//! 单线程的标号设定算法，要求所有边权非负。
//! 每轮弹出代价最小的未确定节点（代价相同时取编号最小者），并松弛其有效出边。

use crate::core::{Cost, PathResult};
use crate::graph::{Graph, NodeId};
use crate::services::algorithm::frontier::DijkstraFrontier;
use crate::services::algorithm::tree::ShortestPathTree;

/// Dijkstra算法结构体
#[derive(Debug, Clone, Copy, Default)]
pub struct Dijkstra;

/// 单次计算的状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Unstarted,
    Iterating,
    Done,
}

/// 一次 Dijkstra 计算，可逐步推进
pub struct DijkstraRun<'a, C> {
    graph: &'a Graph<C>,
    source: NodeId,
    frontier: DijkstraFrontier<C>,
    state: RunState,
}

impl<'a, C: Cost> DijkstraRun<'a, C> {
    /// 初始化：起点代价为 0，其余为无穷大
    pub fn new(graph: &'a Graph<C>, source: NodeId) -> PathResult<Self> {
        graph.check_live(source)?;

        let mut frontier = DijkstraFrontier::new(graph.len());
        frontier.set_cost(source, C::ZERO);

        Ok(Self {
            graph,
            source,
            frontier,
            state: RunState::Unstarted,
        })
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// 当前已知代价
    pub fn cost(&self, id: NodeId) -> C {
        self.frontier.cost(id)
    }

    /// 确定一个节点并松弛其出边，返回该节点；计算结束时返回 `None`
    ///
    /// # Panics
    /// 遇到负权边时断言失败
    pub fn step(&mut self) -> Option<NodeId> {
        if self.state == RunState::Done {
            return None;
        }

        let Some((node, cost)) = self.frontier.pop() else {
            self.state = RunState::Done;
            return None;
        };
        self.state = RunState::Iterating;

        for edge in self.graph.live_edges(node) {
            assert!(
                !edge.cost.is_negative(),
                "Dijkstra 不支持负权边: {} -> {} ({:?})",
                node,
                edge.to,
                edge.cost
            );

            let new_cost = cost + edge.cost;
            if new_cost < self.frontier.cost(edge.to) {
                self.frontier
                    .set_cost_with_predecessor(edge.to, new_cost, node);
            }
        }

        Some(node)
    }

    /// 运行至结束
    pub fn run(mut self) -> ShortestPathTree<C> {
        let mut settled = 0usize;
        while self.step().is_some() {
            settled += 1;
        }

        log::debug!(
            "Dijkstra 完成: 起点 {}, 确定节点 {}, 不可达节点 {}",
            self.source,
            settled,
            self.frontier.remaining()
        );
        ShortestPathTree::new(self.source, self.frontier.into_table())
    }
}

impl Dijkstra {
    /// 计算从起点到所有节点的最短路径
    pub fn shortest_paths<C: Cost>(
        graph: &Graph<C>,
        source: NodeId,
    ) -> PathResult<ShortestPathTree<C>> {
        Ok(DijkstraRun::new(graph, source)?.run())
    }

    /// 查找从起点到目标节点的最短路径
    ///
    /// 目标不可达时代价为无穷大，路径只包含目标节点
    pub fn shortest_path<C: Cost>(
        graph: &Graph<C>,
        source: NodeId,
        target: NodeId,
    ) -> PathResult<(Vec<NodeId>, C)> {
        graph.check_range(target)?;
        let tree = Self::shortest_paths(graph, source)?;
        Ok(tree.shortest_path(target))
    }
}
