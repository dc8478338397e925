//! 带权有向图
//!
//! 图以编号为下标持有全部节点。移除节点只会清空对应槽位，
//! 其它节点指向它的边随之失效，松弛时直接跳过。

use crate::core::{Cost, PathError, PathResult};
use crate::graph::node::{Edge, Node, NodeId};

/// 带权有向图
#[derive(Debug, Clone)]
pub struct Graph<C> {
    nodes: Vec<Option<Node<C>>>,
}

impl<C: Cost> Default for Graph<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Cost> Graph<C> {
    /// 创建空图
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// 创建包含 `count` 个孤立节点的图，编号为 `0..count`
    pub fn with_nodes(count: usize) -> Self {
        Self {
            nodes: (0..count).map(|id| Some(Node::new(id))).collect(),
        }
    }

    /// 由边列表构建图
    pub fn from_edges(count: usize, edges: &[(NodeId, NodeId, C)]) -> PathResult<Self> {
        let mut graph = Self::with_nodes(count);
        for &(from, to, cost) in edges {
            graph.add_edge(from, to, cost)?;
        }
        Ok(graph)
    }

    /// 追加一个节点并返回其编号
    pub fn add_node(&mut self) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Some(Node::new(id)));
        id
    }

    /// 添加一条有向边 `from -> to`
    ///
    /// 两端都必须在范围内，且 `from` 未被移除
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, cost: C) -> PathResult<()> {
        self.check_range(to)?;
        self.node_mut(from)?.add_neighbor(to, cost);
        Ok(())
    }

    /// 移除节点，返回被移除的节点
    ///
    /// 编号不会被复用，指向该节点的边变为悬空边
    pub fn remove_node(&mut self, id: NodeId) -> Option<Node<C>> {
        self.nodes.get_mut(id).and_then(Option::take)
    }

    /// 节点槽位总数（包含已移除的节点）
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// 仍然存在的节点数
    pub fn live_count(&self) -> usize {
        self.nodes.iter().filter(|slot| slot.is_some()).count()
    }

    /// 全部出边数（包含悬空边）
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().flatten().map(Node::degree).sum()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node<C>> {
        self.nodes.get(id).and_then(Option::as_ref)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// 节点的有效出边：跳过指向已移除节点的边
    pub fn live_edges(&self, id: NodeId) -> impl Iterator<Item = &Edge<C>> + '_ {
        self.node(id)
            .into_iter()
            .flat_map(|node| node.neighbors().iter())
            .filter(move |edge| self.contains(edge.to))
    }

    /// 查找 `from -> to` 的最小边权，供路径代价校验使用
    pub fn edge_cost(&self, from: NodeId, to: NodeId) -> Option<C> {
        self.live_edges(from)
            .filter(|edge| edge.to == to)
            .map(|edge| edge.cost)
            .fold(None, |best, cost| match best {
                Some(current) if current <= cost => Some(current),
                _ => Some(cost),
            })
    }

    /// 校验编号在范围内
    pub fn check_range(&self, id: NodeId) -> PathResult<()> {
        if id < self.nodes.len() {
            Ok(())
        } else {
            Err(PathError::NodeOutOfRange {
                id,
                len: self.nodes.len(),
            })
        }
    }

    /// 校验编号在范围内且节点未被移除
    pub fn check_live(&self, id: NodeId) -> PathResult<()> {
        self.check_range(id)?;
        if self.contains(id) {
            Ok(())
        } else {
            Err(PathError::NodeRemoved(id))
        }
    }

    fn node_mut(&mut self, id: NodeId) -> PathResult<&mut Node<C>> {
        self.check_live(id)?;
        self.nodes[id].as_mut().ok_or(PathError::NodeRemoved(id))
    }
}
