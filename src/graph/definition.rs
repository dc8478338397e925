//! 图定义文件
//!
//! 命令行工具读取的只读输入格式，支持 JSON 与 TOML：
//!
//! ```toml
//! nodes = 3
//!
//! [[edges]]
//! from = 0
//! to = 1
//! cost = 4
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{Cost, GraphPathResult, PathResult};
use crate::graph::digraph::Graph;
use crate::graph::node::NodeId;

/// 单条边的定义
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EdgeDefinition<C> {
    pub from: NodeId,
    pub to: NodeId,
    pub cost: C,
}

/// 图定义
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GraphDefinition<C> {
    /// 节点数，编号为 `0..nodes`
    pub nodes: usize,
    #[serde(default = "Vec::new")]
    pub edges: Vec<EdgeDefinition<C>>,
}

impl<C> GraphDefinition<C>
where
    C: Cost + for<'de> Deserialize<'de>,
{
    /// 从文件加载，扩展名为 `.json` 时按 JSON 解析，否则按 TOML 解析
    pub fn load<P: AsRef<Path>>(path: P) -> GraphPathResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let definition = if is_json {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content)?
        };
        Ok(definition)
    }

    /// 构建图，边的端点越界时返回错误
    pub fn build(&self) -> PathResult<Graph<C>> {
        let mut graph = Graph::with_nodes(self.nodes);
        for edge in &self.edges {
            graph.add_edge(edge.from, edge.to, edge.cost)?;
        }
        Ok(graph)
    }
}
