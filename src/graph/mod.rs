//! 图模块
//!
//! 以编号为下标的节点容器，边只保存目标节点编号

pub mod definition;
pub mod digraph;
pub mod node;

pub use definition::{EdgeDefinition, GraphDefinition};
pub use digraph::Graph;
pub use node::{Edge, Node, NodeId};
