//! 最短路径错误类型
//!
//! 涵盖调用方可恢复的误用，例如越界的节点编号。
//! 负权边传给 Dijkstra 属于前置条件违反，直接断言失败，不在此列。

use thiserror::Error;

use crate::core::error::pool::PoolError;
use crate::graph::NodeId;

/// 最短路径操作结果类型别名
pub type PathResult<T> = Result<T, PathError>;

/// 最短路径相关错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("节点 {id} 超出图范围 (节点数: {len})")]
    NodeOutOfRange { id: NodeId, len: usize },

    #[error("节点 {0} 已从图中移除")]
    NodeRemoved(NodeId),

    #[error("松弛过程异常中止")]
    RelaxationAborted,

    #[error("线程池错误: {0}")]
    Pool(#[from] PoolError),
}
