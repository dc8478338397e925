//! 自定义断言辅助模块
//!
//! 提供路径相关的常用断言函数

use graphpath::{Graph, NodeId};

/// 断言路径沿途边权之和等于给定代价，且路径从 `source` 出发
pub fn assert_path_cost(graph: &Graph<i64>, source: NodeId, path: &[NodeId], expected: i64) {
    assert_eq!(path.first(), Some(&source), "路径应从起点出发: {:?}", path);

    let total: i64 = path
        .windows(2)
        .map(|pair| {
            graph
                .edge_cost(pair[0], pair[1])
                .unwrap_or_else(|| panic!("路径中的边不存在: {} -> {}", pair[0], pair[1]))
        })
        .sum();
    assert_eq!(total, expected, "路径代价不匹配: {:?}", path);
}

/// 断言算法结果与参照结果一致
pub fn assert_costs_match(actual: &[i64], expected: &[Option<i64>]) {
    assert_eq!(actual.len(), expected.len());
    for (id, (&cost, reference)) in actual.iter().zip(expected).enumerate() {
        match reference {
            Some(distance) => assert_eq!(cost, *distance, "节点 {} 的代价不匹配", id),
            None => assert_eq!(cost, i64::MAX, "节点 {} 应不可达", id),
        }
    }
}
