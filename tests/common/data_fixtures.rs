//! 测试数据生成模块
//!
//! 提供固定场景图、随机图以及朴素的参照实现

use std::sync::Arc;

use graphpath::{Graph, NodeId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 6 个节点的非负权图
pub fn sample_graph() -> Arc<Graph<i64>> {
    build(
        6,
        &[
            (0, 1, 3),
            (0, 4, 3),
            (1, 2, 1),
            (2, 5, 1),
            (2, 3, 3),
            (4, 5, 2),
            (5, 0, 6),
            (5, 3, 1),
        ],
    )
}

/// 5 个节点的非负权图
pub fn second_sample_graph() -> Arc<Graph<i64>> {
    build(
        5,
        &[
            (0, 1, 10),
            (0, 4, 5),
            (1, 2, 1),
            (1, 4, 2),
            (2, 3, 4),
            (3, 0, 7),
            (3, 2, 6),
            (4, 1, 3),
            (4, 2, 9),
            (4, 3, 2),
        ],
    )
}

/// 6 个节点、含负权边但无负权环的图
pub fn negative_weight_graph() -> Arc<Graph<i64>> {
    build(
        6,
        &[
            (0, 1, 5),
            (1, 4, 9),
            (1, 3, 3),
            (2, 0, 4),
            (2, 1, -4),
            (3, 4, 3),
            (3, 5, 2),
            (4, 2, -1),
            (4, 5, -5),
            (5, 0, 9),
            (5, 2, 8),
        ],
    )
}

pub fn build(count: usize, edges: &[(NodeId, NodeId, i64)]) -> Arc<Graph<i64>> {
    Arc::new(Graph::from_edges(count, edges).expect("Fixture graph should build"))
}

/// 随机边列表，边权在 `[min_weight, max_weight]` 内
pub fn random_edges(
    seed: u64,
    nodes: usize,
    edges: usize,
    min_weight: i64,
    max_weight: i64,
) -> Vec<(NodeId, NodeId, i64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..edges)
        .map(|_| {
            (
                rng.gen_range(0..nodes),
                rng.gen_range(0..nodes),
                rng.gen_range(min_weight..=max_weight),
            )
        })
        .collect()
}

/// 边权为互不相同的 2 的幂，任意两条不同路径的代价都不相同
pub fn unique_path_edges(seed: u64, nodes: usize, edges: usize) -> Vec<(NodeId, NodeId, i64)> {
    assert!(edges < 62, "Edge weights must fit in i64");
    let mut rng = StdRng::seed_from_u64(seed);
    (0..edges)
        .map(|index| {
            (
                rng.gen_range(0..nodes),
                rng.gen_range(0..nodes),
                1i64 << index,
            )
        })
        .collect()
}

/// 随机节点势能
pub fn random_potentials(seed: u64, nodes: usize) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..nodes).map(|_| rng.gen_range(-20..=20)).collect()
}

/// 按势能重新赋权：`w'(u, v) = w(u, v) + p(u) - p(v)`
///
/// 任意环的代价保持不变，因此正权图重新赋权后不含负权环，
/// 且 `d'(s, t) = d(s, t) + p(s) - p(t)`
pub fn reweight(
    edges: &[(NodeId, NodeId, i64)],
    potentials: &[i64],
) -> Vec<(NodeId, NodeId, i64)> {
    edges
        .iter()
        .map(|&(from, to, cost)| (from, to, cost + potentials[from] - potentials[to]))
        .collect()
}

/// 朴素参照实现：对全部边做 `n - 1` 轮松弛，`None` 表示不可达
pub fn reference_distances(
    nodes: usize,
    edges: &[(NodeId, NodeId, i64)],
    source: NodeId,
) -> Vec<Option<i64>> {
    let mut distances = vec![None; nodes];
    distances[source] = Some(0);

    for _ in 0..nodes.saturating_sub(1) {
        let mut updated = false;
        for &(from, to, cost) in edges {
            let Some(base) = distances[from] else {
                continue;
            };
            let candidate = base + cost;
            if distances[to].map_or(true, |current| candidate < current) {
                distances[to] = Some(candidate);
                updated = true;
            }
        }
        if !updated {
            break;
        }
    }

    distances
}
