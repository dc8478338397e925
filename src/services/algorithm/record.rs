//! 松弛记录模块
//!
//! 保存每个节点当前已知的最小代价与前驱节点：
//! - `CostTable` 不加锁，供单线程的 Dijkstra 使用，也是算法结束后的只读结果
//! - `RelaxationRecord` 用一把互斥锁保护整张表，供并发的 Bellman-Ford 使用
//!
//! 并发松弛时多条等价路径的到达顺序不确定。`RelaxationRecord` 因此按
//! (代价, 边数) 的字典序比较标号，代价与边数都相同时保留编号较小的前驱，
//! 使结果与线程调度无关。

use parking_lot::Mutex;

use crate::core::Cost;
use crate::graph::NodeId;

/// 代价与前驱表
#[derive(Debug, Clone, PartialEq)]
pub struct CostTable<C> {
    costs: Vec<C>,
    predecessors: Vec<Option<NodeId>>,
}

impl<C: Cost> CostTable<C> {
    /// 创建包含 `size` 个节点的表，所有代价初始化为无穷大
    pub fn new(size: usize) -> Self {
        Self {
            costs: vec![C::INFINITY; size],
            predecessors: vec![None; size],
        }
    }

    /// 清空前驱并将全部代价重置为无穷大
    pub fn reset(&mut self, size: usize) {
        self.costs.clear();
        self.costs.resize(size, C::INFINITY);
        self.predecessors.clear();
        self.predecessors.resize(size, None);
    }

    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    /// 覆盖节点代价，前驱保持不变
    pub fn set_cost(&mut self, id: NodeId, cost: C) {
        assert!(id < self.costs.len(), "节点 {} 超出代价表范围", id);
        self.costs[id] = cost;
    }

    /// 同时覆盖节点代价与前驱
    pub fn set_cost_with_predecessor(&mut self, id: NodeId, cost: C, predecessor: NodeId) {
        self.set_cost(id, cost);
        self.predecessors[id] = Some(predecessor);
    }

    pub fn cost(&self, id: NodeId) -> C {
        self.costs[id]
    }

    pub fn predecessor(&self, id: NodeId) -> Option<NodeId> {
        self.predecessors[id]
    }

    pub fn costs(&self) -> &[C] {
        &self.costs
    }

    /// 沿前驱回溯，返回从起点到 `target` 的节点序列
    ///
    /// `target` 不可达时序列只包含 `target` 本身，调用方需先确认代价有限
    pub fn reconstruct_path(&self, target: NodeId) -> Vec<NodeId> {
        let mut path = vec![target];
        let mut current = target;

        while let Some(predecessor) = self.predecessors[current] {
            // 前驱链只有在负权环下才会成环
            if path.len() > self.costs.len() {
                break;
            }
            path.push(predecessor);
            current = predecessor;
        }

        path.reverse();
        path
    }
}

/// 标号：代价表加上每个节点当前路径的边数
#[derive(Debug)]
struct Labels<C> {
    table: CostTable<C>,
    hops: Vec<usize>,
}

impl<C: Cost> Labels<C> {
    fn new(size: usize) -> Self {
        Self {
            table: CostTable::new(size),
            hops: vec![0; size],
        }
    }

    fn reset(&mut self, size: usize) {
        self.table.reset(size);
        self.hops.clear();
        self.hops.resize(size, 0);
    }

    fn set_cost_with_predecessor(&mut self, id: NodeId, cost: C, predecessor: NodeId) {
        self.table.set_cost_with_predecessor(id, cost, predecessor);
        self.hops[id] = self.hops[predecessor] + 1;
    }

    /// 候选标号 (代价, 边数) 按字典序严格更小时写入并返回 `true`；
    /// 标号相同但前驱编号更小时只替换前驱，返回 `false`
    fn improve(&mut self, id: NodeId, candidate: C, predecessor: NodeId) -> bool {
        let hops = self.hops[predecessor] + 1;
        let current = self.table.cost(id);

        if candidate < current || (candidate == current && hops < self.hops[id]) {
            self.set_cost_with_predecessor(id, candidate, predecessor);
            return true;
        }

        if candidate == current
            && hops == self.hops[id]
            && self
                .table
                .predecessor(id)
                .is_some_and(|existing| predecessor < existing)
        {
            self.table.set_cost_with_predecessor(id, candidate, predecessor);
        }
        false
    }
}

/// 线程安全的松弛记录
///
/// 每个访问器都在同一把锁内读写整张表，任何读者都看不到只更新了一半的
/// 代价与前驱。
#[derive(Debug)]
pub struct RelaxationRecord<C> {
    labels: Mutex<Labels<C>>,
}

impl<C: Cost> RelaxationRecord<C> {
    pub fn new(size: usize) -> Self {
        Self {
            labels: Mutex::new(Labels::new(size)),
        }
    }

    pub fn reset(&self, size: usize) {
        self.labels.lock().reset(size);
    }

    pub fn len(&self) -> usize {
        self.labels.lock().table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.lock().table.is_empty()
    }

    /// 覆盖节点代价，前驱与边数保持不变
    pub fn set_cost(&self, id: NodeId, cost: C) {
        self.labels.lock().table.set_cost(id, cost);
    }

    pub fn set_cost_with_predecessor(&self, id: NodeId, cost: C, predecessor: NodeId) {
        self.labels
            .lock()
            .set_cost_with_predecessor(id, cost, predecessor);
    }

    pub fn get_cost(&self, id: NodeId) -> C {
        self.labels.lock().table.cost(id)
    }

    pub fn predecessor(&self, id: NodeId) -> Option<NodeId> {
        self.labels.lock().table.predecessor(id)
    }

    /// 比较并写入：比较与写入在同一临界区内完成，更小的标号总会胜出
    ///
    /// 返回 `true` 表示标号变小，节点需要重新松弛
    pub fn relax(&self, id: NodeId, candidate: C, predecessor: NodeId) -> bool {
        self.labels.lock().improve(id, candidate, predecessor)
    }

    /// 沿边 `from -> to` 松弛，读取 `from` 的代价与写入 `to` 在同一临界区内完成
    ///
    /// 标号变小时返回新的代价
    pub fn relax_edge(&self, from: NodeId, to: NodeId, weight: C) -> Option<C> {
        let mut labels = self.labels.lock();
        let candidate = labels.table.cost(from) + weight;
        labels.improve(to, candidate, from).then_some(candidate)
    }

    /// 回溯路径，整个回溯过程持有锁
    pub fn reconstruct_path(&self, target: NodeId) -> Vec<NodeId> {
        self.labels.lock().table.reconstruct_path(target)
    }

    /// 复制当前的代价与前驱
    pub fn snapshot(&self) -> CostTable<C> {
        self.labels.lock().table.clone()
    }

    pub fn into_table(self) -> CostTable<C> {
        self.labels.into_inner().table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_initial_costs_are_infinite() {
        let table: CostTable<i32> = CostTable::new(3);
        assert_eq!(table.len(), 3);
        assert!(table.costs().iter().all(|&cost| cost == i32::MAX));
        assert_eq!(table.predecessor(1), None);
    }

    #[test]
    fn test_reconstruct_path() {
        let mut table: CostTable<u32> = CostTable::new(4);
        table.set_cost(0, 0);
        table.set_cost_with_predecessor(2, 3, 0);
        table.set_cost_with_predecessor(3, 5, 2);

        assert_eq!(table.reconstruct_path(3), vec![0, 2, 3]);
        assert_eq!(table.reconstruct_path(0), vec![0]);
    }

    #[test]
    fn test_unreached_target_path_is_degenerate() {
        let mut table: CostTable<u32> = CostTable::new(3);
        table.set_cost(0, 0);
        assert_eq!(table.reconstruct_path(2), vec![2]);
        assert!(!table.cost(2).is_finite_cost());
    }

    #[test]
    fn test_predecessor_cycle_is_bounded() {
        let mut table: CostTable<i32> = CostTable::new(2);
        table.set_cost_with_predecessor(0, -4, 1);
        table.set_cost_with_predecessor(1, -6, 0);

        let path = table.reconstruct_path(1);
        assert!(path.len() <= 3);
    }

    #[test]
    fn test_relax_only_on_strictly_smaller() {
        let record: RelaxationRecord<i64> = RelaxationRecord::new(2);
        record.set_cost(0, 0);
        assert!(record.relax(1, 10, 0));
        assert!(!record.relax(1, 10, 0));
        assert!(!record.relax(1, 12, 0));
        assert!(record.relax(1, -1, 0));
        assert_eq!(record.get_cost(1), -1);
    }

    #[test]
    fn test_equal_cost_prefers_fewer_edges() {
        // 0 -> 1 -> 3 与 0 -> 2 -> 4 -> 3 代价相同
        let record: RelaxationRecord<u32> = RelaxationRecord::new(5);
        record.set_cost(0, 0);
        record.set_cost_with_predecessor(2, 1, 0);
        record.set_cost_with_predecessor(4, 2, 2);
        record.set_cost_with_predecessor(1, 2, 0);

        assert!(record.relax(3, 5, 4));
        assert_eq!(record.reconstruct_path(3), vec![0, 2, 4, 3]);

        assert!(record.relax(3, 5, 1));
        assert_eq!(record.reconstruct_path(3), vec![0, 1, 3]);

        // 边数更多的等价路径不会替换
        assert!(!record.relax(3, 5, 4));
        assert_eq!(record.predecessor(3), Some(1));
    }

    #[test]
    fn test_equal_label_prefers_lower_predecessor() {
        let record: RelaxationRecord<u32> = RelaxationRecord::new(4);
        record.set_cost(0, 0);
        record.set_cost_with_predecessor(1, 1, 0);
        record.set_cost_with_predecessor(2, 1, 0);

        assert!(record.relax(3, 4, 2));
        assert!(!record.relax(3, 4, 1));
        assert_eq!(record.predecessor(3), Some(1));
        assert!(!record.relax(3, 4, 2));
        assert_eq!(record.predecessor(3), Some(1));
    }

    #[test]
    fn test_zero_weight_cycle_keeps_path_acyclic() {
        // 2 -> 1 代价 5，1 与 0 之间是零权环
        let record: RelaxationRecord<u32> = RelaxationRecord::new(3);
        record.set_cost(2, 0);
        assert_eq!(record.relax_edge(2, 1, 5), Some(5));
        assert_eq!(record.relax_edge(1, 0, 0), Some(5));
        assert_eq!(record.relax_edge(0, 1, 0), None);

        assert_eq!(record.reconstruct_path(1), vec![2, 1]);
        assert_eq!(record.reconstruct_path(0), vec![2, 1, 0]);
    }

    #[test]
    fn test_reset() {
        let record: RelaxationRecord<i32> = RelaxationRecord::new(2);
        record.set_cost_with_predecessor(1, 4, 0);
        record.reset(3);

        assert_eq!(record.len(), 3);
        assert_eq!(record.get_cost(1), i32::MAX);
        assert_eq!(record.predecessor(1), None);
    }

    #[test]
    #[should_panic]
    fn test_set_cost_out_of_range() {
        let record: RelaxationRecord<i32> = RelaxationRecord::new(2);
        record.set_cost(5, 1);
    }

    #[test]
    fn test_concurrent_relax_keeps_minimum() {
        let record = Arc::new(RelaxationRecord::<u64>::new(2));
        record.set_cost(0, 0);

        let handles: Vec<_> = (0..8u64)
            .map(|worker| {
                let record = Arc::clone(&record);
                thread::spawn(move || {
                    for step in 0..500u64 {
                        record.relax(1, 1000 + (step * 7 + worker * 13) % 997, 0);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("Thread should complete");
        }

        assert_eq!(record.get_cost(1), 1000);
        assert_eq!(record.reconstruct_path(1), vec![0, 1]);
    }
}
