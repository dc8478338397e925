//! Bellman-Ford算法模块
//!
//! 标号修正算法，支持负权边，由线程池并发松弛。
//!
//! 待松弛节点放入共享的阻塞队列，多个排空者（线程池中的工作线程加上调用线程）
//! 协作取出并松弛。处理一个节点时，第一个被改进的邻居由当前排空者直接继续处理，
//! 其余被改进的邻居重新入队。原子计数器记录已入队或正在处理的节点数，
//! 归零即达到静止状态，计算结束。
//!
//! 调用线程独自就能把计算推进到底，线程池只负责加速。调用线程到达静止状态后，
//! 只等待已经进入排空循环的辅助线程；尚未被线程池调度的辅助任务之后启动时直接返回。
//!
//! 图中存在从起点可达的负权环时计算不会终止，本模块不做检测。

use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

use crossbeam_utils::CachePadded;
use parking_lot::{Condvar, Mutex};

use crate::common::{BlockingQueue, ThreadPool};
use crate::core::{Cost, PathError, PathResult};
use crate::graph::{Graph, NodeId};
use crate::services::algorithm::record::RelaxationRecord;
use crate::services::algorithm::tree::ShortestPathTree;

/// Bellman-Ford算法结构体
#[derive(Clone)]
pub struct BellmanFord {
    pool: Arc<ThreadPool>,
}

/// 队列中的工作项
enum Work {
    Relax(NodeId),
    Quiesced,
}

/// 辅助线程登记
#[derive(Default)]
struct Helpers {
    /// 调用线程已结束排空，不再接纳新的辅助线程
    closed: bool,
    /// 正在排空循环中的辅助线程数
    active: usize,
}

/// 一次计算的共享状态，只在单次计算内有效
struct RelaxationRun<C> {
    graph: Arc<Graph<C>>,
    record: RelaxationRecord<C>,
    frontier: BlockingQueue<Work>,
    /// 已入队或正在处理的节点数
    pending: CachePadded<AtomicUsize>,
    drainers: usize,
    helpers: Mutex<Helpers>,
    helpers_done: Condvar,
    relaxations: AtomicUsize,
    aborted: AtomicBool,
}

/// 正在处理一个节点；离开作用域时计入完成，发生 panic 时中止本次计算
struct InFlight<'a, C: Cost> {
    run: &'a RelaxationRun<C>,
}

impl<C: Cost> Drop for InFlight<'_, C> {
    fn drop(&mut self) {
        if thread::panicking() {
            self.run.abort();
        } else {
            self.run.complete();
        }
    }
}

/// 辅助线程离开排空循环时注销，包括 panic 退出
struct HelperSlot<'a, C: Cost> {
    run: &'a RelaxationRun<C>,
}

impl<C: Cost> Drop for HelperSlot<'_, C> {
    fn drop(&mut self) {
        let mut helpers = self.run.helpers.lock();
        helpers.active -= 1;
        if helpers.active == 0 {
            self.run.helpers_done.notify_all();
        }
    }
}

impl<C: Cost> RelaxationRun<C> {
    fn new(graph: Arc<Graph<C>>, drainers: usize) -> Self {
        let record = RelaxationRecord::new(graph.len());
        Self {
            graph,
            record,
            frontier: BlockingQueue::new(),
            pending: CachePadded::new(AtomicUsize::new(0)),
            drainers,
            helpers: Mutex::new(Helpers::default()),
            helpers_done: Condvar::new(),
            relaxations: AtomicUsize::new(0),
            aborted: AtomicBool::new(false),
        }
    }

    fn start(&self, source: NodeId) {
        self.record.set_cost(source, C::ZERO);
        self.enqueue(source);
    }

    fn enqueue(&self, node: NodeId) {
        // 先计数再入队，计数归零前队列中不会残留工作项
        self.pending.fetch_add(1, Ordering::AcqRel);
        self.frontier.push(Work::Relax(node));
    }

    /// 辅助线程入口；调用线程已结束排空时直接返回
    fn help(&self) {
        {
            let mut helpers = self.helpers.lock();
            if helpers.closed {
                return;
            }
            helpers.active += 1;
        }
        let _slot = HelperSlot { run: self };
        self.drain();
    }

    /// 拒绝之后启动的辅助线程，并等待已在排空循环中的辅助线程退出
    fn close(&self) {
        let mut helpers = self.helpers.lock();
        helpers.closed = true;
        self.helpers_done
            .wait_while(&mut helpers, |helpers| helpers.active > 0);
    }

    /// 排空循环：直到收到静止信号
    fn drain(&self) {
        loop {
            match self.frontier.pop() {
                Work::Quiesced => break,
                Work::Relax(_) if self.aborted.load(Ordering::Acquire) => continue,
                Work::Relax(node) => {
                    let _in_flight = InFlight { run: self };
                    self.relax_chain(node);
                }
            }
        }
    }

    /// 松弛节点；第一个被改进的邻居在本线程继续处理，其余入队
    fn relax_chain(&self, mut node: NodeId) {
        let mut improved = Vec::new();
        loop {
            self.relax_node(node, &mut improved);

            let mut next = improved.drain(..);
            let Some(first) = next.next() else {
                break;
            };
            for neighbor in next {
                self.enqueue(neighbor);
            }
            node = first;
        }
    }

    fn relax_node(&self, node: NodeId, improved: &mut Vec<NodeId>) {
        for edge in self.graph.live_edges(node) {
            if let Some(new_cost) = self.record.relax_edge(node, edge.to, edge.cost) {
                self.relaxations.fetch_add(1, Ordering::Relaxed);
                log::trace!("松弛 {} -> {}: {:?}", node, edge.to, new_cost);
                improved.push(edge.to);
            }
        }
    }

    fn complete(&self) {
        if self.pending.fetch_sub(1, Ordering::AcqRel) == 1 {
            self.release_drainers();
        }
    }

    fn abort(&self) {
        if !self.aborted.swap(true, Ordering::AcqRel) {
            log::error!("Bellman-Ford 松弛过程中发生 panic，中止计算");
            self.release_drainers();
        }
    }

    /// 每个排空者一个静止信号；未启动的辅助线程留下的信号随本次计算一起丢弃
    fn release_drainers(&self) {
        for _ in 0..self.drainers {
            self.frontier.push(Work::Quiesced);
        }
    }
}

impl BellmanFord {
    pub fn new(pool: Arc<ThreadPool>) -> Self {
        Self { pool }
    }

    /// 使用与硬件并发数一致的线程池
    pub fn with_available_parallelism() -> Self {
        Self::new(Arc::new(ThreadPool::with_available_parallelism()))
    }

    pub fn pool(&self) -> &Arc<ThreadPool> {
        &self.pool
    }

    /// 计算从起点到所有节点的最短路径
    ///
    /// 调用线程本身也参与松弛，线程池被其他任务占满时计算照常完成。
    ///
    /// 等价的最短路径中，结果总是选择边数最少的一条，边数也相同时逐跳选择
    /// 编号较小的前驱，因此重复计算得到相同的路径。
    ///
    /// 任何排空者在松弛时发生 panic（例如代价溢出）都会中止整个计算并返回
    /// [`PathError::RelaxationAborted`]，panic 不会传播到调用方。
    pub fn shortest_paths<C: Cost>(
        &self,
        graph: &Arc<Graph<C>>,
        source: NodeId,
    ) -> PathResult<ShortestPathTree<C>> {
        graph.check_live(source)?;

        let helpers = self.pool.len();
        let run = Arc::new(RelaxationRun::new(Arc::clone(graph), helpers + 1));
        run.start(source);

        for _ in 0..helpers {
            let run = Arc::clone(&run);
            self.pool.execute(move || run.help())?;
        }

        let drained = panic::catch_unwind(AssertUnwindSafe(|| run.drain()));
        if drained.is_err() {
            run.abort();
        }
        run.close();

        if run.aborted.load(Ordering::Acquire) {
            return Err(PathError::RelaxationAborted);
        }

        log::debug!(
            "Bellman-Ford 完成: 起点 {}, 松弛次数 {}, 排空线程 {}",
            source,
            run.relaxations.load(Ordering::Relaxed),
            run.drainers
        );
        Ok(ShortestPathTree::new(source, run.record.snapshot()))
    }

    /// 查找从起点到目标节点的最短路径
    ///
    /// 目标不可达时代价为无穷大，路径只包含目标节点
    pub fn shortest_path<C: Cost>(
        &self,
        graph: &Arc<Graph<C>>,
        source: NodeId,
        target: NodeId,
    ) -> PathResult<(Vec<NodeId>, C)> {
        graph.check_range(target)?;
        let tree = self.shortest_paths(graph, source)?;
        Ok(tree.shortest_path(target))
    }
}
