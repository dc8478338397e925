use crate::common::queue::BlockingQueue;
use crate::config::PoolConfig;
use crate::core::{PoolError, PoolResult};
use crossbeam_utils::CachePadded;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;

type Job = Box<dyn FnOnce() + Send + 'static>;

enum Message {
    Run(Job),
    Terminate,
}

/// A fixed-size thread pool for executing tasks concurrently
///
/// Idle workers sleep on the task queue until work arrives. Dropping the pool
/// discards tasks that have not started yet and joins every worker.
pub struct ThreadPool {
    workers: Vec<Worker>,
    tasks: Arc<BlockingQueue<Message>>,
    state: Arc<PoolState>,
}

struct PoolState {
    active: CachePadded<AtomicUsize>,
    shutdown: AtomicBool,
}

/// Completion handle for a submitted task
pub struct TaskHandle<T = ()> {
    receiver: mpsc::Receiver<PoolResult<T>>,
}

impl<T> TaskHandle<T> {
    /// Blocks until the task has run and returns its value
    pub fn wait(self) -> PoolResult<T> {
        self.receiver.recv().unwrap_or(Err(PoolError::TaskAbandoned))
    }

    /// Returns the outcome if the task already finished
    pub fn try_wait(&self) -> Option<PoolResult<T>> {
        match self.receiver.try_recv() {
            Ok(result) => Some(result),
            Err(mpsc::TryRecvError::Empty) => None,
            Err(mpsc::TryRecvError::Disconnected) => Some(Err(PoolError::TaskAbandoned)),
        }
    }
}

impl ThreadPool {
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "Thread pool size must be greater than zero");

        let tasks = Arc::new(BlockingQueue::new());
        let state = Arc::new(PoolState {
            active: CachePadded::new(AtomicUsize::new(0)),
            shutdown: AtomicBool::new(false),
        });

        let workers = (0..size)
            .map(|id| Worker::new(id, Arc::clone(&tasks), Arc::clone(&state)))
            .collect();

        log::debug!("Thread pool started with {} workers", size);

        Self {
            workers,
            tasks,
            state,
        }
    }

    /// One worker per available hardware thread
    pub fn with_available_parallelism() -> Self {
        Self::new(num_cpus::get().max(1))
    }

    pub fn from_config(config: &PoolConfig) -> Self {
        Self::new(config.effective_threads())
    }

    /// Queues a task and returns a handle to wait for its result
    ///
    /// Never blocks: the backlog is unbounded.
    pub fn submit<F, T>(&self, f: F) -> PoolResult<TaskHandle<T>>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        let (sender, receiver) = mpsc::sync_channel(1);
        self.enqueue(Box::new(move || {
            let result = panic::catch_unwind(AssertUnwindSafe(f))
                .map_err(|payload| PoolError::TaskPanicked(panic_message(payload.as_ref())));
            // The handle may already be gone; nobody is waiting then.
            let _ = sender.send(result);
        }))?;
        Ok(TaskHandle { receiver })
    }

    /// Queues a task without a handle; a panic is logged and swallowed
    pub fn execute<F>(&self, f: F) -> PoolResult<()>
    where
        F: FnOnce() + Send + 'static,
    {
        self.enqueue(Box::new(move || {
            if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(f)) {
                log::error!("Detached task panicked: {}", panic_message(payload.as_ref()));
            }
        }))
    }

    fn enqueue(&self, job: Job) -> PoolResult<()> {
        if self.state.shutdown.load(Ordering::Acquire) {
            return Err(PoolError::ShutDown);
        }
        self.tasks.push(Message::Run(job));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.workers.len()
    }

    /// Workers currently running a task
    pub fn active_count(&self) -> usize {
        self.state.active.load(Ordering::Acquire)
    }

    /// Whether every worker is busy. Advisory only: the answer may be stale
    /// by the time the caller acts on it.
    pub fn is_full(&self) -> bool {
        self.active_count() >= self.workers.len()
    }

    /// Tasks waiting for a worker
    pub fn queued(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_shutdown(&self) -> bool {
        self.state.shutdown.load(Ordering::Acquire)
    }

    /// Stops accepting tasks and discards the ones not yet started
    ///
    /// Returns the number of discarded tasks. Running tasks finish normally.
    pub fn shutdown(&self) -> usize {
        if self.state.shutdown.swap(true, Ordering::AcqRel) {
            return 0;
        }

        let abandoned = self
            .tasks
            .drain()
            .into_iter()
            .filter(|message| matches!(message, Message::Run(_)))
            .count();
        if abandoned > 0 {
            log::warn!("Thread pool shutdown abandoned {} queued tasks", abandoned);
        }

        for _ in &self.workers {
            self.tasks.push(Message::Terminate);
        }
        abandoned
    }

    fn wait_for_completion(&mut self) {
        for worker in &mut self.workers {
            worker.wait();
        }
    }
}

impl Drop for ThreadPool {
    fn drop(&mut self) {
        self.shutdown();
        self.wait_for_completion();
    }
}

struct Worker {
    id: usize,
    thread: Option<thread::JoinHandle<()>>,
}

impl Worker {
    fn new(id: usize, tasks: Arc<BlockingQueue<Message>>, state: Arc<PoolState>) -> Self {
        let thread = thread::spawn(move || loop {
            match tasks.pop() {
                Message::Run(job) => {
                    state.active.fetch_add(1, Ordering::AcqRel);
                    job();
                    state.active.fetch_sub(1, Ordering::AcqRel);
                }
                Message::Terminate => break,
            }
        });

        Self {
            id,
            thread: Some(thread),
        }
    }

    fn wait(&mut self) {
        if let Some(handle) = self.thread.take() {
            if handle.join().is_err() {
                log::error!("Worker {} terminated abnormally", self.id);
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
