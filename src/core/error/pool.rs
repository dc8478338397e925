//! 线程池错误类型
//!
//! 涵盖任务提交与任务等待相关的错误

use thiserror::Error;

/// 线程池操作结果类型别名
pub type PoolResult<T> = Result<T, PoolError>;

/// 线程池相关错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    #[error("线程池已关闭，无法提交任务")]
    ShutDown,

    #[error("任务执行时发生 panic: {0}")]
    TaskPanicked(String),

    #[error("任务在执行前被丢弃")]
    TaskAbandoned,
}
