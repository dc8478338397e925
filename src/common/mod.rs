//! 通用基础设施模块
//!
//! - 阻塞队列
//! - 固定大小的线程池

pub mod queue;
pub mod thread;

// 重新导出常用的类型，方便其他模块使用
pub use queue::*;
pub use thread::*;
