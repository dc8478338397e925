pub mod cost;
pub mod error;

// 错误和结果类型
pub use error::{
    GraphPathError, GraphPathResult, PathError, PathResult, PoolError, PoolResult,
};

pub use cost::Cost;
