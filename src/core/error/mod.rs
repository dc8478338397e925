//! 统一错误处理系统 for GraphPath
//!
//! - 算法与线程池各自使用独立的错误枚举，调用方可按需匹配
//! - 配置、IO、序列化等外部错误统一转换为 `GraphPathError`
//! - `GraphPathResult<T>` 作为二进制入口和配置加载的统一返回类型

use thiserror::Error;

pub mod path;
pub mod pool;

pub use path::{PathError, PathResult};
pub use pool::{PoolError, PoolResult};

/// 统一的错误类型
#[derive(Error, Debug, Clone)]
pub enum GraphPathError {
    #[error("路径错误: {0}")]
    Path(#[from] PathError),

    #[error("线程池错误: {0}")]
    Pool(#[from] PoolError),

    #[error("配置错误: {0}")]
    Config(String),

    #[error("IO错误: {0}")]
    Io(String),

    #[error("序列化错误: {0}")]
    Serialization(String),
}

/// 统一的结果类型
pub type GraphPathResult<T> = Result<T, GraphPathError>;

// ==================== 外部错误转换实现 ====================

impl From<std::io::Error> for GraphPathError {
    fn from(err: std::io::Error) -> Self {
        GraphPathError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for GraphPathError {
    fn from(err: toml::de::Error) -> Self {
        GraphPathError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for GraphPathError {
    fn from(err: toml::ser::Error) -> Self {
        GraphPathError::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for GraphPathError {
    fn from(err: serde_json::Error) -> Self {
        GraphPathError::Serialization(err.to_string())
    }
}

impl From<flexi_logger::FlexiLoggerError> for GraphPathError {
    fn from(err: flexi_logger::FlexiLoggerError) -> Self {
        GraphPathError::Config(err.to_string())
    }
}
