//! GraphPath - single-source shortest paths over weighted directed graphs
//!
//! Two interchangeable strategies share one relaxation record: a sequential
//! Dijkstra for non-negative weights and a Bellman-Ford that tolerates negative
//! weights and relaxes nodes concurrently on a bounded worker pool.

pub mod common;
pub mod config;
pub mod core;
pub mod graph;
pub mod services;
pub mod utils;

pub use crate::core::{Cost, GraphPathError, GraphPathResult, PathError, PathResult, PoolError};
pub use crate::graph::{Graph, NodeId};
pub use crate::services::{Algorithm, BellmanFord, Dijkstra, PathStrategy, ShortestPathTree};
