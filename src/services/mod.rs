pub mod algorithm;

pub use algorithm::{
    Algorithm, BellmanFord, Dijkstra, PathStrategy, RelaxationRecord, ShortestPathTree,
};
