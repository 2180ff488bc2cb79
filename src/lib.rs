//! Shortpath - single-source and all-pairs shortest paths
//!
//! This library computes shortest paths in weighted directed graphs whose edge
//! costs may be negative. It provides Dijkstra and Bellman-Ford for the
//! single-source problem, and Floyd-Warshall and Johnson for all pairs.
//!
//! Bellman-Ford, Floyd-Warshall and Johnson report a reachable negative cycle
//! through [`Error::NegativeCycle`] instead of returning distance tables.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    bellman_ford::BellmanFord,
    dijkstra::Dijkstra,
    floyd_warshall::{FloydWarshall, FloydWarshallResult},
    johnson::{Johnson, JohnsonResult},
    path_cost, ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Negative cycle detected")]
    NegativeCycle,

    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Edge capacity of {0} exceeded")]
    EdgeCapacityExceeded(usize),

    #[error("Source vertex {0} not found in graph")]
    SourceNotFound(usize),

    #[error("Negative edge weight {cost} on edge {edge}")]
    NegativeWeight { edge: usize, cost: f64 },
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
