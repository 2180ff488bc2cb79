pub mod traits;
pub mod dijkstra;
pub mod bellman_ford;
pub mod floyd_warshall;
pub mod johnson;

pub use traits::{path_cost, ShortestPathAlgorithm, ShortestPathResult};
