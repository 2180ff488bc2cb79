use std::fmt::Debug;
use num_traits::Float;

use crate::graph::Graph;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::{Error, Result};

/// Bellman-Ford single-source shortest paths for arbitrary edge costs.
///
/// Runs `n + 1` relaxation rounds over every edge. Round `k` reads only the
/// table produced by round `k - 1`, so the two tables swap roles each round.
/// After `n - 1` rounds a graph without a reachable negative cycle has
/// converged; if the last round still lowers any distance, a negative cycle
/// is reachable from the source and [`Error::NegativeCycle`] is returned.
#[derive(Debug, Default, Clone, Copy)]
pub struct BellmanFord;

impl BellmanFord {
    /// Creates a new Bellman-Ford algorithm instance
    pub fn new() -> Self {
        BellmanFord
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for BellmanFord
where
    W: Float + Debug,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound(source));
        }

        let n = graph.vertex_count();
        let mut previous = vec![W::infinity(); n];
        let mut current = previous.clone();
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        previous[source] = W::zero();

        for round in 0..=n {
            let mut changed = 0usize;
            for v in 0..n {
                current[v] = previous[v];
                for edge in graph.in_edges(v) {
                    let u = graph.edge(edge).0;
                    let candidate = previous[u] + graph.edge_cost(edge);
                    if candidate < current[v] {
                        current[v] = candidate;
                        predecessors[v] = Some(u);
                        changed += 1;
                    }
                }
            }
            log::trace!("bellman-ford round {}: {} relaxations", round, changed);
            std::mem::swap(&mut previous, &mut current);
        }

        // After the final swap `previous` holds round n and `current` round n - 1
        if previous != current {
            log::warn!("bellman-ford from {}: negative cycle detected", source);
            return Err(Error::NegativeCycle);
        }

        Ok(ShortestPathResult {
            distances: previous,
            predecessors,
            source,
        })
    }
}
