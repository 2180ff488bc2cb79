use std::fmt::Debug;
use num_traits::Float;

use crate::graph::Graph;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::EdgeQueue;
use crate::{Error, Result};

/// Classic Dijkstra's algorithm implementation
///
/// Requires non-negative edge costs. By default the graph is scanned first and
/// a negative cost is rejected with [`Error::NegativeWeight`]; with the check
/// disabled a negative cost silently yields wrong distances.
#[derive(Debug, Clone, Copy)]
pub struct Dijkstra {
    check_weights: bool,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra { check_weights: true }
    }

    /// Enables or disables the up-front non-negative cost check
    pub fn with_weight_check(mut self, check_weights: bool) -> Self {
        self.check_weights = check_weights;
        self
    }

    fn check_non_negative<W, G>(graph: &G) -> Result<()>
    where
        W: Float + Debug,
        G: Graph<W>,
    {
        for edge in 0..graph.edge_count() {
            let cost = graph.edge_cost(edge);
            if cost < W::zero() {
                return Err(Error::NegativeWeight {
                    edge,
                    cost: cost.to_f64().unwrap_or(f64::NAN),
                });
            }
        }
        Ok(())
    }
}

impl Default for Dijkstra {
    fn default() -> Self {
        Self::new()
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Float + Debug,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound(source));
        }
        if self.check_weights {
            Self::check_non_negative(graph)?;
        }

        let n = graph.vertex_count();
        let mut distances = vec![W::infinity(); n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut settled = vec![false; n];
        let mut settled_count = 0;
        let mut queue = EdgeQueue::with_capacity(graph.edge_count());

        distances[source] = W::zero();
        settled[source] = true;
        settled_count += 1;
        relax_out_edges(graph, source, &mut distances, &mut predecessors, &mut queue);

        while settled_count < n {
            let Some((edge, _)) = queue.pop() else {
                break;
            };
            let v = graph.edge(edge).1;
            // Stale entry: v was settled through a cheaper candidate
            if settled[v] {
                continue;
            }
            settled[v] = true;
            settled_count += 1;
            relax_out_edges(graph, v, &mut distances, &mut predecessors, &mut queue);
        }

        log::trace!(
            "dijkstra from {}: settled {} of {} vertices",
            source,
            settled_count,
            n
        );

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
        })
    }
}

/// Relaxes the out-edges of a freshly settled vertex `u`
fn relax_out_edges<W, G>(
    graph: &G,
    u: usize,
    distances: &mut [W],
    predecessors: &mut [Option<usize>],
    queue: &mut EdgeQueue<W>,
) where
    W: Float + Debug,
    G: Graph<W>,
{
    for edge in graph.out_edges(u) {
        let v = graph.edge(edge).1;
        let candidate = distances[u] + graph.edge_cost(edge);
        if candidate < distances[v] {
            distances[v] = candidate;
            predecessors[v] = Some(u);
            queue.push(edge, candidate);
        }
    }
}
