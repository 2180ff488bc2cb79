use std::fmt::Debug;
use num_traits::Float;
use rayon::prelude::*;

use crate::algorithm::bellman_ford::BellmanFord;
use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::traits::walk_predecessors;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::Matrix;
use crate::graph::{DirectedGraph, Graph, MutableGraph};
use crate::Result;

/// All-pairs shortest paths produced by Johnson's algorithm
#[derive(Debug, Clone, PartialEq)]
pub struct JohnsonResult<W>
where
    W: Float + Debug,
{
    /// `distances[(i, j)]` is the cost of the shortest `i -> j` path, infinity if none exists
    pub distances: Matrix<W>,

    /// `predecessors[(i, j)]` is the vertex before `j` on the shortest path from `i`
    pub predecessors: Matrix<Option<usize>>,

    /// Vertex potentials `h` used to reweight the edges
    potentials: Vec<W>,
}

impl<W> JohnsonResult<W>
where
    W: Float + Debug,
{
    /// Distance from `from` to `to`, or `None` if `to` is unreachable
    pub fn distance(&self, from: usize, to: usize) -> Option<W> {
        Some(self.distances[(from, to)]).filter(|d| d.is_finite())
    }

    /// Shortest `from -> to` path following the predecessor row of `from`.
    ///
    /// The path is `[from]` when `from == to` and `None` when `to` is unreachable.
    pub fn path(&self, from: usize, to: usize) -> Option<Vec<usize>> {
        walk_predecessors(self.predecessors.row(from), from, to)
    }

    /// Shortest distance from the virtual source to each vertex
    pub fn potentials(&self) -> &[W] {
        &self.potentials
    }
}

/// Johnson's all-pairs shortest path algorithm for sparse graphs.
///
/// Bellman-Ford from a virtual source yields potentials `h`. Every edge
/// `(u, v)` is then reweighted to `cost + h[u] - h[v]`, which is never
/// negative, and Dijkstra runs once from each vertex. Distances are mapped
/// back with `raw + h[j] - h[i]`.
///
/// [`Johnson::compute_all_pairs`] leaves the reweighted costs in the caller's
/// graph. Running it again on the same graph returns the reweighted
/// distances, not the original ones. Use [`Johnson::compute_preserving`] or
/// clone the graph first when the original costs are still needed.
#[derive(Debug, Default, Clone, Copy)]
pub struct Johnson {
    parallel: bool,
}

impl Johnson {
    /// Creates a new Johnson algorithm instance
    pub fn new() -> Self {
        Johnson { parallel: false }
    }

    /// Runs the per-vertex Dijkstra passes on the rayon thread pool
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Get the name of the algorithm
    pub fn name(&self) -> &'static str {
        "Johnson"
    }

    /// Runs Johnson on a clone so the caller's edge costs are left untouched
    pub fn compute_preserving<W>(&self, graph: &DirectedGraph<W>) -> Result<JohnsonResult<W>>
    where
        W: Float + Debug + Send + Sync,
    {
        let mut working = graph.clone();
        self.compute_all_pairs(&mut working)
    }

    /// Computes all-pairs distances and predecessors, reweighting `graph` in place.
    ///
    /// On [`crate::Error::NegativeCycle`] the graph is left unmodified.
    pub fn compute_all_pairs<W>(&self, graph: &mut DirectedGraph<W>) -> Result<JohnsonResult<W>>
    where
        W: Float + Debug + Send + Sync,
    {
        let n = graph.vertex_count();
        log::debug!(
            "johnson: {} vertices, {} edges, parallel={}",
            n,
            graph.edge_count(),
            self.parallel
        );

        let augmented = graph.with_virtual_source();
        let bellman_ford = BellmanFord::new();
        let mut potentials =
            <BellmanFord as ShortestPathAlgorithm<W, DirectedGraph<W>>>::compute_shortest_paths(
                &bellman_ford,
                &augmented,
                n,
            )?
            .distances;
        potentials.truncate(n);

        for edge in 0..graph.edge_count() {
            let (tail, head) = graph.edge(edge);
            let reweighted = graph.edge_cost(edge) + potentials[tail] - potentials[head];
            graph.set_edge_cost(edge, reweighted);
        }

        let rows = self.dijkstra_from_every_vertex(graph)?;

        let mut distances = Matrix::filled(n, W::infinity());
        let mut predecessors = Matrix::filled(n, None);
        for (i, row) in rows.into_iter().enumerate() {
            for j in 0..n {
                distances[(i, j)] = row.distances[j] + potentials[j] - potentials[i];
                predecessors[(i, j)] = row.predecessors[j];
            }
        }

        Ok(JohnsonResult {
            distances,
            predecessors,
            potentials,
        })
    }

    fn dijkstra_from_every_vertex<W>(
        &self,
        graph: &DirectedGraph<W>,
    ) -> Result<Vec<ShortestPathResult<W>>>
    where
        W: Float + Debug + Send + Sync,
    {
        // Reweighted costs are non-negative in exact arithmetic; rounding may
        // leave tiny negative values that the check would reject.
        let dijkstra = Dijkstra::new().with_weight_check(false);
        let run = |source: usize| {
            <Dijkstra as ShortestPathAlgorithm<W, DirectedGraph<W>>>::compute_shortest_paths(
                &dijkstra, graph, source,
            )
        };
        let sources = 0..graph.vertex_count();
        if self.parallel {
            sources.into_par_iter().map(run).collect()
        } else {
            sources.map(run).collect()
        }
    }
}
