use std::fmt::Debug;
use num_traits::Float;

use crate::data_structures::Matrix;
use crate::graph::Graph;
use crate::{Error, Result};

/// All-pairs shortest path distances together with Floyd-Warshall's
/// intermediate-vertex hints.
#[derive(Debug, Clone, PartialEq)]
pub struct FloydWarshallResult<W>
where
    W: Float + Debug,
{
    /// `distances[(i, j)]` is the cost of the shortest `i -> j` path, infinity if none exists
    pub distances: Matrix<W>,

    /// `intermediates[(i, j)]` is the highest-indexed interior vertex of the
    /// shortest `i -> j` path; `None` when the path is a direct edge or `i == j`
    pub intermediates: Matrix<Option<usize>>,
}

impl<W> FloydWarshallResult<W>
where
    W: Float + Debug,
{
    /// Distance from `from` to `to`, or `None` if `to` is unreachable
    pub fn distance(&self, from: usize, to: usize) -> Option<W> {
        Some(self.distances[(from, to)]).filter(|d| d.is_finite())
    }

    /// Expands the hints into the full vertex sequence of the shortest `from -> to` path.
    ///
    /// The path is empty when `from == to` and `None` when `to` is unreachable.
    pub fn path(&self, from: usize, to: usize) -> Option<Vec<usize>> {
        if from == to {
            return Some(Vec::new());
        }
        self.distance(from, to)?;

        let mut path = vec![from];
        self.expand(from, to, &mut path);
        Some(path)
    }

    // Appends the vertices after `from` up to and including `to`
    fn expand(&self, from: usize, to: usize, path: &mut Vec<usize>) {
        if from == to {
            return;
        }
        match self.intermediates[(from, to)] {
            None => path.push(to),
            Some(via) => {
                self.expand(from, via, path);
                self.expand(via, to, path);
            }
        }
    }
}

/// Floyd-Warshall all-pairs shortest paths.
///
/// Iteration `k` allows vertices `0..=k` as interior points. Only the table from
/// iteration `k - 1` is read, so two n x n tables swap roles. The computation
/// fails with [`Error::NegativeCycle`] if any diagonal entry ends up negative.
#[derive(Debug, Default, Clone, Copy)]
pub struct FloydWarshall;

impl FloydWarshall {
    /// Creates a new Floyd-Warshall algorithm instance
    pub fn new() -> Self {
        FloydWarshall
    }

    /// Get the name of the algorithm
    pub fn name(&self) -> &'static str {
        "Floyd-Warshall"
    }

    /// Computes distances and intermediate-vertex hints for every ordered vertex pair
    pub fn compute_all_pairs<W, G>(&self, graph: &G) -> Result<FloydWarshallResult<W>>
    where
        W: Float + Debug,
        G: Graph<W>,
    {
        let n = graph.vertex_count();
        log::debug!(
            "floyd-warshall: {} vertices, {} edges",
            n,
            graph.edge_count()
        );

        let mut previous = Matrix::filled(n, W::infinity());
        let mut intermediates = Matrix::filled(n, None);
        for i in 0..n {
            previous[(i, i)] = W::zero();
        }
        // Parallel edges: the last one added wins. A self-loop only matters
        // when it is negative, since the empty path already costs zero.
        for edge in 0..graph.edge_count() {
            let (tail, head) = graph.edge(edge);
            let cost = graph.edge_cost(edge);
            if tail != head || cost < previous[(tail, head)] {
                previous[(tail, head)] = cost;
            }
        }
        let mut current = previous.clone();

        for k in 0..n {
            for i in 0..n {
                let through_k = previous[(i, k)];
                for j in 0..n {
                    let candidate = through_k + previous[(k, j)];
                    if candidate < previous[(i, j)] {
                        current[(i, j)] = candidate;
                        intermediates[(i, j)] = Some(k);
                    } else {
                        current[(i, j)] = previous[(i, j)];
                    }
                }
            }
            std::mem::swap(&mut previous, &mut current);
        }

        if let Some(v) = (0..n).find(|&v| previous[(v, v)] < W::zero()) {
            log::warn!("floyd-warshall: negative cycle through vertex {}", v);
            return Err(Error::NegativeCycle);
        }

        Ok(FloydWarshallResult {
            distances: previous,
            intermediates,
        })
    }
}
