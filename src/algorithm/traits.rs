use std::fmt::Debug;
use num_traits::Float;
use crate::graph::Graph;
use crate::Result;

/// Result of a single-source shortest path algorithm execution
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathResult<W>
where
    W: Float + Debug,
{
    /// Distances from source to each vertex; infinity marks an unreachable vertex
    pub distances: Vec<W>,

    /// Predecessor vertices in the shortest path tree; `None` for the source and unreached vertices
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,
}

impl<W> ShortestPathResult<W>
where
    W: Float + Debug,
{
    /// Distance to `target`, or `None` if it is unreachable
    pub fn distance(&self, target: usize) -> Option<W> {
        self.distances
            .get(target)
            .copied()
            .filter(|d| d.is_finite())
    }

    /// True if `target` was reached from the source
    pub fn is_reachable(&self, target: usize) -> bool {
        self.distance(target).is_some()
    }
}

/// Trait for single-source shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Debug,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<W>, target: usize) -> Option<Vec<usize>> {
        walk_predecessors(&result.predecessors, result.source, target)
    }
}

/// Rebuilds `source -> target` by following predecessor links back from `target`.
///
/// Returns `Some(vec![source])` when `target == source` and `None` when the chain
/// does not lead back to the source.
pub(crate) fn walk_predecessors(
    predecessors: &[Option<usize>],
    source: usize,
    target: usize,
) -> Option<Vec<usize>> {
    if target >= predecessors.len() {
        return None;
    }

    let mut path = vec![target];
    let mut current = target;
    while current != source {
        current = predecessors[current]?;
        path.push(current);

        // A well-formed tree never needs more than n steps
        if path.len() > predecessors.len() {
            log::warn!(
                "predecessor chain from {} to {} does not terminate",
                source,
                target
            );
            return None;
        }
    }

    path.reverse();
    Some(path)
}

/// Sums edge costs along `path`, taking the cheapest edge between each consecutive pair.
///
/// Returns zero for paths with fewer than two vertices and `None` if two
/// consecutive vertices are not joined by an edge.
pub fn path_cost<W, G>(graph: &G, path: &[usize]) -> Option<W>
where
    W: Float + Debug,
    G: Graph<W>,
{
    path.windows(2).try_fold(W::zero(), |total, pair| {
        let (from, to) = (pair[0], pair[1]);
        graph
            .out_edges(from)
            .filter(|&e| graph.edge(e).1 == to)
            .map(|e| graph.edge_cost(e))
            .fold(None, |best: Option<W>, cost| {
                Some(best.map_or(cost, |b| b.min(cost)))
            })
            .map(|cost| total + cost)
    })
}
