use std::fmt::Debug;
use num_traits::Float;

use crate::Result;

/// Trait representing a weighted directed graph whose edges are addressed by index
pub trait Graph<W>: Debug
where
    W: Float + Debug,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges added so far
    fn edge_count(&self) -> usize;

    /// Returns `(tail, head)` for the edge at `idx`
    fn edge(&self, idx: usize) -> (usize, usize);

    /// Returns the cost of the edge at `idx`
    fn edge_cost(&self, idx: usize) -> W;

    /// Returns the indices of every edge touching `vertex`, in insertion order.
    ///
    /// Both directions are merged. A self-loop is listed once.
    fn incident_edges(&self, vertex: usize) -> &[usize];

    /// Returns the indices of the edges leaving `vertex`
    fn out_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(
            self.incident_edges(vertex)
                .iter()
                .copied()
                .filter(move |&e| self.edge(e).0 == vertex),
        )
    }

    /// Returns the indices of the edges entering `vertex`
    fn in_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(
            self.incident_edges(vertex)
                .iter()
                .copied()
                .filter(move |&e| self.edge(e).1 == vertex),
        )
    }

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph<W>: Graph<W>
where
    W: Float + Debug,
{
    /// Appends a directed edge and returns its index
    fn add_edge(&mut self, tail: usize, head: usize, cost: W) -> Result<usize>;

    /// Overwrites the cost of the edge at `idx`
    fn set_edge_cost(&mut self, idx: usize, cost: W);
}
