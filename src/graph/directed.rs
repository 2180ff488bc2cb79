use crate::graph::traits::{Graph, MutableGraph};
use crate::{Error, Result};
use num_traits::Float;
use std::fmt::Debug;

/// A directed graph implementation using edge-indexed incidence lists.
///
/// Vertices are `0..vertex_count` and edges are `0..edge_capacity`, where both
/// counts are fixed at construction. Edges are appended with
/// [`MutableGraph::add_edge`] and never removed; only their costs can change.
/// Whether an edge is read as directed is up to the caller: an undirected edge
/// is modelled by adding both `(u, v)` and `(v, u)`.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectedGraph<W>
where
    W: Float + Debug,
{
    /// Number of vertices in the graph
    vertex_count: usize,

    /// Number of edges the graph was declared with
    edge_capacity: usize,

    /// `(tail, head)` for each edge index
    edges: Vec<(usize, usize)>,

    /// Cost for each edge index
    costs: Vec<W>,

    /// Incident edge indices for each vertex, both directions merged
    incidence: Vec<Vec<usize>>,
}

impl<W> DirectedGraph<W>
where
    W: Float + Debug,
{
    /// Creates a graph with `vertex_count` vertices that will hold exactly `edge_capacity` edges
    pub fn new(vertex_count: usize, edge_capacity: usize) -> Self {
        DirectedGraph {
            vertex_count,
            edge_capacity,
            edges: Vec::with_capacity(edge_capacity),
            costs: Vec::with_capacity(edge_capacity),
            incidence: vec![Vec::new(); vertex_count],
        }
    }

    /// Builds a complete graph from `(tail, head, cost)` triples
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let edges: Vec<_> = edges.into_iter().collect();
        let mut graph = DirectedGraph::new(vertex_count, edges.len());
        for (tail, head, cost) in edges {
            graph.add_edge(tail, head, cost)?;
        }
        Ok(graph)
    }

    /// Appends an edge with the default cost of one
    pub fn add_unit_edge(&mut self, tail: usize, head: usize) -> Result<usize> {
        self.add_edge(tail, head, W::one())
    }

    /// Number of edges the graph was declared with
    pub fn edge_capacity(&self) -> usize {
        self.edge_capacity
    }

    /// True once every declared edge has been added
    pub fn is_complete(&self) -> bool {
        self.edges.len() == self.edge_capacity
    }

    /// Validate that the graph doesn't have negative weights.
    ///
    /// Returns the first offending edge index, if any.
    pub fn validate_non_negative(&self) -> Option<usize> {
        self.costs.iter().position(|cost| *cost < W::zero())
    }

    /// Iterates `(idx, tail, head, cost)` over every edge in insertion order
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, usize, W)> + '_ {
        self.edges
            .iter()
            .zip(self.costs.iter())
            .enumerate()
            .map(|(idx, (&(tail, head), &cost))| (idx, tail, head, cost))
    }

    /// Copy of this graph with one extra vertex wired to every original vertex by a zero-cost edge.
    ///
    /// The extra vertex has index `vertex_count()`. Original edges keep their indices.
    pub fn with_virtual_source(&self) -> Self {
        let source = self.vertex_count;
        let mut augmented = DirectedGraph::new(
            self.vertex_count + 1,
            self.edges.len() + self.vertex_count,
        );
        for (_, tail, head, cost) in self.edges() {
            augmented.push_edge(tail, head, cost);
        }
        for v in 0..self.vertex_count {
            augmented.push_edge(source, v, W::zero());
        }
        augmented
    }

    fn push_edge(&mut self, tail: usize, head: usize, cost: W) -> usize {
        let idx = self.edges.len();
        self.edges.push((tail, head));
        self.costs.push(cost);
        self.incidence[tail].push(idx);
        if head != tail {
            self.incidence[head].push(idx);
        }
        idx
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Float + Debug,
{
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn edge(&self, idx: usize) -> (usize, usize) {
        self.edges[idx]
    }

    fn edge_cost(&self, idx: usize) -> W {
        self.costs[idx]
    }

    fn incident_edges(&self, vertex: usize) -> &[usize] {
        &self.incidence[vertex]
    }
}

impl<W> MutableGraph<W> for DirectedGraph<W>
where
    W: Float + Debug,
{
    /// Duplicate edges are not checked; each call appends a new edge.
    fn add_edge(&mut self, tail: usize, head: usize, cost: W) -> Result<usize> {
        if self.edges.len() == self.edge_capacity {
            return Err(Error::EdgeCapacityExceeded(self.edge_capacity));
        }
        if !self.has_vertex(tail) {
            return Err(Error::InvalidVertex(tail));
        }
        if !self.has_vertex(head) {
            return Err(Error::InvalidVertex(head));
        }
        Ok(self.push_edge(tail, head, cost))
    }

    fn set_edge_cost(&mut self, idx: usize, cost: W) {
        self.costs[idx] = cost;
    }
}
