#![allow(dead_code)]

use shortpath::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use shortpath::{BellmanFord, Dijkstra, DirectedGraph};

pub const INF: f64 = f64::INFINITY;

/// 4 vertices, 5 edges, one negative edge, no negative cycle
pub fn g0() -> DirectedGraph<f64> {
    DirectedGraph::from_edges(
        4,
        vec![(0, 2, -2.0), (1, 0, 4.0), (1, 2, 3.0), (2, 3, 2.0), (3, 1, -1.0)],
    )
    .unwrap()
}

/// 5 vertices, 6 edges, all costs non-negative
pub fn g0nn() -> DirectedGraph<f64> {
    DirectedGraph::from_edges(
        5,
        vec![
            (0, 1, 4.0),
            (1, 4, 3.0),
            (0, 2, 1.0),
            (2, 1, 2.0),
            (2, 3, 2.0),
            (3, 4, 3.0),
        ],
    )
    .unwrap()
}

/// 6 vertices, 7 edges, several negative edges, vertex 5 only has out-edges
pub fn gc() -> DirectedGraph<f64> {
    DirectedGraph::from_edges(
        6,
        vec![
            (0, 1, -2.0),
            (1, 2, -1.0),
            (2, 0, 4.0),
            (2, 3, 2.0),
            (2, 4, -3.0),
            (5, 3, 1.0),
            (5, 4, -4.0),
        ],
    )
    .unwrap()
}

/// Two vertices joined by a cycle of total cost -1
pub fn negative_two_cycle() -> DirectedGraph<f64> {
    DirectedGraph::from_edges(2, vec![(0, 1, 1.0), (1, 0, -2.0)]).unwrap()
}

pub fn dijkstra(
    algorithm: &Dijkstra,
    graph: &DirectedGraph<f64>,
    source: usize,
) -> shortpath::Result<ShortestPathResult<f64>> {
    <Dijkstra as ShortestPathAlgorithm<f64, DirectedGraph<f64>>>::compute_shortest_paths(
        algorithm, graph, source,
    )
}

pub fn bellman_ford(
    graph: &DirectedGraph<f64>,
    source: usize,
) -> shortpath::Result<ShortestPathResult<f64>> {
    <BellmanFord as ShortestPathAlgorithm<f64, DirectedGraph<f64>>>::compute_shortest_paths(
        &BellmanFord::new(),
        graph,
        source,
    )
}
