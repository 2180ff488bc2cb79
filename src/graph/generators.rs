use crate::graph::{DirectedGraph, MutableGraph};
use num_traits::Float;
use rand::Rng;
use std::fmt::Debug;

fn cast<W: Float>(value: i64) -> W {
    W::from(value).unwrap_or_else(W::zero)
}

/// Generates a random directed graph with `n` vertices and `m` edges.
/// Costs are integers drawn from `0..=max_cost`, so Dijkstra's precondition holds.
/// Self-loops and parallel edges are avoided whenever the graph has room for them.
pub fn random_graph<W, R>(n: usize, m: usize, max_cost: i64, rng: &mut R) -> DirectedGraph<W>
where
    W: Float + Debug,
    R: Rng + ?Sized,
{
    build_random(n, m, rng, |rng, _, _| cast(rng.gen_range(0..=max_cost)))
}

/// Generates a random graph with negative edges but no negative cycle.
///
/// Each vertex gets a hidden potential `p` in `0..=max_cost` and every edge
/// `(u, v)` costs `base + p[u] - p[v]` with `base` in `0..=max_cost`. Any cycle
/// then sums to the sum of its `base` terms, which is never negative.
pub fn random_potential_graph<W, R>(
    n: usize,
    m: usize,
    max_cost: i64,
    rng: &mut R,
) -> DirectedGraph<W>
where
    W: Float + Debug,
    R: Rng + ?Sized,
{
    let potentials: Vec<i64> = (0..n).map(|_| rng.gen_range(0..=max_cost)).collect();
    build_random(n, m, rng, |rng, u, v| {
        cast(rng.gen_range(0..=max_cost) + potentials[u] - potentials[v])
    })
}

/// Generates a grid graph of `width * height` vertices with unit-cost edges in both
/// directions between horizontal and vertical neighbours.
pub fn grid_graph<W>(width: usize, height: usize) -> DirectedGraph<W>
where
    W: Float + Debug,
{
    let n = width * height;
    let horizontal = width.saturating_sub(1) * height;
    let vertical = height.saturating_sub(1) * width;
    let mut graph = DirectedGraph::new(n, 2 * (horizontal + vertical));

    // Helper function to get vertex index from grid coordinates
    let index = |x: usize, y: usize| y * width + x;

    for y in 0..height {
        for x in 0..width {
            let current = index(x, y);
            if x + 1 < width {
                let neighbor = index(x + 1, y);
                let _ = graph.add_unit_edge(current, neighbor);
                let _ = graph.add_unit_edge(neighbor, current);
            }
            if y + 1 < height {
                let neighbor = index(x, y + 1);
                let _ = graph.add_unit_edge(current, neighbor);
                let _ = graph.add_unit_edge(neighbor, current);
            }
        }
    }

    graph
}

fn build_random<W, R, F>(n: usize, m: usize, rng: &mut R, mut cost: F) -> DirectedGraph<W>
where
    W: Float + Debug,
    R: Rng + ?Sized,
    F: FnMut(&mut R, usize, usize) -> W,
{
    let mut graph = DirectedGraph::new(n, if n == 0 { 0 } else { m });
    if n == 0 {
        return graph;
    }

    let simple_capacity = n * (n - 1);
    let mut seen = std::collections::HashSet::new();
    while !graph.is_complete() {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if seen.len() < simple_capacity && (u == v || !seen.insert((u, v))) {
            continue;
        }
        let weight = cost(rng, u, v);
        let _ = graph.add_edge(u, v, weight);
    }

    graph
}
