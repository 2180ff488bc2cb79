mod common;

use shortpath::graph::generators::{grid_graph, random_graph, random_potential_graph};
use shortpath::graph::{DirectedGraph, Graph, MutableGraph};
use shortpath::Error;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_add_edge_and_accessors() {
    let mut graph: DirectedGraph<f64> = DirectedGraph::new(4, 2);
    assert_eq!(graph.add_edge(0, 1, 10.0), Ok(0));
    assert_eq!(graph.add_edge(1, 2, 40.0), Ok(1));

    assert_eq!(graph.vertex_count(), 4);
    assert_eq!(graph.edge_count(), 2);
    assert!(graph.is_complete());
    assert_eq!(graph.edge(1), (1, 2));
    assert_eq!(graph.edge_cost(1), 40.0);
    assert_eq!(graph.incident_edges(0), &[0]);
    assert_eq!(graph.incident_edges(1), &[0, 1]);
    assert_eq!(graph.incident_edges(2), &[1]);
    assert!(graph.incident_edges(3).is_empty());
    assert_eq!(graph.in_edges(1).collect::<Vec<_>>(), vec![0]);
    assert_eq!(graph.out_edges(1).collect::<Vec<_>>(), vec![1]);
}

#[test]
fn test_out_and_in_edges_split_incidence() {
    let graph = common::g0nn();

    let out: Vec<Vec<usize>> = (0..5).map(|v| graph.out_edges(v).collect()).collect();
    let into: Vec<Vec<usize>> = (0..5).map(|v| graph.in_edges(v).collect()).collect();

    assert_eq!(out, vec![vec![0, 2], vec![1], vec![3, 4], vec![5], vec![]]);
    assert_eq!(into, vec![vec![], vec![0, 3], vec![2], vec![4], vec![1, 5]]);
    assert_eq!(graph.incident_edges(1), &[0, 1, 3]);
}

#[test]
fn test_every_edge_listed_at_both_endpoints_once() {
    let mut rng = StdRng::seed_from_u64(11);
    let graph: DirectedGraph<f64> = random_graph(20, 60, 9, &mut rng);

    for (idx, tail, head, _) in graph.edges() {
        let at_tail = graph.incident_edges(tail).iter().filter(|&&e| e == idx).count();
        let at_head = graph.incident_edges(head).iter().filter(|&&e| e == idx).count();
        assert_eq!(at_tail, 1);
        assert_eq!(at_head, 1);
    }
}

#[test]
fn test_self_loop_listed_once() {
    let mut graph: DirectedGraph<f64> = DirectedGraph::new(2, 2);
    graph.add_edge(0, 0, 3.0).unwrap();
    graph.add_edge(0, 1, 1.0).unwrap();

    assert_eq!(graph.incident_edges(0), &[0, 1]);
    assert_eq!(graph.out_edges(0).collect::<Vec<_>>(), vec![0, 1]);
    assert_eq!(graph.in_edges(0).collect::<Vec<_>>(), vec![0]);
}

#[test]
fn test_add_edge_rejects_overflow_and_bad_vertices() {
    let mut graph: DirectedGraph<f64> = DirectedGraph::new(2, 1);
    assert_eq!(graph.add_edge(0, 2, 1.0), Err(Error::InvalidVertex(2)));
    assert_eq!(graph.add_edge(5, 1, 1.0), Err(Error::InvalidVertex(5)));
    assert!(!graph.is_complete());

    graph.add_edge(0, 1, 1.0).unwrap();
    assert_eq!(graph.add_edge(1, 0, 1.0), Err(Error::EdgeCapacityExceeded(1)));
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_unit_edge_defaults_cost_to_one() {
    let mut graph: DirectedGraph<f64> = DirectedGraph::new(2, 1);
    let edge = graph.add_unit_edge(1, 0).unwrap();
    assert_eq!(graph.edge_cost(edge), 1.0);
}

#[test]
fn test_clone_is_deep() {
    let original = common::g0();
    let mut copy = original.clone();
    assert_eq!(copy, original);

    copy.set_edge_cost(0, 100.0);
    assert_eq!(original.edge_cost(0), -2.0);
    assert_eq!(copy.edge_cost(0), 100.0);
    assert_eq!(copy.edge(0), original.edge(0));
}

#[test]
fn test_validate_non_negative_reports_first_offender() {
    assert_eq!(common::g0nn().validate_non_negative(), None);
    assert_eq!(common::g0().validate_non_negative(), Some(0));
    assert_eq!(common::gc().validate_non_negative(), Some(0));
}

#[test]
fn test_virtual_source_wires_every_vertex() {
    let graph = common::g0();
    let augmented = graph.with_virtual_source();

    assert_eq!(augmented.vertex_count(), 5);
    assert_eq!(augmented.edge_count(), 9);
    assert!(augmented.is_complete());
    for (idx, tail, head, cost) in graph.edges() {
        assert_eq!(augmented.edge(idx), (tail, head));
        assert_eq!(augmented.edge_cost(idx), cost);
    }
    let heads: Vec<usize> = augmented.out_edges(4).map(|e| augmented.edge(e).1).collect();
    assert_eq!(heads, vec![0, 1, 2, 3]);
    assert!(augmented.out_edges(4).all(|e| augmented.edge_cost(e) == 0.0));
    assert_eq!(augmented.in_edges(4).count(), 0);
}

#[test]
fn test_generators_fill_declared_edges() {
    let mut rng = StdRng::seed_from_u64(3);
    let plain: DirectedGraph<f64> = random_graph(10, 30, 5, &mut rng);
    assert!(plain.is_complete());
    assert_eq!(plain.validate_non_negative(), None);
    assert!(plain.edges().all(|(_, tail, head, _)| tail != head));

    let shifted: DirectedGraph<f64> = random_potential_graph(10, 30, 5, &mut rng);
    assert!(shifted.is_complete());
    assert_eq!(shifted.edge_count(), 30);

    let grid: DirectedGraph<f64> = grid_graph(3, 2);
    assert_eq!(grid.vertex_count(), 6);
    // 2 * (2 * 2 horizontal + 3 vertical)
    assert_eq!(grid.edge_count(), 14);
    assert!(grid.is_complete());
}
