use std::time::{Duration, Instant};
use rand::rngs::StdRng;
use rand::SeedableRng;
use shortpath::graph::generators::random_potential_graph;
use shortpath::graph::{DirectedGraph, Graph};
use shortpath::{FloydWarshall, Johnson};

// Function to time one all-pairs run and report how many pairs are connected
fn benchmark<F>(name: &str, graph: &DirectedGraph<f64>, run: F) -> Duration
where
    F: FnOnce(&DirectedGraph<f64>) -> shortpath::Result<usize>,
{
    println!("Running {} on graph with {} vertices...", name, graph.vertex_count());

    let start = Instant::now();
    let outcome = run(graph);
    let duration = start.elapsed();

    match outcome {
        Ok(reachable) => println!("  - Found {} reachable pairs in {:?}", reachable, duration),
        Err(err) => println!("  - Failed after {:?}: {}", duration, err),
    }

    duration
}

fn main() {
    env_logger::init();

    // Define graph sizes to test
    let graph_sizes = vec![50, 100, 200, 400];

    // Edge factor: average number of edges per vertex
    let edge_factor = 4;
    let max_cost = 100;

    println!("=====================================================");
    println!("Benchmark: Floyd-Warshall vs Johnson");
    println!("Edge factor: {} edges per vertex, negative edges, no negative cycles", edge_factor);
    println!("=====================================================");

    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let graph: DirectedGraph<f64> =
            random_potential_graph(size, size * edge_factor, max_cost, &mut rng);
        println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let fw_time = benchmark("Floyd-Warshall", &graph, |g| {
            let result = FloydWarshall::new().compute_all_pairs(g)?;
            Ok(result.distances.rows().flatten().filter(|d| d.is_finite()).count())
        });
        let johnson_time = benchmark("Johnson", &graph, |g| {
            let result = Johnson::new().compute_preserving(g)?;
            Ok(result.distances.rows().flatten().filter(|d| d.is_finite()).count())
        });
        let parallel_time = benchmark("Johnson (parallel)", &graph, |g| {
            let result = Johnson::new().with_parallel(true).compute_preserving(g)?;
            Ok(result.distances.rows().flatten().filter(|d| d.is_finite()).count())
        });

        results.push((size, fw_time, johnson_time, parallel_time));
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<12} | {:<12} | {:<12} | {:<10}",
        "Vertices", "FW (ms)", "Johnson (ms)", "Par (ms)", "Speedup"
    );
    println!("-----------------------------------------------------");

    for (size, fw_time, johnson_time, parallel_time) in &results {
        let speedup = fw_time.as_secs_f64() / johnson_time.as_secs_f64();
        println!(
            "{:<10} | {:<12} | {:<12} | {:<12} | {:<10.2}",
            size,
            fw_time.as_millis(),
            johnson_time.as_millis(),
            parallel_time.as_millis(),
            speedup
        );
    }
}
