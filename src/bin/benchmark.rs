use rand::prelude::*;
use rayon::prelude::*;
use road_graph::graph::generators::{generate_road_grid, RoadGridOptions};
use road_graph::{DijkstraPathFinder, Graph, PathFinding, VertexIndex};
use std::time::{Duration, Instant};

/// Outcome of one batch of queries
struct BatchResult {
    found: usize,
    not_found: usize,
    elapsed: Duration,
}

fn random_queries(graph: &Graph, count: usize, rng: &mut StdRng) -> Vec<(VertexIndex, VertexIndex)> {
    let vertices: Vec<VertexIndex> = graph.vertex_indices().collect();
    (0..count)
        .filter_map(|_| Some((*vertices.choose(rng)?, *vertices.choose(rng)?)))
        .collect()
}

fn run_sequential(graph: &Graph, queries: &[(VertexIndex, VertexIndex)]) -> BatchResult {
    let finder = DijkstraPathFinder::new(graph);
    let start = Instant::now();
    let found = queries
        .iter()
        .filter(|(s, t)| finder.find_path(*s, *t).is_ok())
        .count();
    BatchResult {
        found,
        not_found: queries.len() - found,
        elapsed: start.elapsed(),
    }
}

fn run_parallel(graph: &Graph, queries: &[(VertexIndex, VertexIndex)]) -> BatchResult {
    let finder = DijkstraPathFinder::new(graph);
    let start = Instant::now();
    let found = queries
        .par_iter()
        .filter(|(s, t)| finder.find_path(*s, *t).is_ok())
        .count();
    BatchResult {
        found,
        not_found: queries.len() - found,
        elapsed: start.elapsed(),
    }
}

fn main() {
    env_logger::init();

    // Grid sizes to test (intersections per side)
    let grid_sizes = vec![50, 100, 200, 400];
    let query_count = 200;

    println!("=====================================================");
    println!("Benchmark: Dijkstra point-to-point queries on road grids");
    println!("Queries per grid: {}", query_count);
    println!("=====================================================");

    let mut rng = StdRng::seed_from_u64(42);
    let mut results = Vec::new();

    for &side in &grid_sizes {
        let options = RoadGridOptions {
            width: side,
            height: side,
            ..RoadGridOptions::default()
        };
        let graph = match generate_road_grid(options, &mut rng) {
            Ok(graph) => graph,
            Err(err) => {
                eprintln!("Cannot generate {}x{} grid: {}", side, side, err);
                continue;
            }
        };
        let queries = random_queries(&graph, query_count, &mut rng);

        println!(
            "\nGrid {}x{}: {} vertices, {} edges",
            side,
            side,
            graph.vertex_count(),
            graph.edge_count()
        );

        let sequential = run_sequential(&graph, &queries);
        let parallel = run_parallel(&graph, &queries);
        println!(
            "  - sequential: {} found, {} unreachable in {:?}",
            sequential.found, sequential.not_found, sequential.elapsed
        );
        println!(
            "  - parallel:   {} found, {} unreachable in {:?}",
            parallel.found, parallel.not_found, parallel.elapsed
        );

        results.push((graph.vertex_count(), sequential.elapsed, parallel.elapsed));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<15} | {:<15} | {:<10}", "Vertices", "Sequential (ms)", "Parallel (ms)", "Speedup");
    println!("-----------------------------------------------------");

    for (vertices, sequential, parallel) in &results {
        let speedup = sequential.as_secs_f64() / parallel.as_secs_f64().max(f64::EPSILON);
        println!(
            "{:<10} | {:<15} | {:<15} | {:<10.2}",
            vertices,
            sequential.as_millis(),
            parallel.as_millis(),
            speedup
        );
    }
}
