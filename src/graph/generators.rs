use crate::graph::AdjacencyGraph;
use crate::Result;
use rand::prelude::*;

/// Generates a `width * height` 4-connected grid with unit edge weights
///
/// Vertex `(x, y)` gets id `y * width + x`; every connection is undirected.
pub fn grid_graph(width: usize, height: usize) -> Result<AdjacencyGraph<i64>> {
    let mut graph = AdjacencyGraph::new(width * height)?;

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;

            if x + 1 < width {
                graph.add_undirected_edge(vertex, vertex + 1, 1)?;
            }
            if y + 1 < height {
                graph.add_undirected_edge(vertex, vertex + width, 1)?;
            }
        }
    }

    Ok(graph)
}

/// Generates a random directed graph from a fixed seed
///
/// Every vertex gets `edges_per_vertex` outgoing edges to uniformly random
/// targets with weights in `1..=max_weight`. Seeding keeps the equivalence
/// tests and benchmarks reproducible.
pub fn random_graph(
    n: usize,
    edges_per_vertex: usize,
    max_weight: i64,
    seed: u64,
) -> Result<AdjacencyGraph<i64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = AdjacencyGraph::new(n)?;

    for src in 0..n {
        for _ in 0..edges_per_vertex {
            let dst = rng.gen_range(0..n);
            let weight = rng.gen_range(1..=max_weight);
            graph.add_directed_edge(src, dst, weight)?;
        }
    }

    Ok(graph)
}
