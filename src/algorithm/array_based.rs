use num_traits::{Signed, Zero};
use std::fmt::Debug;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::Graph;
use crate::{Error, Result};

/// Linear-scan Dijkstra
///
/// Selects the next vertex with an O(V) sweep over the unprocessed set,
/// O(V²) overall. The sweep is the whole cost: no queue maintenance, no
/// extra allocation beyond the processed flags, which keeps it competitive
/// on dense graphs where E approaches V². See `benches/strategies.rs` for
/// the comparison against [`HeapDijkstra`](crate::HeapDijkstra).
#[derive(Debug, Default)]
pub struct ArrayDijkstra;

impl ArrayDijkstra {
    /// Creates a new array-based strategy instance
    pub fn new() -> Self {
        ArrayDijkstra
    }
}

/// Unprocessed vertex with the smallest finite distance, if one exists
///
/// Skipping infinite entries folds both loop exits into one: `None` covers
/// "no unprocessed vertex left" and "everything left is unreachable".
fn min_unprocessed<W>(distances: &[Option<W>], processed: &[bool]) -> Option<(usize, W)>
where
    W: Ord + Copy,
{
    let mut best: Option<(usize, W)> = None;

    for (v, dist) in distances.iter().enumerate() {
        if processed[v] {
            continue;
        }
        let Some(dist) = *dist else {
            continue;
        };
        match best {
            Some((_, best_dist)) if best_dist <= dist => {}
            _ => best = Some((v, dist)),
        }
    }

    best
}

impl<W, G> ShortestPathAlgorithm<W, G> for ArrayDijkstra
where
    W: Zero + Signed + Ord + Debug + Copy,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "ArrayDijkstra"
    }

    /// Distances are undefined when the graph carries negative weights.
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }

        let n = graph.vertex_count();
        let mut result = ShortestPathResult::new(n, source);
        let mut processed = vec![false; n];
        let mut settled = 0usize;

        for _ in 0..n {
            let Some((u, dist_u)) = min_unprocessed(&result.distances, &processed) else {
                break;
            };

            // u's distance is final: every other unprocessed vertex sits at
            // least as far away, and weights are non-negative.
            processed[u] = true;
            settled += 1;

            for (v, weight) in graph.outgoing_edges(u) {
                if processed[v] {
                    continue;
                }

                let candidate = dist_u + weight;
                let improved = match result.distances[v] {
                    None => true,
                    Some(current) => candidate < current,
                };
                if improved {
                    result.distances[v] = Some(candidate);
                    result.predecessors[v] = Some(u);
                }
            }
        }

        log::debug!(
            "array-based run from source {} settled {} of {} vertices",
            source,
            settled,
            n
        );

        Ok(result)
    }
}
