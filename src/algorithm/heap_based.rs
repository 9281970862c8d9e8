use num_traits::{Signed, Zero};
use std::fmt::Debug;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::{IndexedMinHeap, Key};
use crate::graph::Graph;
use crate::{Error, Result};

/// Indexed-heap Dijkstra
///
/// Replaces the linear scan of [`ArrayDijkstra`](crate::ArrayDijkstra) with
/// an [`IndexedMinHeap`]: extract-min and decrease-key both run in
/// O(log V), for O((V+E) log V) overall. Each run owns one heap, seeded
/// with every vertex at the infinite sentinel, and drains it to completion.
#[derive(Debug, Default)]
pub struct HeapDijkstra;

impl HeapDijkstra {
    /// Creates a new heap-based strategy instance
    pub fn new() -> Self {
        HeapDijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for HeapDijkstra
where
    W: Zero + Signed + Ord + Debug + Copy,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "HeapDijkstra"
    }

    /// Distances are undefined when the graph carries negative weights.
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }

        let n = graph.vertex_count();
        let mut result = ShortestPathResult::new(n, source);
        let mut settled = 0usize;

        let mut queue = IndexedMinHeap::new(n, Key::Infinite);
        queue.decrease_key(source, Key::Finite(W::zero()));

        while let Some((u, key)) = queue.extract_min() {
            // An infinite minimum means everything still queued is
            // unreachable from the source.
            let Key::Finite(dist_u) = key else {
                break;
            };
            settled += 1;

            for (v, weight) in graph.outgoing_edges(u) {
                // Heap membership doubles as the "not yet finalized" test.
                if !queue.contains(v) {
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
                    queue.decrease_key(v, Key::Finite(candidate));
                }
            }
        }

        log::debug!(
            "heap-based run from source {} settled {} of {} vertices",
            source,
            settled,
            n
        );

        Ok(result)
    }
}
