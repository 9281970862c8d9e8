use num_traits::{Signed, Zero};
use std::fmt::Debug;

use crate::graph::Graph;
use crate::{Error, Result};

/// Result of a shortest path algorithm execution
///
/// The result owns its distance and predecessor storage outright; it stays
/// valid after the graph it was computed from is dropped or mutated.
#[derive(Debug, Clone)]
pub struct ShortestPathResult<W>
where
    W: Zero + Signed + Ord + Debug + Copy,
{
    /// Distances from source to each vertex; `None` marks unreachable
    pub distances: Vec<Option<W>>,

    /// Predecessor vertices in the shortest path tree; `None` for the
    /// source and for unreached vertices
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,
}

impl<W> ShortestPathResult<W>
where
    W: Zero + Signed + Ord + Debug + Copy,
{
    /// Fresh result with the source at distance zero and everything else at
    /// the unreachable sentinel
    pub(crate) fn new(vertex_count: usize, source: usize) -> Self {
        let mut distances = vec![None; vertex_count];
        distances[source] = Some(W::zero());

        ShortestPathResult {
            distances,
            predecessors: vec![None; vertex_count],
            source,
        }
    }

    /// Number of vertices the computation covered
    pub fn vertex_count(&self) -> usize {
        self.distances.len()
    }

    /// Shortest distance from the source to `vertex`
    ///
    /// `Ok(None)` means the vertex is unreachable from the source.
    pub fn distance(&self, vertex: usize) -> Result<Option<W>> {
        self.distances
            .get(vertex)
            .copied()
            .ok_or(Error::InvalidVertex(vertex))
    }

    /// Shortest path from the source to `target`, both ends inclusive
    ///
    /// `Ok(None)` when `target` is unreachable. The predecessor walk is
    /// bounded by the vertex count: a well-formed result never cycles, but
    /// a longer chain means corrupted state, and the walk stops with a
    /// warning instead of looping.
    pub fn path_to(&self, target: usize) -> Result<Option<Vec<usize>>> {
        if target >= self.distances.len() {
            return Err(Error::InvalidVertex(target));
        }
        if self.distances[target].is_none() {
            return Ok(None);
        }

        let mut path = Vec::new();
        let mut current = target;

        while current != self.source {
            path.push(current);
            match self.predecessors[current] {
                Some(pred) => current = pred,
                None => {
                    log::warn!(
                        "vertex {} has a finite distance but no predecessor chain to the source",
                        target
                    );
                    return Ok(None);
                }
            }
            if path.len() > self.distances.len() {
                log::warn!(
                    "predecessor chain for vertex {} exceeds the vertex count; aborting walk",
                    target
                );
                return Ok(None);
            }
        }

        path.push(self.source);
        path.reverse();
        Ok(Some(path))
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Zero + Signed + Ord + Debug + Copy,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
