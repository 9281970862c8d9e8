use num_traits::{Signed, Zero};
use std::fmt::Debug;

/// Trait representing a weighted directed graph with a fixed vertex set
pub trait Graph<W>: Debug
where
    W: Zero + Signed + Ord + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool;

    /// Returns an iterator over the outgoing edges from a vertex
    ///
    /// Each call yields the sequence from the start. The order is
    /// implementation-defined: stable for a fixed graph state, and without
    /// effect on shortest-path correctness.
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool;

    /// Gets the weight of an edge if it exists
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W>;
}
