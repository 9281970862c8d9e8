//! Classic SSSP - Dijkstra's algorithm over adjacency-list graphs
//!
//! This library implements the single-source shortest path (SSSP) problem
//! with two interchangeable strategies sharing one result type:
//!
//! - [`ArrayDijkstra`] selects the next vertex with an O(V) linear scan,
//!   O(V²) overall. Simple, and competitive on dense graphs.
//! - [`HeapDijkstra`] drives an indexed binary min-heap with a true
//!   decrease-key, O((V+E) log V) overall. The better choice on sparse
//!   graphs.
//!
//! Both strategies produce identical distances for the same graph and
//! source. Edge weights may be any signed `Ord` numeric type; negative
//! weights are accepted at insertion with a warning, but Dijkstra's
//! correctness guarantee only covers non-negative weights.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    array_based::ArrayDijkstra, heap_based::HeapDijkstra, ShortestPathAlgorithm,
    ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::adjacency::AdjacencyGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex count: {0}")]
    InvalidVertexCount(usize),

    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Source vertex not found in graph")]
    SourceNotFound,
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
