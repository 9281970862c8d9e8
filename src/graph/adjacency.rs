use crate::graph::traits::Graph;
use crate::{Error, Result};
use num_traits::{Signed, Zero};
use std::fmt::Debug;

/// Default upper bound on vertex counts accepted by [`AdjacencyGraph::new`]
///
/// Guards against unbounded allocation from a corrupt or hostile count.
/// Workloads that genuinely need more vertices can raise the bound with
/// [`AdjacencyGraph::with_vertex_cap`].
pub const MAX_VERTICES: usize = 1 << 24;

/// A directed weighted graph over a fixed vertex set, stored as adjacency lists
///
/// Vertex ids are dense: every id in `0..vertex_count` is a vertex, and no
/// others. Edges can be added but never removed, so the edge count is
/// monotonic. The graph exclusively owns its edge storage.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<W>
where
    W: Zero + Signed + Ord + Debug + Copy,
{
    /// Number of vertices; fixed at construction
    vertex_count: usize,

    /// Running count of inserted directed edges
    edge_count: usize,

    /// Outgoing edges for each vertex: adjacency[v] = [(target, weight)]
    adjacency: Vec<Vec<(usize, W)>>,
}

impl<W> AdjacencyGraph<W>
where
    W: Zero + Signed + Ord + Debug + Copy,
{
    /// Creates a graph with the given fixed vertex count
    ///
    /// Fails with [`Error::InvalidVertexCount`] when the count is zero or
    /// exceeds [`MAX_VERTICES`].
    pub fn new(vertex_count: usize) -> Result<Self> {
        Self::with_vertex_cap(vertex_count, MAX_VERTICES)
    }

    /// Creates a graph with a caller-chosen vertex cap instead of [`MAX_VERTICES`]
    pub fn with_vertex_cap(vertex_count: usize, cap: usize) -> Result<Self> {
        if vertex_count == 0 || vertex_count > cap {
            return Err(Error::InvalidVertexCount(vertex_count));
        }

        Ok(AdjacencyGraph {
            vertex_count,
            edge_count: 0,
            adjacency: vec![Vec::new(); vertex_count],
        })
    }

    /// Adds a directed edge from `src` to `dst` with the given weight
    ///
    /// Fails with [`Error::InvalidVertex`] if either endpoint is out of
    /// range, leaving the edge count untouched. A negative weight is
    /// accepted and logged as a warning: the edge is stored, but Dijkstra's
    /// guarantee no longer holds for the graph.
    pub fn add_directed_edge(&mut self, src: usize, dst: usize, weight: W) -> Result<()> {
        if !self.has_vertex(src) {
            return Err(Error::InvalidVertex(src));
        }
        if !self.has_vertex(dst) {
            return Err(Error::InvalidVertex(dst));
        }

        if weight < W::zero() {
            log::warn!(
                "edge ({}, {}) has negative weight {:?}; shortest-path results over this graph are undefined",
                src,
                dst,
                weight
            );
        }

        self.adjacency[src].push((dst, weight));
        self.edge_count += 1;
        Ok(())
    }

    /// Adds edges in both directions between `a` and `b` with the same weight
    ///
    /// Both endpoints are validated before either direction is inserted, so
    /// a failure adds nothing.
    pub fn add_undirected_edge(&mut self, a: usize, b: usize, weight: W) -> Result<()> {
        if !self.has_vertex(a) {
            return Err(Error::InvalidVertex(a));
        }
        if !self.has_vertex(b) {
            return Err(Error::InvalidVertex(b));
        }

        self.add_directed_edge(a, b, weight)?;
        self.add_directed_edge(b, a, weight)
    }
}

impl<W> Graph<W> for AdjacencyGraph<W>
where
    W: Zero + Signed + Ord + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if let Some(edges) = self.adjacency.get(vertex) {
            Box::new(edges.iter().copied())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_edge(&self, from: usize, to: usize) -> bool {
        if let Some(edges) = self.adjacency.get(from) {
            edges.iter().any(|(target, _)| *target == to)
        } else {
            false
        }
    }

    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        if let Some(edges) = self.adjacency.get(from) {
            edges
                .iter()
                .find(|(target, _)| *target == to)
                .map(|(_, weight)| *weight)
        } else {
            None
        }
    }
}
