//! Weighted directed multigraph
//!
//! Vertices are dense integer indices in `[0, vertex_count)`; their semantic
//! meaning (e.g. "central warehouse" = index 0) is a caller convention, not
//! something the graph knows about. Edges are directed and owned by their
//! source vertex. Parallel edges between the same ordered pair are kept
//! as-is, never merged.

pub mod reader;

use serde::{Deserialize, Serialize};

use crate::core::error::{GraphError, GraphResult};

/// Dense vertex index.
pub type VertexId = usize;

/// A directed edge, stored in the adjacency list of its source vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub destination: VertexId,
    pub weight: u64,
}

/// Adjacency-list digraph with non-negative integer edge weights.
///
/// Mutation is append-only (`add_edge`); everything else is a read-only
/// query. Because solving borrows the graph immutably and allocates its own
/// result, concurrent solves over a shared `&WeightedGraph` are safe.
#[derive(Debug, Clone)]
pub struct WeightedGraph {
    adjacency: Vec<Vec<Edge>>,
}

impl WeightedGraph {
    /// Creates a graph with `num_vertices` vertices and no edges.
    pub fn new(num_vertices: usize) -> GraphResult<Self> {
        if num_vertices == 0 {
            return Err(GraphError::InvalidArgument(
                "vertex count must be positive".to_string(),
            ));
        }
        Ok(Self {
            adjacency: vec![Vec::new(); num_vertices],
        })
    }

    /// Appends a directed edge from `source` to `destination`.
    ///
    /// The weight arrives signed, matching the numeric text input that
    /// feeds graph construction, and is validated before storage. On any
    /// failure the graph is left unmodified. Parallel edges are permitted
    /// and not deduplicated.
    pub fn add_edge(
        &mut self,
        source: VertexId,
        destination: VertexId,
        weight: i64,
    ) -> GraphResult<()> {
        let n = self.adjacency.len();
        if source >= n {
            return Err(GraphError::InvalidArgument(format!(
                "edge source {} out of range (vertex count {})",
                source, n
            )));
        }
        if destination >= n {
            return Err(GraphError::InvalidArgument(format!(
                "edge destination {} out of range (vertex count {})",
                destination, n
            )));
        }
        if weight < 0 {
            return Err(GraphError::InvalidArgument(format!(
                "edge weight {} is negative",
                weight
            )));
        }
        self.adjacency[source].push(Edge {
            destination,
            weight: weight as u64,
        });
        Ok(())
    }

    /// Outgoing edges of `vertex`, in insertion order.
    pub fn edges_from(&self, vertex: VertexId) -> GraphResult<&[Edge]> {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .ok_or_else(|| {
                GraphError::OutOfRange(format!(
                    "vertex {} out of range (vertex count {})",
                    vertex,
                    self.adjacency.len()
                ))
            })
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of edges across all vertices.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }
}
