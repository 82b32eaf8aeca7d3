//! Single-source shortest-path solver
//!
//! Classic Dijkstra over the adjacency list without a priority queue:
//! O(V²) selection, which matches the intended scale. Selection ties break
//! toward the lowest vertex index so results are deterministic. Each
//! distance improvement records the vertex it relaxed through, so routes
//! can be reconstructed exactly even with parallel edges or equal-cost
//! alternatives.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::error::{GraphError, GraphResult};
use crate::graph::{VertexId, WeightedGraph};

/// Sentinel for "no path known".
const INFINITY: u64 = u64::MAX;

/// Per-vertex result of one solver run: minimum total weight from a fixed
/// source, plus the predecessor recorded at each distance improvement.
///
/// A snapshot value object: created fresh by every
/// [`ShortestPathSolver::solve`] call, immutable afterwards, and holding no
/// reference back to the graph it was solved over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceTable {
    source: VertexId,
    distances: Vec<u64>,
    predecessors: Vec<Option<VertexId>>,
}

impl DistanceTable {
    /// The source vertex this table was solved from.
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Number of vertices covered by the table.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Minimum total weight from the source to `vertex`, or `None` if no
    /// path exists (or the index is out of range).
    pub fn distance_to(&self, vertex: VertexId) -> Option<u64> {
        match self.distances.get(vertex) {
            Some(&d) if d != INFINITY => Some(d),
            _ => None,
        }
    }

    pub fn is_reachable(&self, vertex: VertexId) -> bool {
        self.distance_to(vertex).is_some()
    }

    /// Predecessor of `vertex` on a shortest path from the source. The
    /// source itself and unreachable vertices have none.
    pub fn predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.predecessors.get(vertex).copied().flatten()
    }
}

/// Single-source shortest-path solver for non-negative edge weights.
pub struct ShortestPathSolver;

impl ShortestPathSolver {
    /// Computes minimum distances from `source` to every vertex.
    ///
    /// Never mutates the graph, so concurrent calls over the same shared
    /// graph are safe. Negative weights cannot occur here; the graph
    /// rejects them at construction.
    pub fn solve(graph: &WeightedGraph, source: VertexId) -> GraphResult<DistanceTable> {
        let n = graph.vertex_count();
        if source >= n {
            return Err(GraphError::InvalidArgument(format!(
                "source vertex {} out of range (vertex count {})",
                source, n
            )));
        }

        let mut distances = vec![INFINITY; n];
        let mut predecessors: Vec<Option<VertexId>> = vec![None; n];
        let mut visited = vec![false; n];
        distances[source] = 0;

        loop {
            // Strict `<` keeps the lowest index on equal distances.
            let mut current = None;
            let mut best = INFINITY;
            for v in 0..n {
                if !visited[v] && distances[v] < best {
                    best = distances[v];
                    current = Some(v);
                }
            }
            // Every unvisited vertex is at the sentinel: the remainder is
            // unreachable and relaxing from it would be meaningless.
            let Some(u) = current else { break };

            visited[u] = true;
            for edge in graph.edges_from(u)? {
                let candidate = distances[u].saturating_add(edge.weight);
                if candidate < distances[edge.destination] {
                    distances[edge.destination] = candidate;
                    predecessors[edge.destination] = Some(u);
                }
            }
        }

        debug!("solved shortest paths from vertex {} over {} vertices", source, n);
        Ok(DistanceTable {
            source,
            distances,
            predecessors,
        })
    }
}
