//! Route reconstruction from a solved distance table
//!
//! The solver records a predecessor at every distance improvement, so a
//! concrete route is recovered by walking those links backward from the
//! destination to the source and reversing.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::error::{GraphError, GraphResult};
use crate::graph::VertexId;
use crate::services::algorithm::dijkstra::DistanceTable;

/// A concrete shortest route, or the fact that none exists.
///
/// Unreachability is a valid domain outcome, carried as data rather than
/// an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    /// Ordered vertex sequence starting at the source and ending at the
    /// destination.
    Path(Vec<VertexId>),
    Unreachable,
}

impl Route {
    pub fn is_reachable(&self) -> bool {
        matches!(self, Route::Path(_))
    }

    /// The vertex sequence, if the destination is reachable.
    pub fn vertices(&self) -> Option<&[VertexId]> {
        match self {
            Route::Path(vertices) => Some(vertices),
            Route::Unreachable => None,
        }
    }
}

impl fmt::Display for Route {
    /// Renders as `0 -> 2 -> 5`, or `Unreachable`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Path(vertices) => {
                for (i, vertex) in vertices.iter().enumerate() {
                    if i > 0 {
                        write!(f, " -> ")?;
                    }
                    write!(f, "{}", vertex)?;
                }
                Ok(())
            }
            Route::Unreachable => write!(f, "Unreachable"),
        }
    }
}

/// Derives concrete routes from a [`DistanceTable`].
pub struct RouteReconstructor;

impl RouteReconstructor {
    /// Reconstructs the route from the table's source to `destination`.
    pub fn reconstruct(table: &DistanceTable, destination: VertexId) -> GraphResult<Route> {
        if destination >= table.len() {
            return Err(GraphError::OutOfRange(format!(
                "destination vertex {} out of range (vertex count {})",
                destination,
                table.len()
            )));
        }
        if !table.is_reachable(destination) {
            return Ok(Route::Unreachable);
        }

        let mut path = vec![destination];
        let mut current = destination;
        while current != table.source() {
            match table.predecessor(current) {
                Some(prev) => {
                    path.push(prev);
                    current = prev;
                }
                // A missing link means the walk already covers everything
                // the table knows; stop rather than spin.
                None => break,
            }
        }
        path.reverse();
        Ok(Route::Path(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::WeightedGraph;
    use crate::services::algorithm::ShortestPathSolver;

    fn delivery_graph() -> WeightedGraph {
        let mut graph = WeightedGraph::new(4).expect("graph");
        graph.add_edge(0, 1, 4).expect("edge");
        graph.add_edge(0, 2, 1).expect("edge");
        graph.add_edge(2, 1, 1).expect("edge");
        graph.add_edge(1, 3, 1).expect("edge");
        graph.add_edge(2, 3, 5).expect("edge");
        graph
    }

    #[test]
    fn test_route_follows_shortest_path() {
        let table = ShortestPathSolver::solve(&delivery_graph(), 0).expect("solve");
        let route = RouteReconstructor::reconstruct(&table, 3).expect("route");
        assert_eq!(route, Route::Path(vec![0, 2, 1, 3]));
    }

    #[test]
    fn test_route_to_source_is_single_vertex() {
        let table = ShortestPathSolver::solve(&delivery_graph(), 0).expect("solve");
        let route = RouteReconstructor::reconstruct(&table, 0).expect("route");
        assert_eq!(route, Route::Path(vec![0]));
    }

    #[test]
    fn test_unreachable_destination_is_a_value_not_an_error() {
        let table = ShortestPathSolver::solve(&delivery_graph(), 3).expect("solve");
        let route = RouteReconstructor::reconstruct(&table, 0).expect("route");
        assert_eq!(route, Route::Unreachable);
        assert!(!route.is_reachable());
        assert!(route.vertices().is_none());
    }

    #[test]
    fn test_rejects_out_of_range_destination() {
        let table = ShortestPathSolver::solve(&delivery_graph(), 0).expect("solve");
        let result = RouteReconstructor::reconstruct(&table, 4);
        assert!(matches!(result, Err(GraphError::OutOfRange(_))));
    }

    #[test]
    fn test_display_renders_arrows() {
        assert_eq!(Route::Path(vec![0, 2, 5]).to_string(), "0 -> 2 -> 5");
        assert_eq!(Route::Path(vec![7]).to_string(), "7");
        assert_eq!(Route::Unreachable.to_string(), "Unreachable");
    }

    #[test]
    fn test_route_through_parallel_edges_matches_distance() {
        // Two parallel 0->1 edges plus a detour; the recorded predecessors
        // must yield a route whose weight equals the solved distance.
        let mut graph = WeightedGraph::new(3).expect("graph");
        graph.add_edge(0, 1, 9).expect("edge");
        graph.add_edge(0, 1, 3).expect("edge");
        graph.add_edge(0, 2, 1).expect("edge");
        graph.add_edge(2, 1, 1).expect("edge");

        let table = ShortestPathSolver::solve(&graph, 0).expect("solve");
        let route = RouteReconstructor::reconstruct(&table, 1).expect("route");
        assert_eq!(route, Route::Path(vec![0, 2, 1]));
        assert_eq!(table.distance_to(1), Some(2));
    }
}
