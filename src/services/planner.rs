//! Route planning service
//!
//! Bundles one solver run with route reconstruction: plan a single
//! destination, or every destination at once with a single solve. Results
//! are plain value objects ready for rendering by a caller.

use log::info;
use serde::{Deserialize, Serialize};

use crate::core::error::GraphResult;
use crate::graph::{VertexId, WeightedGraph};
use crate::services::algorithm::{DistanceTable, Route, RouteReconstructor, ShortestPathSolver};

/// A reconstructed route plus its total weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedRoute {
    pub destination: VertexId,
    /// Minimum total weight, `None` when the destination is unreachable.
    pub distance: Option<u64>,
    pub route: Route,
}

/// All routes from one source, in destination order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutePlan {
    pub source: VertexId,
    pub routes: Vec<PlannedRoute>,
}

/// Plans shortest routes over a [`WeightedGraph`].
pub struct RoutePlanner;

impl RoutePlanner {
    /// Plans the route from `source` to a single `destination`.
    pub fn plan(
        graph: &WeightedGraph,
        source: VertexId,
        destination: VertexId,
    ) -> GraphResult<PlannedRoute> {
        let table = ShortestPathSolver::solve(graph, source)?;
        Self::planned(&table, destination)
    }

    /// Plans routes from `source` to every vertex with a single solve.
    pub fn plan_all(graph: &WeightedGraph, source: VertexId) -> GraphResult<RoutePlan> {
        let table = ShortestPathSolver::solve(graph, source)?;
        let mut routes = Vec::with_capacity(table.len());
        for destination in 0..table.len() {
            routes.push(Self::planned(&table, destination)?);
        }
        info!("planned {} routes from source {}", routes.len(), source);
        Ok(RoutePlan { source, routes })
    }

    fn planned(table: &DistanceTable, destination: VertexId) -> GraphResult<PlannedRoute> {
        let route = RouteReconstructor::reconstruct(table, destination)?;
        Ok(PlannedRoute {
            destination,
            distance: table.distance_to(destination),
            route,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::GraphError;

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
    fn test_plan_single_destination() {
        let planned = RoutePlanner::plan(&delivery_graph(), 0, 3).expect("plan");
        assert_eq!(planned.destination, 3);
        assert_eq!(planned.distance, Some(3));
        assert_eq!(planned.route, Route::Path(vec![0, 2, 1, 3]));
    }

    #[test]
    fn test_plan_all_covers_every_vertex() {
        let plan = RoutePlanner::plan_all(&delivery_graph(), 0).expect("plan");
        assert_eq!(plan.source, 0);
        assert_eq!(plan.routes.len(), 4);
        for (destination, planned) in plan.routes.iter().enumerate() {
            assert_eq!(planned.destination, destination);
        }
        assert_eq!(plan.routes[0].distance, Some(0));
        assert_eq!(plan.routes[3].distance, Some(3));
    }

    #[test]
    fn test_plan_reports_unreachable_as_data() {
        let plan = RoutePlanner::plan_all(&delivery_graph(), 3).expect("plan");
        assert_eq!(plan.routes[0].distance, None);
        assert_eq!(plan.routes[0].route, Route::Unreachable);
        assert_eq!(plan.routes[3].route, Route::Path(vec![3]));
    }

    #[test]
    fn test_plan_rejects_bad_source() {
        let result = RoutePlanner::plan_all(&delivery_graph(), 9);
        assert!(matches!(result, Err(GraphError::InvalidArgument(_))));
    }

    #[test]
    fn test_plan_serializes_to_json() {
        let planned = RoutePlanner::plan(&delivery_graph(), 0, 3).expect("plan");
        let json = serde_json::to_string(&planned).expect("json");
        assert!(json.contains("\"destination\":3"));
        assert!(json.contains("\"distance\":3"));
    }
}
