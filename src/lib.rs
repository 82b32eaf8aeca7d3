//! RouteGraph - a lightweight shortest-path routing library
//!
//! This crate provides a directed, non-negatively-weighted multigraph over
//! dense integer vertex indices, a single-source shortest-path solver and
//! route reconstruction from the solver's output. A small CLI driver reads
//! graph description files and prints planned routes.

pub mod config;
pub mod core;
pub mod graph;
pub mod services;
pub mod utils;

pub use crate::core::error::{GraphError, GraphResult};
pub use crate::graph::{Edge, VertexId, WeightedGraph};
pub use crate::services::algorithm::{
    DistanceTable, Route, RouteReconstructor, ShortestPathSolver,
};
pub use crate::services::planner::{PlannedRoute, RoutePlan, RoutePlanner};
