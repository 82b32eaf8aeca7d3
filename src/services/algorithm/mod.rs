//! Shortest-path algorithms over [`crate::graph::WeightedGraph`].

pub mod dijkstra;
pub mod route;

pub use dijkstra::{DistanceTable, ShortestPathSolver};
pub use route::{Route, RouteReconstructor};
