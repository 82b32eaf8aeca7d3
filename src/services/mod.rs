pub mod algorithm;
pub mod planner;

pub use planner::{PlannedRoute, RoutePlan, RoutePlanner};
