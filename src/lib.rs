//! frenet_planner - Frenet-frame candidate trajectory generation
//!
//! This crate generates short-horizon candidate trajectories for a
//! vehicle moving along a reference path and filters them against
//! speed, acceleration and curvature limits.

// Core modules
pub mod common;
pub mod utils;

// Algorithm modules
pub mod path_planning;

// Re-export common types for convenience
pub use common::{Point2D, Path2D};
pub use common::{MotionProfile, ReferencePath, TrajectoryPlanner};
pub use common::{PlannerError, PlannerResult};
pub use path_planning::frenet::{FrenetConfig, FrenetPath, FrenetPlanner, PlanOutcome, PlanStats};
