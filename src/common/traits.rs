//! Common traits defining the seams of the Frenet planner

use crate::common::error::PlannerResult;
use crate::common::types::Point2D;
use crate::path_planning::frenet::{FrenetPath, PlanOutcome};

/// One-dimensional motion profile evaluated over time
pub trait MotionProfile {
    /// Position at time `t`
    fn calc_point(&self, t: f64) -> f64;

    /// Velocity at time `t`
    fn calc_first_derivative(&self, t: f64) -> f64;

    /// Acceleration at time `t`
    fn calc_second_derivative(&self, t: f64) -> f64;

    /// Jerk at time `t`
    fn calc_third_derivative(&self, t: f64) -> f64;
}

/// Reference path queried by arc length
///
/// The frame converter projects a lateral offset `d` perpendicular to
/// the heading returned here.
pub trait ReferencePath {
    /// Position on the reference path at arc length `s`
    fn position_at(&self, s: f64) -> Point2D;

    /// Heading of the reference path at arc length `s` [rad]
    fn heading_at(&self, s: f64) -> f64;
}

/// Trait for local trajectory planners working in the Frenet frame
pub trait TrajectoryPlanner {
    /// Plan the feasible candidate set from the current longitudinal speed
    /// and lateral offset
    fn plan(&self, c_speed: f64, c_d: f64) -> PlannerResult<PlanOutcome>;

    /// Plan and keep only the feasible paths
    fn plan_paths(&self, c_speed: f64, c_d: f64) -> PlannerResult<Vec<FrenetPath>> {
        self.plan(c_speed, c_d).map(|outcome| outcome.paths)
    }
}
