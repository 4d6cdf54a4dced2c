//! Frenet Candidate Trajectory Planner
//!
//! Generates short-horizon candidate trajectories in the Frenet frame
//! (arc length `s`, lateral offset `d`) and keeps the kinematically
//! feasible ones. All feasible candidates are returned; no cost-based
//! selection is made.
//!
//! # Components
//!
//! - `config`: planner limits, search grid parameters, TOML loading
//! - `frenet_path`: shared lateral / owned longitudinal sample series
//! - `candidate_generator`: one candidate per (offset, duration, speed)
//! - `frame_converter`: Cartesian position, heading, step length, curvature
//! - `feasibility_filter`: speed, acceleration and curvature limits
//! - `planner`: the generate, convert, filter pipeline
//!
//! # Example
//!
//! ```no_run
//! use frenet_planner::path_planning::frenet::{FrenetConfig, FrenetPlanner};
//! use frenet_planner::TrajectoryPlanner;
//!
//! let planner = FrenetPlanner::new(FrenetConfig::default()).unwrap();
//! let outcome = planner.plan(10.0 / 3.6, 1.0).unwrap();
//! println!("{} feasible of {}", outcome.paths.len(), outcome.stats.generated);
//! ```
//!
//! # References
//!
//! - PythonRobotics Frenet Optimal Trajectory by Atsushi Sakai
//! - "Optimal Trajectory Generation for Dynamic Street Scenarios in a Frenet Frame"

pub mod config;
pub mod frenet_path;
pub mod candidate_generator;
pub mod frame_converter;
pub mod feasibility_filter;
pub mod planner;

// Re-exports
pub use config::{DegenerateStepPolicy, FrenetConfig, SearchGrid};
pub use frenet_path::{FrenetPath, LateralProfile, LongitudinalProfile};
pub use candidate_generator::{CandidateGenerator, GeneratedCandidates};
pub use frame_converter::{FrameConverter, StraightReference};
pub use feasibility_filter::{FeasibilityFilter, Violation};
pub use planner::{FrenetPlanner, PlanOutcome, PlanStats};
