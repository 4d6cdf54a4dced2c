//! Utility modules for frenet_planner

pub mod math;
pub mod visualization;

pub use math::{arange, arange_len};
pub use visualization::{Visualizer, PathStyle, PointStyle, colors};
