//! Frenet candidate path
//!
//! A candidate is built from two parts with different ownership:
//! the lateral profile is sampled once per (offset, duration) pair and
//! shared read-only across every target speed, while the longitudinal
//! profile is sampled and owned per candidate.

use std::sync::Arc;

use ordered_float::OrderedFloat;

use crate::common::{MotionProfile, Path2D};
use crate::utils::arange;

/// Sampled lateral motion `d(t)`
#[derive(Debug, Clone, PartialEq)]
pub struct LateralProfile {
    /// Lateral offset the maneuver ends at [m]
    pub target_offset: f64,
    /// Maneuver duration [s]
    pub duration: f64,
    pub t: Vec<f64>,     // time
    pub d: Vec<f64>,     // lateral position
    pub d_d: Vec<f64>,   // lateral velocity
    pub d_dd: Vec<f64>,  // lateral acceleration
    pub d_ddd: Vec<f64>, // lateral jerk
}

impl LateralProfile {
    /// Sample `profile` at `sample_step` over `[0, duration)`
    pub fn sample<P: MotionProfile>(
        profile: &P,
        target_offset: f64,
        duration: f64,
        sample_step: f64,
    ) -> Self {
        let t = arange(0.0, duration, sample_step);
        Self {
            target_offset,
            duration,
            d: t.iter().map(|&t| profile.calc_point(t)).collect(),
            d_d: t.iter().map(|&t| profile.calc_first_derivative(t)).collect(),
            d_dd: t.iter().map(|&t| profile.calc_second_derivative(t)).collect(),
            d_ddd: t.iter().map(|&t| profile.calc_third_derivative(t)).collect(),
            t,
        }
    }

    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }
}

/// Sampled longitudinal motion `s(t)`
#[derive(Debug, Clone, PartialEq)]
pub struct LongitudinalProfile {
    /// Speed the maneuver ends at [m/s]
    pub target_speed: f64,
    pub s: Vec<f64>,     // longitudinal position
    pub s_d: Vec<f64>,   // longitudinal velocity
    pub s_dd: Vec<f64>,  // longitudinal acceleration
    pub s_ddd: Vec<f64>, // longitudinal jerk
}

impl LongitudinalProfile {
    /// Sample `profile` on an existing time grid
    pub fn sample<P: MotionProfile>(profile: &P, target_speed: f64, t: &[f64]) -> Self {
        Self {
            target_speed,
            s: t.iter().map(|&t| profile.calc_point(t)).collect(),
            s_d: t.iter().map(|&t| profile.calc_first_derivative(t)).collect(),
            s_dd: t.iter().map(|&t| profile.calc_second_derivative(t)).collect(),
            s_ddd: t.iter().map(|&t| profile.calc_third_derivative(t)).collect(),
        }
    }
}

/// One candidate trajectory
///
/// The Cartesian series `x, y, yaw, ds` have the same length as `t` once
/// converted; `c` is one element shorter.
#[derive(Debug, Clone)]
pub struct FrenetPath {
    /// Position in generation order
    pub index: usize,
    lateral: Arc<LateralProfile>,
    longitudinal: LongitudinalProfile,
    pub x: Vec<f64>,   // cartesian x
    pub y: Vec<f64>,   // cartesian y
    pub yaw: Vec<f64>, // heading
    pub ds: Vec<f64>,  // step length
    pub c: Vec<f64>,   // curvature
    /// Steps the converter found at or below the minimum step length
    pub degenerate_steps: usize,
}

impl FrenetPath {
    pub fn new(index: usize, lateral: Arc<LateralProfile>, longitudinal: LongitudinalProfile) -> Self {
        debug_assert_eq!(lateral.len(), longitudinal.s.len());
        FrenetPath {
            index,
            lateral,
            longitudinal,
            x: Vec::new(),
            y: Vec::new(),
            yaw: Vec::new(),
            ds: Vec::new(),
            c: Vec::new(),
            degenerate_steps: 0,
        }
    }

    pub fn lateral(&self) -> &Arc<LateralProfile> {
        &self.lateral
    }

    pub fn longitudinal(&self) -> &LongitudinalProfile {
        &self.longitudinal
    }

    pub fn t(&self) -> &[f64] {
        &self.lateral.t
    }

    pub fn d(&self) -> &[f64] {
        &self.lateral.d
    }

    pub fn d_d(&self) -> &[f64] {
        &self.lateral.d_d
    }

    pub fn d_dd(&self) -> &[f64] {
        &self.lateral.d_dd
    }

    pub fn d_ddd(&self) -> &[f64] {
        &self.lateral.d_ddd
    }

    pub fn s(&self) -> &[f64] {
        &self.longitudinal.s
    }

    pub fn s_d(&self) -> &[f64] {
        &self.longitudinal.s_d
    }

    pub fn s_dd(&self) -> &[f64] {
        &self.longitudinal.s_dd
    }

    pub fn s_ddd(&self) -> &[f64] {
        &self.longitudinal.s_ddd
    }

    pub fn target_offset(&self) -> f64 {
        self.lateral.target_offset
    }

    pub fn duration(&self) -> f64 {
        self.lateral.duration
    }

    pub fn target_speed(&self) -> f64 {
        self.longitudinal.target_speed
    }

    /// Number of time samples
    pub fn len(&self) -> usize {
        self.lateral.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lateral.is_empty()
    }

    /// Whether the frame converter has filled the Cartesian series
    pub fn is_converted(&self) -> bool {
        !self.is_empty() && self.x.len() == self.len()
    }

    pub fn max_abs_speed(&self) -> f64 {
        max_abs(self.s_d())
    }

    pub fn max_abs_accel(&self) -> f64 {
        max_abs(self.s_dd())
    }

    pub fn max_abs_curvature(&self) -> f64 {
        max_abs(&self.c)
    }

    pub fn to_path(&self) -> Path2D {
        Path2D::from_xy(&self.x, &self.y)
    }
}

fn max_abs(values: &[f64]) -> f64 {
    values
        .iter()
        .map(|v| OrderedFloat(v.abs()))
        .max()
        .map_or(0.0, |v| v.into_inner())
}
