//! Kinematic feasibility checks

use std::fmt;

use super::config::FrenetConfig;
use super::frenet_path::FrenetPath;

/// First limit a candidate violates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Violation {
    Speed { index: usize, value: f64 },
    Accel { index: usize, value: f64 },
    Curvature { index: usize, value: f64 },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Speed { index, value } => write!(f, "speed {:.3} at sample {}", value, index),
            Violation::Accel { index, value } => write!(f, "acceleration {:.3} at sample {}", value, index),
            Violation::Curvature { index, value } => write!(f, "curvature {:.3} at sample {}", value, index),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeasibilityFilter {
    pub max_speed: f64,
    pub max_accel: f64,
    pub max_curvature: f64,
}

impl FeasibilityFilter {
    pub fn new(config: &FrenetConfig) -> Self {
        Self {
            max_speed: config.max_speed,
            max_accel: config.max_accel,
            max_curvature: config.max_curvature,
        }
    }

    /// Check every sample of a converted path
    ///
    /// NaN values never pass a limit.
    pub fn check(&self, fp: &FrenetPath) -> Result<(), Violation> {
        if let Some((index, &value)) = first_exceeding(fp.s_d(), self.max_speed) {
            return Err(Violation::Speed { index, value });
        }
        if let Some((index, &value)) = first_exceeding(fp.s_dd(), self.max_accel) {
            return Err(Violation::Accel { index, value });
        }
        if let Some((index, &value)) = first_exceeding(&fp.c, self.max_curvature) {
            return Err(Violation::Curvature { index, value });
        }
        Ok(())
    }

    pub fn is_feasible(&self, fp: &FrenetPath) -> bool {
        self.check(fp).is_ok()
    }

    /// Keep the feasible paths in input order
    pub fn filter(&self, mut paths: Vec<FrenetPath>) -> Vec<FrenetPath> {
        paths.retain(|fp| self.is_feasible(fp));
        paths
    }
}

fn first_exceeding(values: &[f64], limit: f64) -> Option<(usize, &f64)> {
    values.iter().enumerate().find(|(_, v)| !(v.abs() <= limit))
}
