//! Planner configuration and search grid

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::{PlannerError, PlannerResult};
use crate::utils::{arange, arange_len};

/// How to resolve curvature across a zero-length step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegenerateStepPolicy {
    /// Curvature over the step is taken as zero
    #[default]
    ZeroCurvature,
    /// The candidate is excluded
    Reject,
}

/// Frenet planner configuration
///
/// Defaults reproduce the reference highway scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrenetConfig {
    /// Maximum longitudinal speed [m/s]
    pub max_speed: f64,
    /// Maximum longitudinal acceleration [m/ss]
    pub max_accel: f64,
    /// Maximum curvature [1/m]
    pub max_curvature: f64,
    /// Lateral offset search half-width [m]
    pub maxd: f64,
    /// Lateral offset sampling step [m]
    pub dd: f64,
    /// Maneuver duration sampling step, also the shortest duration [s]
    pub dt: f64,
    /// Duration search upper bound (exclusive) [s]
    #[serde(rename = "T_max", alias = "t_max")]
    pub t_max: f64,
    /// Center of the target speed search [m/s]
    pub target_speed: f64,
    /// Target speed sampling step [m/s]
    pub dv: f64,
    /// Number of speed steps on each side of the target speed
    pub nv: usize,
    /// Time resolution at which each candidate is sampled [s]
    pub sample_step: f64,
    /// Steps at or below this length are degenerate [m]
    pub min_step_length: f64,
    pub degenerate_step_policy: DegenerateStepPolicy,
    /// Upper bound on the candidate count of one planning call
    pub max_candidates: usize,
    /// Upper bound on the time samples of one planning call, counting
    /// every candidate at the longest duration
    pub max_samples: usize,
}

impl Default for FrenetConfig {
    fn default() -> Self {
        Self {
            max_speed: 50.0 / 3.6,
            max_accel: 2.0,
            max_curvature: 1.0,
            maxd: 5.0,
            dd: 1.0,
            dt: 1.0,
            t_max: 10.0,
            target_speed: 30.0 / 3.6,
            dv: 5.0 / 3.6,
            nv: 2,
            sample_step: 0.1,
            min_step_length: 1e-9,
            degenerate_step_policy: DegenerateStepPolicy::ZeroCurvature,
            max_candidates: 100_000,
            max_samples: 10_000_000,
        }
    }
}

impl FrenetConfig {
    /// Parse a (possibly partial) TOML document; missing keys keep defaults
    pub fn from_toml_str(contents: &str) -> PlannerResult<Self> {
        let config: FrenetConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> PlannerResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        log::info!("Loaded planner config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> PlannerResult<()> {
        let finite = [
            ("max_speed", self.max_speed),
            ("max_accel", self.max_accel),
            ("max_curvature", self.max_curvature),
            ("maxd", self.maxd),
            ("dd", self.dd),
            ("dt", self.dt),
            ("T_max", self.t_max),
            ("target_speed", self.target_speed),
            ("dv", self.dv),
            ("sample_step", self.sample_step),
            ("min_step_length", self.min_step_length),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(invalid(format!("{} must be finite, got {}", name, value)));
            }
        }

        for (name, value) in [
            ("dd", self.dd),
            ("dt", self.dt),
            ("dv", self.dv),
            ("sample_step", self.sample_step),
        ] {
            if value <= 0.0 {
                return Err(invalid(format!("{} must be positive, got {}", name, value)));
            }
        }

        for (name, value) in [
            ("max_speed", self.max_speed),
            ("max_accel", self.max_accel),
            ("max_curvature", self.max_curvature),
            ("maxd", self.maxd),
            ("min_step_length", self.min_step_length),
        ] {
            if value < 0.0 {
                return Err(invalid(format!("{} must not be negative, got {}", name, value)));
            }
        }

        let count = SearchGrid::cardinality(self);
        if count > self.max_candidates {
            return Err(invalid(format!(
                "search grid has {} candidates, limit is {}",
                count, self.max_candidates
            )));
        }

        let samples = count.saturating_mul(SearchGrid::max_samples_per_candidate(self));
        if samples > self.max_samples {
            return Err(invalid(format!(
                "planning call would sample {} points, limit is {}",
                samples, self.max_samples
            )));
        }

        Ok(())
    }
}

fn invalid(msg: String) -> PlannerError {
    PlannerError::InvalidParameter(msg)
}

/// Discretized candidate space: lateral offsets x durations x target speeds
#[derive(Debug, Clone, PartialEq)]
pub struct SearchGrid {
    /// `[-maxd, maxd)` step `dd`
    pub lateral_offsets: Vec<f64>,
    /// `[dt, T_max)` step `dt`
    pub durations: Vec<f64>,
    /// `[target_speed - dv*nv, target_speed + dv*nv)` step `dv`
    pub target_speeds: Vec<f64>,
}

impl SearchGrid {
    pub fn from_config(config: &FrenetConfig) -> Self {
        let (v_min, v_max) = speed_bounds(config);
        Self {
            lateral_offsets: arange(-config.maxd, config.maxd, config.dd),
            durations: arange(config.dt, config.t_max, config.dt),
            target_speeds: arange(v_min, v_max, config.dv),
        }
    }

    /// Candidate count of the grid `config` describes, without building it
    pub fn cardinality(config: &FrenetConfig) -> usize {
        let (v_min, v_max) = speed_bounds(config);
        arange_len(-config.maxd, config.maxd, config.dd)
            .saturating_mul(arange_len(config.dt, config.t_max, config.dt))
            .saturating_mul(arange_len(v_min, v_max, config.dv))
    }

    /// Samples in a candidate of duration just under `T_max`
    pub fn max_samples_per_candidate(config: &FrenetConfig) -> usize {
        arange_len(0.0, config.t_max, config.sample_step)
    }

    pub fn candidate_count(&self) -> usize {
        self.lateral_offsets.len() * self.durations.len() * self.target_speeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidate_count() == 0
    }
}

fn speed_bounds(config: &FrenetConfig) -> (f64, f64) {
    let half_width = config.dv * config.nv as f64;
    (config.target_speed - half_width, config.target_speed + half_width)
}
