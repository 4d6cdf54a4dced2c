//! Candidate generation over the search grid
//!
//! For every (lateral offset, duration) pair one quintic lateral profile
//! is solved and sampled; every target speed then adds one quartic
//! longitudinal profile on the same time grid.

use std::sync::Arc;

use itertools::iproduct;

use crate::path_planning::{QuarticPolynomial, QuinticPolynomial};

use super::config::{FrenetConfig, SearchGrid};
use super::frenet_path::{FrenetPath, LateralProfile, LongitudinalProfile};

/// Result of one generation pass
#[derive(Debug, Clone, Default)]
pub struct GeneratedCandidates {
    /// Candidates in grid order
    pub paths: Vec<FrenetPath>,
    /// Grid points whose boundary-value solve failed
    pub failed: usize,
}

#[derive(Debug, Clone)]
pub struct CandidateGenerator {
    grid: SearchGrid,
    sample_step: f64,
}

impl CandidateGenerator {
    pub fn new(config: &FrenetConfig) -> Self {
        Self {
            grid: SearchGrid::from_config(config),
            sample_step: config.sample_step,
        }
    }

    pub fn grid(&self) -> &SearchGrid {
        &self.grid
    }

    /// Generate one candidate per grid triple from the current
    /// longitudinal speed `c_speed` and lateral offset `c_d`
    ///
    /// A failed solve drops only the affected grid points.
    pub fn generate(&self, c_speed: f64, c_d: f64) -> GeneratedCandidates {
        let speeds = &self.grid.target_speeds;
        let mut out = GeneratedCandidates {
            paths: Vec::with_capacity(self.grid.candidate_count()),
            failed: 0,
        };

        for (pair, (&di, &ti)) in
            iproduct!(self.grid.lateral_offsets.iter(), self.grid.durations.iter()).enumerate()
        {
            let base_index = pair * speeds.len();

            // lateral maneuver always ends at rest laterally
            let lat_qp = match QuinticPolynomial::new(c_d, 0.0, 0.0, di, 0.0, 0.0, ti) {
                Ok(qp) => qp,
                Err(e) => {
                    log::warn!("lateral profile d={:.2} T={:.2} skipped: {}", di, ti, e);
                    out.failed += speeds.len();
                    continue;
                }
            };
            let lateral = Arc::new(LateralProfile::sample(&lat_qp, di, ti, self.sample_step));

            for (k, &tv) in speeds.iter().enumerate() {
                let lon_qp = match QuarticPolynomial::new(0.0, c_speed, 0.0, tv, 0.0, ti) {
                    Ok(qp) => qp,
                    Err(e) => {
                        log::warn!("longitudinal profile v={:.2} T={:.2} skipped: {}", tv, ti, e);
                        out.failed += 1;
                        continue;
                    }
                };
                let longitudinal = LongitudinalProfile::sample(&lon_qp, tv, &lateral.t);
                out.paths.push(FrenetPath::new(base_index + k, Arc::clone(&lateral), longitudinal));
            }
        }

        log::debug!(
            "generated {} candidates ({} failed) from a {}x{}x{} grid",
            out.paths.len(),
            out.failed,
            self.grid.lateral_offsets.len(),
            self.grid.durations.len(),
            speeds.len()
        );
        out
    }
}
