//! Frenet planner: generate, convert, filter
//!
//! Each call is independent. Per-candidate failures are counted in
//! [`PlanStats`] and never fail the call; only an invalid configuration
//! does.

use crate::common::{PlannerResult, ReferencePath, TrajectoryPlanner};

use super::candidate_generator::CandidateGenerator;
use super::config::FrenetConfig;
use super::feasibility_filter::{FeasibilityFilter, Violation};
use super::frame_converter::{FrameConverter, StraightReference};
use super::frenet_path::FrenetPath;

/// Counters describing one planning call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlanStats {
    /// Candidates produced by the generator
    pub generated: usize,
    /// Grid points dropped by a failed solve or a rejected degenerate step
    pub failed: usize,
    pub rejected_speed: usize,
    pub rejected_accel: usize,
    pub rejected_curvature: usize,
    /// Zero-length steps seen across all converted candidates
    pub degenerate_steps: usize,
}

impl PlanStats {
    pub fn rejected(&self) -> usize {
        self.rejected_speed + self.rejected_accel + self.rejected_curvature
    }
}

/// Feasible candidates plus diagnostics
#[derive(Debug, Clone, Default)]
pub struct PlanOutcome {
    pub paths: Vec<FrenetPath>,
    pub stats: PlanStats,
}

impl PlanOutcome {
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Nothing was generated at all, as opposed to nothing being feasible
    pub fn nothing_generated(&self) -> bool {
        self.stats.generated == 0
    }
}

pub struct FrenetPlanner<R: ReferencePath = StraightReference> {
    config: FrenetConfig,
    generator: CandidateGenerator,
    converter: FrameConverter<R>,
    filter: FeasibilityFilter,
}

impl FrenetPlanner<StraightReference> {
    pub fn new(config: FrenetConfig) -> PlannerResult<Self> {
        Self::with_reference(config, StraightReference)
    }

    pub fn with_defaults() -> PlannerResult<Self> {
        Self::new(FrenetConfig::default())
    }
}

impl<R: ReferencePath> FrenetPlanner<R> {
    pub fn with_reference(config: FrenetConfig, reference: R) -> PlannerResult<Self> {
        config.validate()?;
        Ok(Self {
            generator: CandidateGenerator::new(&config),
            converter: FrameConverter::with_reference(reference, &config),
            filter: FeasibilityFilter::new(&config),
            config,
        })
    }

    /// Get configuration
    pub fn config(&self) -> &FrenetConfig {
        &self.config
    }

    fn run(&self, c_speed: f64, c_d: f64) -> PlanOutcome {
        let generated = self.generator.generate(c_speed, c_d);
        let mut stats = PlanStats {
            generated: generated.paths.len(),
            failed: generated.failed,
            ..Default::default()
        };

        let mut paths = Vec::new();
        for mut fp in generated.paths {
            let converted = self.converter.convert(&mut fp);
            stats.degenerate_steps += fp.degenerate_steps;
            if let Err(e) = converted {
                log::debug!("candidate {} dropped: {}", fp.index, e);
                stats.failed += 1;
                continue;
            }

            match self.filter.check(&fp) {
                Ok(()) => paths.push(fp),
                Err(violation) => {
                    log::debug!("candidate {} infeasible: {}", fp.index, violation);
                    match violation {
                        Violation::Speed { .. } => stats.rejected_speed += 1,
                        Violation::Accel { .. } => stats.rejected_accel += 1,
                        Violation::Curvature { .. } => stats.rejected_curvature += 1,
                    }
                }
            }
        }

        log::info!(
            "frenet plan: {} feasible of {} generated ({} failed, {} rejected)",
            paths.len(),
            stats.generated,
            stats.failed,
            stats.rejected()
        );
        if stats.degenerate_steps > 0 {
            log::warn!(
                "{} zero-length steps resolved by {:?}",
                stats.degenerate_steps,
                self.config.degenerate_step_policy
            );
        }

        PlanOutcome { paths, stats }
    }
}

impl<R: ReferencePath> TrajectoryPlanner for FrenetPlanner<R> {
    fn plan(&self, c_speed: f64, c_d: f64) -> PlannerResult<PlanOutcome> {
        Ok(self.run(c_speed, c_d))
    }
}
