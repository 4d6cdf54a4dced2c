//! Frenet to Cartesian conversion
//!
//! Fills `x, y, yaw, ds, c` on a sampled candidate. Positions come from
//! projecting the lateral offset perpendicular to a [`ReferencePath`];
//! the default [`StraightReference`] makes this the identity
//! `x = s, y = d`.

use crate::common::{Point2D, PlannerError, PlannerResult, ReferencePath};

use super::config::{DegenerateStepPolicy, FrenetConfig};
use super::frenet_path::FrenetPath;

/// Straight reference path along the x axis
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StraightReference;

impl ReferencePath for StraightReference {
    fn position_at(&self, s: f64) -> Point2D {
        Point2D::new(s, 0.0)
    }

    fn heading_at(&self, _s: f64) -> f64 {
        0.0
    }
}

#[derive(Debug, Clone)]
pub struct FrameConverter<R: ReferencePath = StraightReference> {
    reference: R,
    min_step_length: f64,
    policy: DegenerateStepPolicy,
}

impl FrameConverter<StraightReference> {
    pub fn new(config: &FrenetConfig) -> Self {
        Self::with_reference(StraightReference, config)
    }
}

impl<R: ReferencePath> FrameConverter<R> {
    pub fn with_reference(reference: R, config: &FrenetConfig) -> Self {
        Self {
            reference,
            min_step_length: config.min_step_length,
            policy: config.degenerate_step_policy,
        }
    }

    /// Populate the Cartesian series of `fp` in place
    ///
    /// Under [`DegenerateStepPolicy::Reject`] a step at or below the
    /// minimum length fails with [`PlannerError::DegenerateStep`]; the
    /// path is left partially converted and should be discarded.
    pub fn convert(&self, fp: &mut FrenetPath) -> PlannerResult<()> {
        let n = fp.len();
        let mut x = Vec::with_capacity(n);
        let mut y = Vec::with_capacity(n);
        for (&s, &d) in fp.s().iter().zip(fp.d().iter()) {
            let p = self.reference.position_at(s);
            let heading = self.reference.heading_at(s);
            x.push(p.x - d * heading.sin());
            y.push(p.y + d * heading.cos());
        }

        let mut yaw = Vec::with_capacity(n);
        let mut ds = Vec::with_capacity(n);
        for i in 0..n.saturating_sub(1) {
            let dx = x[i + 1] - x[i];
            let dy = y[i + 1] - y[i];
            yaw.push(dy.atan2(dx));
            ds.push((dx.powi(2) + dy.powi(2)).sqrt());
        }

        // keep yaw and ds full length
        match (yaw.last().copied(), ds.last().copied()) {
            (Some(last_yaw), Some(last_ds)) => {
                yaw.push(last_yaw);
                ds.push(last_ds);
            }
            _ if n == 1 => {
                yaw.push(0.0);
                ds.push(0.0);
            }
            _ => {}
        }

        fp.x = x;
        fp.y = y;
        fp.degenerate_steps = 0;

        let mut c = Vec::with_capacity(n.saturating_sub(1));
        for i in 0..yaw.len().saturating_sub(1) {
            if ds[i] <= self.min_step_length {
                fp.degenerate_steps += 1;
                match self.policy {
                    DegenerateStepPolicy::ZeroCurvature => {
                        c.push(0.0);
                        continue;
                    }
                    DegenerateStepPolicy::Reject => {
                        return Err(PlannerError::DegenerateStep { index: i, step: ds[i] });
                    }
                }
            }
            c.push((yaw[i + 1] - yaw[i]) / ds[i]);
        }

        fp.yaw = yaw;
        fp.ds = ds;
        fp.c = c;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;
    use std::sync::Arc;

    use crate::path_planning::frenet::{LateralProfile, LongitudinalProfile};
    use crate::path_planning::{QuarticPolynomial, QuinticPolynomial};

    fn path_from(s: Vec<f64>, d: Vec<f64>) -> FrenetPath {
        let n = s.len();
        let t: Vec<f64> = (0..n).map(|i| i as f64 * 0.1).collect();
        let lateral = LateralProfile {
            target_offset: 0.0,
            duration: n as f64 * 0.1,
            t,
            d,
            d_d: vec![0.0; n],
            d_dd: vec![0.0; n],
            d_ddd: vec![0.0; n],
        };
        let longitudinal = LongitudinalProfile {
            target_speed: 0.0,
            s,
            s_d: vec![0.0; n],
            s_dd: vec![0.0; n],
            s_ddd: vec![0.0; n],
        };
        FrenetPath::new(0, Arc::new(lateral), longitudinal)
    }

    fn sampled_path() -> FrenetPath {
        let lat_qp = QuinticPolynomial::new(1.0, 0.0, 0.0, -2.0, 0.0, 0.0, 5.0).unwrap();
        let lateral = Arc::new(LateralProfile::sample(&lat_qp, -2.0, 5.0, 0.1));
        let lon_qp = QuarticPolynomial::new(0.0, 10.0 / 3.6, 0.0, 30.0 / 3.6, 0.0, 5.0).unwrap();
        let longitudinal = LongitudinalProfile::sample(&lon_qp, 30.0 / 3.6, &lateral.t);
        FrenetPath::new(0, lateral, longitudinal)
    }

    #[test]
    fn test_direct_mapping_and_lengths() {
        let mut fp = sampled_path();
        FrameConverter::new(&FrenetConfig::default()).convert(&mut fp).unwrap();

        assert_eq!(fp.x, fp.s());
        assert_eq!(fp.y, fp.d());
        assert_eq!(fp.x.len(), fp.t().len());
        assert_eq!(fp.y.len(), fp.t().len());
        assert_eq!(fp.yaw.len(), fp.t().len());
        assert_eq!(fp.ds.len(), fp.t().len());
        assert_eq!(fp.c.len(), fp.t().len() - 1);
        assert!(fp.is_converted());
        assert_eq!(fp.degenerate_steps, 0);
    }

    #[test]
    fn test_yaw_ds_and_curvature() {
        // straight run then a 90 degree turn
        let mut fp = path_from(vec![0.0, 1.0, 2.0, 2.0], vec![0.0, 0.0, 0.0, 1.0]);
        FrameConverter::new(&FrenetConfig::default()).convert(&mut fp).unwrap();

        let expected_yaw = [0.0, 0.0, FRAC_PI_2, FRAC_PI_2];
        for (yaw, expected) in fp.yaw.iter().zip(expected_yaw.iter()) {
            assert!((yaw - expected).abs() < 1e-12);
        }
        assert_eq!(fp.ds, vec![1.0, 1.0, 1.0, 1.0]);
        assert_eq!(fp.c.len(), 3);
        assert_eq!(fp.c[0], 0.0);
        assert!((fp.c[1] - FRAC_PI_2).abs() < 1e-12);
        assert_eq!(fp.c[2], 0.0);
    }

    #[test]
    fn test_degenerate_step_zero_curvature() {
        let mut fp = path_from(vec![0.0, 1.0, 1.0, 2.0], vec![0.0, 0.0, 0.0, 0.5]);
        FrameConverter::new(&FrenetConfig::default()).convert(&mut fp).unwrap();

        assert_eq!(fp.degenerate_steps, 1);
        assert_eq!(fp.c[1], 0.0);
        assert!(fp.c.iter().all(|c| c.is_finite()));
    }

    #[test]
    fn test_degenerate_step_reject() {
        let config = FrenetConfig {
            degenerate_step_policy: DegenerateStepPolicy::Reject,
            ..Default::default()
        };
        let mut fp = path_from(vec![0.0, 1.0, 1.0, 2.0], vec![0.0, 0.0, 0.0, 0.5]);
        let result = FrameConverter::new(&config).convert(&mut fp);
        assert!(matches!(result, Err(PlannerError::DegenerateStep { index: 1, .. })));
    }

    #[test]
    fn test_single_sample_path() {
        let mut fp = path_from(vec![0.0], vec![1.0]);
        FrameConverter::new(&FrenetConfig::default()).convert(&mut fp).unwrap();
        assert_eq!(fp.yaw, vec![0.0]);
        assert_eq!(fp.ds, vec![0.0]);
        assert!(fp.c.is_empty());
    }

    #[test]
    fn test_conversion_is_repeatable() {
        let mut fp = sampled_path();
        let converter = FrameConverter::new(&FrenetConfig::default());
        converter.convert(&mut fp).unwrap();
        let c = fp.c.clone();
        converter.convert(&mut fp).unwrap();
        assert_eq!(fp.c, c);
        assert_eq!(fp.x.len(), fp.len());
    }

    struct RotatedReference;

    impl ReferencePath for RotatedReference {
        fn position_at(&self, s: f64) -> Point2D {
            Point2D::new(0.0, s)
        }

        fn heading_at(&self, _s: f64) -> f64 {
            FRAC_PI_2
        }
    }

    #[test]
    fn test_custom_reference_projection() {
        let mut fp = path_from(vec![0.0, 1.0, 2.0], vec![1.0, 1.0, 1.0]);
        let converter = FrameConverter::with_reference(RotatedReference, &FrenetConfig::default());
        converter.convert(&mut fp).unwrap();

        // positive offset lies to the left of a north-facing reference
        for (i, (&x, &y)) in fp.x.iter().zip(fp.y.iter()).enumerate() {
            assert!((x + 1.0).abs() < 1e-12);
            assert!((y - i as f64).abs() < 1e-12);
        }
        assert!((fp.yaw[0] - FRAC_PI_2).abs() < 1e-12);
    }
}
