//! Quintic polynomial profile
//!
//! Closed-form 5th-degree polynomial fitted to position, velocity and
//! acceleration at both ends of a maneuver. Used for lateral offset
//! profiles in the Frenet planner.

use nalgebra::{Matrix3, Vector3};

use crate::common::{MotionProfile, PlannerError, PlannerResult};

/// Durations at or below this are treated as a singular boundary-value solve
pub const MIN_DURATION: f64 = 1e-6;

/// Reject durations the boundary-value systems cannot be solved for
pub(crate) fn check_duration(time: f64) -> PlannerResult<()> {
    if !time.is_finite() || time <= MIN_DURATION {
        return Err(PlannerError::SingularSystem { duration: time });
    }
    Ok(())
}

/// Largest end-state miss accepted from a solve, relative to the size of
/// the boundary values
pub const BOUNDARY_TOLERANCE: f64 = 1e-6;

/// Reject a solve whose profile misses the end state it was solved for
///
/// Short durations leave the system badly conditioned: the LU solve
/// succeeds but the coefficients no longer reproduce the boundary.
pub(crate) fn check_end_state(time: f64, boundary: &[f64], end: &[(f64, f64)]) -> PlannerResult<()> {
    let scale = boundary.iter().fold(1.0_f64, |m, v| m.max(v.abs()));
    let tol = BOUNDARY_TOLERANCE * scale;
    if end.iter().all(|&(want, got)| (want - got).abs() <= tol) {
        Ok(())
    } else {
        Err(PlannerError::SingularSystem { duration: time })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuinticPolynomial {
    pub a0: f64,
    pub a1: f64,
    pub a2: f64,
    pub a3: f64,
    pub a4: f64,
    pub a5: f64,
    pub duration: f64,
}

impl QuinticPolynomial {
    /// Solve the coefficients from start state `(xs, vxs, axs)`, end state
    /// `(xe, vxe, axe)` and maneuver duration `time`
    pub fn new(xs: f64, vxs: f64, axs: f64, xe: f64, vxe: f64, axe: f64, time: f64) -> PlannerResult<Self> {
        check_duration(time)?;

        let a0 = xs;
        let a1 = vxs;
        let a2 = axs / 2.0;

        let t2 = time * time;
        let t3 = t2 * time;
        let t4 = t3 * time;
        let t5 = t4 * time;

        // A * [a3, a4, a5]^T = b
        let a = Matrix3::new(
            t3, t4, t5,
            3.0 * t2, 4.0 * t3, 5.0 * t4,
            6.0 * time, 12.0 * t2, 20.0 * t3,
        );

        let b = Vector3::new(
            xe - a0 - a1 * time - a2 * t2,
            vxe - a1 - 2.0 * a2 * time,
            axe - 2.0 * a2,
        );

        let x = a
            .lu()
            .solve(&b)
            .filter(|x| x.iter().all(|c| c.is_finite()))
            .ok_or(PlannerError::SingularSystem { duration: time })?;

        let qp = QuinticPolynomial {
            a0,
            a1,
            a2,
            a3: x[0],
            a4: x[1],
            a5: x[2],
            duration: time,
        };
        check_end_state(
            time,
            &[xs, vxs, axs, xe, vxe, axe],
            &[
                (xe, qp.calc_point(time)),
                (vxe, qp.calc_first_derivative(time)),
                (axe, qp.calc_second_derivative(time)),
            ],
        )?;
        Ok(qp)
    }

    pub fn coefficients(&self) -> [f64; 6] {
        [self.a0, self.a1, self.a2, self.a3, self.a4, self.a5]
    }
}

impl MotionProfile for QuinticPolynomial {
    fn calc_point(&self, t: f64) -> f64 {
        self.a0 + self.a1 * t + self.a2 * t.powi(2) +
        self.a3 * t.powi(3) + self.a4 * t.powi(4) + self.a5 * t.powi(5)
    }

    fn calc_first_derivative(&self, t: f64) -> f64 {
        self.a1 + 2.0 * self.a2 * t +
        3.0 * self.a3 * t.powi(2) + 4.0 * self.a4 * t.powi(3) + 5.0 * self.a5 * t.powi(4)
    }

    fn calc_second_derivative(&self, t: f64) -> f64 {
        2.0 * self.a2 + 6.0 * self.a3 * t +
        12.0 * self.a4 * t.powi(2) + 20.0 * self.a5 * t.powi(3)
    }

    fn calc_third_derivative(&self, t: f64) -> f64 {
        6.0 * self.a3 + 24.0 * self.a4 * t + 60.0 * self.a5 * t.powi(2)
    }
}
