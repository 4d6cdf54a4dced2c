//! Quartic polynomial profile for velocity keeping
//!
//! Start position, velocity and acceleration are fixed; only the end
//! velocity and acceleration are constrained, so the final position is
//! free.

use nalgebra::{Matrix2, Vector2};

use crate::common::{MotionProfile, PlannerError, PlannerResult};

use super::quintic_polynomials::{check_duration, check_end_state};

#[derive(Debug, Clone, PartialEq)]
pub struct QuarticPolynomial {
    pub a0: f64,
    pub a1: f64,
    pub a2: f64,
    pub a3: f64,
    pub a4: f64,
    pub duration: f64,
}

impl QuarticPolynomial {
    pub fn new(xs: f64, vxs: f64, axs: f64, vxe: f64, axe: f64, time: f64) -> PlannerResult<Self> {
        check_duration(time)?;

        let a0 = xs;
        let a1 = vxs;
        let a2 = axs / 2.0;

        let t2 = time * time;
        let t3 = t2 * time;

        // Solve for a3, a4
        let a = Matrix2::new(
            3.0 * t2, 4.0 * t3,
            6.0 * time, 12.0 * t2,
        );

        let b = Vector2::new(
            vxe - a1 - 2.0 * a2 * time,
            axe - 2.0 * a2,
        );

        let x = a
            .lu()
            .solve(&b)
            .filter(|x| x.iter().all(|c| c.is_finite()))
            .ok_or(PlannerError::SingularSystem { duration: time })?;

        let qp = QuarticPolynomial {
            a0,
            a1,
            a2,
            a3: x[0],
            a4: x[1],
            duration: time,
        };
        // end position is free, only velocity and acceleration are pinned
        check_end_state(
            time,
            &[xs, vxs, axs, vxe, axe],
            &[(vxe, qp.calc_first_derivative(time)), (axe, qp.calc_second_derivative(time))],
        )?;
        Ok(qp)
    }

    pub fn coefficients(&self) -> [f64; 5] {
        [self.a0, self.a1, self.a2, self.a3, self.a4]
    }
}

impl MotionProfile for QuarticPolynomial {
    fn calc_point(&self, t: f64) -> f64 {
        self.a0 + self.a1 * t + self.a2 * t.powi(2) + self.a3 * t.powi(3) + self.a4 * t.powi(4)
    }

    fn calc_first_derivative(&self, t: f64) -> f64 {
        self.a1 + 2.0 * self.a2 * t + 3.0 * self.a3 * t.powi(2) + 4.0 * self.a4 * t.powi(3)
    }

    fn calc_second_derivative(&self, t: f64) -> f64 {
        2.0 * self.a2 + 6.0 * self.a3 * t + 12.0 * self.a4 * t.powi(2)
    }

    fn calc_third_derivative(&self, t: f64) -> f64 {
        6.0 * self.a3 + 24.0 * self.a4 * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const TOL: f64 = 1e-6;

    #[test]
    fn test_velocity_keeping_boundaries() {
        let c_speed = 10.0 / 3.6;
        let target = 30.0 / 3.6;
        let qp = QuarticPolynomial::new(0.0, c_speed, 0.0, target, 0.0, 5.0).unwrap();

        assert!(qp.calc_point(0.0).abs() < TOL);
        assert!((qp.calc_first_derivative(0.0) - c_speed).abs() < TOL);
        assert!(qp.calc_second_derivative(0.0).abs() < TOL);
        assert!((qp.calc_first_derivative(5.0) - target).abs() < TOL);
        assert!(qp.calc_second_derivative(5.0).abs() < TOL);
        // accelerating the whole way, so distance exceeds cruising at c_speed
        assert!(qp.calc_point(5.0) > c_speed * 5.0);
    }

    #[test]
    fn test_random_boundaries_reproduced() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let xs = rng.gen_range(-10.0..10.0);
            let vxs = rng.gen_range(-5.0..15.0);
            let axs = rng.gen_range(-2.0..2.0);
            let vxe = rng.gen_range(-5.0..15.0);
            let axe = rng.gen_range(-2.0..2.0);
            let time = rng.gen_range(0.5..10.0);

            let qp = QuarticPolynomial::new(xs, vxs, axs, vxe, axe, time).unwrap();
            assert!((qp.calc_point(0.0) - xs).abs() < TOL);
            assert!((qp.calc_first_derivative(0.0) - vxs).abs() < TOL);
            assert!((qp.calc_second_derivative(0.0) - axs).abs() < TOL);
            assert!((qp.calc_first_derivative(time) - vxe).abs() < TOL);
            assert!((qp.calc_second_derivative(time) - axe).abs() < TOL);
        }
    }

    #[test]
    fn test_constant_speed_is_linear() {
        let qp = QuarticPolynomial::new(2.0, 3.0, 0.0, 3.0, 0.0, 4.0).unwrap();
        let c = qp.coefficients();
        assert!(c[3].abs() < 1e-9 && c[4].abs() < 1e-9);
        assert!((qp.calc_point(4.0) - 14.0).abs() < 1e-9);
        assert!(qp.calc_third_derivative(2.0).abs() < 1e-9);
    }

    #[test]
    fn test_singular_durations() {
        for time in [0.0, -2.0, f64::NAN] {
            let result = QuarticPolynomial::new(0.0, 1.0, 0.0, 2.0, 0.0, time);
            assert!(matches!(result, Err(PlannerError::SingularSystem { .. })));
        }
    }

    #[test]
    fn test_short_durations_keep_end_state() {
        let (c_speed, target) = (10.0 / 3.6, 30.0 / 3.6);
        for time in [2e-6, 1e-5, 1e-4, 1e-3] {
            match QuarticPolynomial::new(0.0, c_speed, 0.0, target, 0.0, time) {
                Ok(qp) => {
                    let tol = target * crate::path_planning::BOUNDARY_TOLERANCE;
                    assert!((qp.calc_first_derivative(time) - target).abs() <= tol, "T={}", time);
                    assert!(qp.calc_second_derivative(time).abs() <= tol, "T={}", time);
                }
                Err(e) => assert!(matches!(e, PlannerError::SingularSystem { .. })),
            }
        }
    }
}
