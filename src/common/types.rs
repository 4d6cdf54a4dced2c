//! Common types used throughout frenet_planner

use nalgebra::Vector2;

/// 2D point representation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn distance(&self, other: &Point2D) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    pub fn to_vector(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl From<(f64, f64)> for Point2D {
    fn from(tuple: (f64, f64)) -> Self {
        Self { x: tuple.0, y: tuple.1 }
    }
}

impl From<Vector2<f64>> for Point2D {
    fn from(v: Vector2<f64>) -> Self {
        Self { x: v[0], y: v[1] }
    }
}

/// Path represented as a sequence of 2D points
#[derive(Debug, Clone, Default)]
pub struct Path2D {
    pub points: Vec<Point2D>,
}

impl Path2D {
    pub fn from_points(points: Vec<Point2D>) -> Self {
        Self { points }
    }

    /// Zip parallel coordinate slices; the shorter slice bounds the result
    pub fn from_xy(x: &[f64], y: &[f64]) -> Self {
        let points = x.iter().zip(y.iter())
            .map(|(&x, &y)| Point2D::new(x, y))
            .collect();
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn x_coords(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    pub fn y_coords(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }

    pub fn total_length(&self) -> f64 {
        if self.points.len() < 2 {
            return 0.0;
        }
        self.points.windows(2)
            .map(|w| w[0].distance(&w[1]))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point2d_distance() {
        let p1 = Point2D::new(0.0, 0.0);
        let p2 = Point2D::new(3.0, 4.0);
        assert!((p1.distance(&p2) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_point2d_from_vector() {
        let p: Point2D = Vector2::new(1.5, -2.0).into();
        assert_eq!(p, Point2D::new(1.5, -2.0));
        assert_eq!(p.to_vector(), Vector2::new(1.5, -2.0));
    }

    #[test]
    fn test_path2d_total_length() {
        let path = Path2D::from_xy(&[0.0, 1.0, 1.0], &[0.0, 0.0, 1.0]);
        assert_eq!(path.len(), 3);
        assert!((path.total_length() - 2.0).abs() < 1e-10);
    }
}
