//! Plotting for candidate trajectory sets
//!
//! Thin layer over gnuplot: draws the reference line, every candidate in a
//! cycling palette and the start point, then writes an SVG.

use gnuplot::{AutoOption, AxesCommon, Caption, Color, Figure, LineWidth, PointSize, PointSymbol};

use crate::common::{Path2D, Point2D};
use crate::path_planning::frenet::FrenetPath;

pub mod colors {
    pub const RED: &str = "#FF0000";
    pub const GREEN: &str = "#00FF00";
    pub const BLUE: &str = "#0000FF";
    pub const CYAN: &str = "#00FFFF";
    pub const MAGENTA: &str = "#FF00FF";
    pub const ORANGE: &str = "#FFA500";
    pub const PURPLE: &str = "#800080";
    pub const GRAY: &str = "#808080";

    pub const START: &str = GREEN;
    pub const REFERENCE: &str = GRAY;

    /// Cycled through when drawing many candidates
    pub const CANDIDATES: [&str; 6] = [RED, BLUE, ORANGE, PURPLE, MAGENTA, CYAN];
}

#[derive(Debug, Clone)]
pub struct PathStyle {
    pub color: String,
    pub line_width: f64,
    pub caption: String,
}

impl PathStyle {
    pub fn new(color: &str, caption: &str) -> Self {
        Self {
            color: color.to_string(),
            line_width: 2.0,
            caption: caption.to_string(),
        }
    }

    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = width;
        self
    }
}

#[derive(Debug, Clone)]
pub struct PointStyle {
    pub color: String,
    pub size: f64,
    pub caption: String,
}

impl PointStyle {
    pub fn new(color: &str, caption: &str) -> Self {
        Self {
            color: color.to_string(),
            size: 1.0,
            caption: caption.to_string(),
        }
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }
}

/// Candidate plot in the `(s, d)` plane
pub struct Visualizer {
    figure: Figure,
    title: String,
    x_range: Option<(f64, f64)>,
    y_range: Option<(f64, f64)>,
}

impl Visualizer {
    pub fn new() -> Self {
        Self {
            figure: Figure::new(),
            title: String::new(),
            x_range: None,
            y_range: None,
        }
    }

    pub fn set_title(&mut self, title: &str) -> &mut Self {
        self.title = title.to_string();
        self
    }

    /// Fix both axes to the extent of `paths` plus `margin` on every side
    ///
    /// Leaves the axes on autoscale when no path has been converted.
    pub fn fit_to_paths(&mut self, paths: &[FrenetPath], margin: f64) -> &mut Self {
        let xs = paths.iter().flat_map(|fp| fp.x.iter().copied());
        let ys = paths.iter().flat_map(|fp| fp.y.iter().copied());
        if let (Some(x), Some(y)) = (extent(xs), extent(ys)) {
            self.x_range = Some((x.0 - margin, x.1 + margin));
            self.y_range = Some((y.0 - margin, y.1 + margin));
        }
        self
    }

    pub fn plot_path(&mut self, path: &Path2D, style: &PathStyle) -> &mut Self {
        self.figure.axes2d().lines(
            &path.x_coords(),
            &path.y_coords(),
            &[Caption(&style.caption), Color(&style.color), LineWidth(style.line_width)],
        );
        self
    }

    pub fn plot_frenet_path(&mut self, fp: &FrenetPath, style: &PathStyle) -> &mut Self {
        self.plot_path(&fp.to_path(), style)
    }

    /// Plot a candidate set, cycling through the candidate palette
    pub fn plot_frenet_paths(&mut self, paths: &[FrenetPath]) -> &mut Self {
        for (fp, color) in paths.iter().zip(colors::CANDIDATES.iter().cycle()) {
            self.plot_frenet_path(fp, &PathStyle::new(color, "").with_line_width(1.0));
        }
        self
    }

    pub fn plot_point(&mut self, point: Point2D, style: &PointStyle) -> &mut Self {
        self.figure.axes2d().points(
            &[point.x],
            &[point.y],
            &[Caption(&style.caption), Color(&style.color), PointSymbol('O'), PointSize(style.size)],
        );
        self
    }

    pub fn plot_start(&mut self, point: Point2D) -> &mut Self {
        self.plot_point(point, &PointStyle::new(colors::START, "Start").with_size(1.5))
    }

    pub fn save_svg(&mut self, path: &str, width: u32, height: u32) -> Result<(), String> {
        self.apply_settings();
        self.figure.save_to_svg(path, width, height).map_err(|e| e.to_string())
    }

    fn apply_settings(&mut self) {
        let axes = self.figure.axes2d();
        if !self.title.is_empty() {
            axes.set_title(&self.title, &[]);
        }
        axes.set_x_label("s [m]", &[]);
        axes.set_y_label("d [m]", &[]);
        if let Some((min, max)) = self.x_range {
            axes.set_x_range(AutoOption::Fix(min), AutoOption::Fix(max));
        }
        if let Some((min, max)) = self.y_range {
            axes.set_y_range(AutoOption::Fix(min), AutoOption::Fix(max));
        }
    }
}

impl Default for Visualizer {
    fn default() -> Self {
        Self::new()
    }
}

fn extent(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::TrajectoryPlanner;
    use crate::path_planning::frenet::FrenetPlanner;

    #[test]
    fn test_path_style() {
        let style = PathStyle::new(colors::RED, "Test Path").with_line_width(3.0);
        assert_eq!(style.line_width, 3.0);
        assert_eq!(style.color, colors::RED);
    }

    #[test]
    fn test_fit_to_candidates() {
        let outcome = FrenetPlanner::with_defaults().unwrap().plan(10.0 / 3.6, 1.0).unwrap();
        let mut vis = Visualizer::new();
        vis.set_title("Candidates").fit_to_paths(&outcome.paths, 1.0);

        let (x_min, x_max) = vis.x_range.unwrap();
        let (y_min, y_max) = vis.y_range.unwrap();
        assert_eq!(x_min, -1.0);
        for fp in &outcome.paths {
            assert!(fp.x.iter().all(|&x| x > x_min && x < x_max));
            assert!(fp.y.iter().all(|&y| y > y_min && y < y_max));
        }
        assert_eq!(vis.title, "Candidates");
    }

    #[test]
    fn test_fit_to_nothing_keeps_autoscale() {
        let mut vis = Visualizer::new();
        vis.fit_to_paths(&[], 1.0);
        assert!(vis.x_range.is_none());
        assert!(vis.y_range.is_none());
    }
}
