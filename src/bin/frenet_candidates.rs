// Frenet candidate trajectories
//
// Plans the feasible candidate set for a vehicle at 10 km/h, 1 m off the
// reference line, and renders every feasible candidate.
//
// usage: frenet_candidates [config.toml]
use std::io::Write;
use std::path::Path;

use frenet_planner::utils::{colors, PathStyle, Visualizer};
use frenet_planner::{FrenetConfig, FrenetPlanner, Path2D, Point2D, TrajectoryPlanner};

const OUTPUT_SVG: &str = "img/path_planning/frenet_candidates.svg";

fn load_config() -> FrenetConfig {
    match std::env::args().nth(1) {
        Some(path) => match FrenetConfig::load(Path::new(&path)) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Failed to load config {}: {}", path, e);
                FrenetConfig::default()
            }
        },
        None => FrenetConfig::default(),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(buf, "[{}] {} - {}", record.level(), record.target(), record.args())
        })
        .init();

    log::info!("Frenet candidate planner start!!");

    let c_speed = 10.0 / 3.6; // current speed [m/s]
    let c_d = 1.0; // current lateral offset [m]

    let planner = match FrenetPlanner::new(load_config()) {
        Ok(planner) => planner,
        Err(e) => {
            log::error!("Invalid planner configuration: {}", e);
            std::process::exit(1);
        }
    };

    let outcome = match planner.plan(c_speed, c_d) {
        Ok(outcome) => outcome,
        Err(e) => {
            log::error!("Planning failed: {}", e);
            std::process::exit(1);
        }
    };

    let stats = &outcome.stats;
    if outcome.nothing_generated() {
        log::warn!("Search grid produced no candidates");
    } else if outcome.is_empty() {
        log::warn!(
            "No feasible candidate ({} speed, {} accel, {} curvature rejections)",
            stats.rejected_speed,
            stats.rejected_accel,
            stats.rejected_curvature
        );
    }

    for fp in &outcome.paths {
        log::debug!(
            "#{:3} d={:5.1} T={:4.1} v={:5.2}  |v|max={:5.2} |a|max={:4.2} |c|max={:5.3}",
            fp.index,
            fp.target_offset(),
            fp.duration(),
            fp.target_speed(),
            fp.max_abs_speed(),
            fp.max_abs_accel(),
            fp.max_abs_curvature()
        );
    }

    let mut vis = Visualizer::new();
    vis.set_title("Frenet Candidate Trajectories")
        .fit_to_paths(&outcome.paths, 1.0);
    let reference_end = outcome.paths.iter()
        .filter_map(|fp| fp.x.last().copied())
        .fold(0.0, f64::max);
    vis.plot_path(
        &Path2D::from_points(vec![Point2D::origin(), Point2D::new(reference_end, 0.0)]),
        &PathStyle::new(colors::REFERENCE, "Reference"),
    );
    vis.plot_frenet_paths(&outcome.paths);
    vis.plot_start(Point2D::new(0.0, c_d));

    if let Err(e) = std::fs::create_dir_all("img/path_planning") {
        log::warn!("Failed to create output directory: {}", e);
    }
    match vis.save_svg(OUTPUT_SVG, 800, 600) {
        Ok(()) => log::info!("Plot saved to {}", OUTPUT_SVG),
        Err(e) => log::warn!("Failed to save SVG: {}", e),
    }

    log::info!(
        "Frenet candidate planner finish!! {} feasible of {} generated",
        outcome.paths.len(),
        stats.generated
    );
}
