//! Error types for frenet_planner

use thiserror::Error;

/// Main error type for the Frenet planner
#[derive(Debug, Error)]
pub enum PlannerError {
    /// Invalid configuration parameter
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    /// Boundary-value solve is singular or numerically degenerate
    #[error("Singular system: boundary-value solve failed for duration {duration}")]
    SingularSystem { duration: f64 },
    /// Two consecutive samples coincide, so curvature is undefined
    #[error("Degenerate step: step length {step} at sample {index}")]
    DegenerateStep { index: usize, step: f64 },
    /// Configuration could not be parsed
    #[error("Configuration error: {0}")]
    Config(String),
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for PlannerError {
    fn from(e: toml::de::Error) -> Self {
        PlannerError::Config(e.to_string())
    }
}

/// Result type alias for planner operations
pub type PlannerResult<T> = Result<T, PlannerError>;
