//! Common types, traits, and error definitions for frenet_planner
//!
//! This module provides the foundational building blocks shared by
//! the polynomial solvers and the Frenet planning pipeline.

pub mod types;
pub mod traits;
pub mod error;

pub use types::*;
pub use traits::*;
pub use error::*;
