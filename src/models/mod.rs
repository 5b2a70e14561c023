//! Domain model types for survey route planning.
//!
//! Points are the caller-supplied locations; the configuration carries the
//! closed-tour flag and refinement parameters into the solver.

mod config;
mod point;

pub(crate) use config::validate_threshold;
pub use config::SolverConfig;
pub use point::Point;
