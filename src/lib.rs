//! # survey-route
//!
//! Route planning for small sets of survey locations: nearest-neighbor tour
//! construction from every start, fitness-proportional selection, and 2-opt
//! refinement of the best tour.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, SolverConfig)
//! - [`distance`] — Distance matrix and nearest-neighbor ranking
//! - [`evaluation`] — Tour length and tour validation
//! - [`constructive`] — Nearest-neighbor tour construction
//! - [`selection`] — Population bookkeeping and roulette-wheel picking
//! - [`local_search`] — 2-opt segment reversal and refinement
//! - [`solver`] — [`RouteSolver`], the entry point for collaborators
//! - [`error`] — Error taxonomy

pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod local_search;
pub mod models;
pub mod selection;
pub mod solver;

pub use error::{Result, RouteError};
pub use models::{Point, SolverConfig};
pub use solver::RouteSolver;
