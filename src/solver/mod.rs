//! The route solver façade used by map and log collaborators.
//!
//! - [`RouteSolver`] — Points in, ordered visiting sequence out

mod route_solver;

pub use route_solver::RouteSolver;
