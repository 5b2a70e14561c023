//! Error types for route construction and refinement.

use thiserror::Error;

/// Errors raised while validating input to the route solver.
///
/// All validation happens up front; once a [`RouteSolver`](crate::solver::RouteSolver)
/// has been constructed, no further operation on it can fail on its own data.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RouteError {
    /// The point set or configuration cannot produce a usable population.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// A caller-supplied tour is not a valid visiting sequence.
    #[error("invalid tour: {0}")]
    InvalidTour(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, RouteError>;

impl RouteError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn invalid_tour(message: impl Into<String>) -> Self {
        Self::InvalidTour(message.into())
    }
}
