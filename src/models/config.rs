//! Solver configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RouteError};

/// Configuration for a [`RouteSolver`](crate::solver::RouteSolver).
///
/// # Examples
///
/// ```
/// use survey_route::models::SolverConfig;
///
/// let config = SolverConfig::default()
///     .with_closed_tour(false)
///     .with_improvement_threshold(0.001);
/// assert!(!config.closed_tour);
/// assert_eq!(config.population_size, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Whether the route returns to its first point. The closing edge is
    /// counted in lengths and the first index is repeated at the end.
    pub closed_tour: bool,
    /// Population size hint for a genetic extension. Not used by
    /// construction, which always builds one tour per point.
    pub population_size: usize,
    /// Minimum relative improvement per 2-opt pass needed to run another pass.
    pub improvement_threshold: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            closed_tour: true,
            population_size: 10,
            improvement_threshold: 0.01,
        }
    }
}

impl SolverConfig {
    /// Sets whether the tour closes back to its start.
    pub fn with_closed_tour(mut self, closed: bool) -> Self {
        self.closed_tour = closed;
        self
    }

    /// Sets the population size hint.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Sets the default 2-opt improvement threshold.
    pub fn with_improvement_threshold(mut self, threshold: f64) -> Self {
        self.improvement_threshold = threshold;
        self
    }

    /// Checks that the configuration values are usable.
    pub fn validate(&self) -> Result<()> {
        validate_threshold(self.improvement_threshold)
    }
}

pub(crate) fn validate_threshold(threshold: f64) -> Result<()> {
    if !threshold.is_finite() || threshold < 0.0 {
        return Err(RouteError::invalid_input(format!(
            "improvement threshold must be finite and non-negative, got {threshold}"
        )));
    }
    Ok(())
}
