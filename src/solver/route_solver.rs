//! Route solver: construction, selection and refinement behind one type.

use log::debug;
use rand::Rng;

use crate::constructive::nearest_neighbor_population;
use crate::distance::{DistanceMatrix, NeighbourRank};
use crate::error::{Result, RouteError};
use crate::evaluation::{tour_length, validate_tour};
use crate::local_search::{two_opt_refine, RefineOutcome};
use crate::models::{validate_threshold, Point, SolverConfig};
use crate::selection::Population;

/// Plans a short visiting order over a set of survey locations.
///
/// Construction computes the distance matrix and neighbor ranking, builds one
/// nearest-neighbor tour per starting location and scores them. Everything is
/// immutable afterwards; [`refine`](Self::refine) works on a copy of the best
/// tour.
///
/// Tours are index sequences into the point slice given at construction.
/// With a closed configuration they start at 0 and end with a repeated 0.
///
/// # Examples
///
/// ```
/// use survey_route::models::Point;
/// use survey_route::solver::RouteSolver;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 10.0),
///     Point::new(10.0, 10.0),
///     Point::new(10.0, 0.0),
/// ];
/// let solver = RouteSolver::construct(&points, true).unwrap();
/// let route = solver.refine();
/// assert_eq!(route.len(), 5);
/// assert!((solver.tour_length(&route) - 40.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct RouteSolver {
    points: Vec<Point>,
    config: SolverConfig,
    distances: DistanceMatrix,
    rank: NeighbourRank,
    population: Population,
}

impl RouteSolver {
    /// Builds a solver with default settings apart from the closed-tour flag.
    pub fn construct(points: &[Point], closed_tour: bool) -> Result<Self> {
        Self::new(points, SolverConfig::default().with_closed_tour(closed_tour))
    }

    /// Builds a solver for `points` with the given configuration.
    ///
    /// Fails with [`RouteError::InvalidInput`] if there are fewer than two
    /// points, a coordinate is not finite, two points coincide, or the
    /// configuration is invalid.
    pub fn new(points: &[Point], config: SolverConfig) -> Result<Self> {
        config.validate()?;
        if points.len() < 2 {
            return Err(RouteError::invalid_input(format!(
                "need at least 2 points, got {}",
                points.len()
            )));
        }
        if let Some(idx) = points.iter().position(|p| !p.is_finite()) {
            return Err(RouteError::invalid_input(format!(
                "point {idx} has a non-finite coordinate"
            )));
        }

        let distances = DistanceMatrix::from_points(points);
        if let Some((i, j)) = first_coincident_pair(&distances) {
            return Err(RouteError::invalid_input(format!(
                "points {i} and {j} coincide"
            )));
        }

        let rank = NeighbourRank::from_matrix(&distances);
        let tours = nearest_neighbor_population(&rank, config.closed_tour);
        let population = Population::new(tours, &distances, config.closed_tour)?;

        debug!(
            "route solver: {} points, closed={}, best construction length {:.4} (tour {})",
            points.len(),
            config.closed_tour,
            population.lengths()[population.best_index()],
            population.best_index()
        );

        Ok(Self {
            points: points.to_vec(),
            config,
            distances,
            rank,
            population,
        })
    }

    /// The points this solver was built from, in index order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of locations.
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// The configuration this solver was built with.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Whether tours close back to their start.
    pub fn is_closed(&self) -> bool {
        self.config.closed_tour
    }

    /// Pairwise distance matrix.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Nearest-first neighbor ranking per location.
    pub fn neighbour_rank(&self) -> &NeighbourRank {
        &self.rank
    }

    /// All constructed tours with their lengths, fitnesses and probabilities.
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// The constructed tour with maximum fitness, before refinement.
    pub fn best_tour(&self) -> &[usize] {
        self.population.best()
    }

    /// Length of [`best_tour`](Self::best_tour).
    pub fn best_length(&self) -> f64 {
        self.population.lengths()[self.population.best_index()]
    }

    /// Total length of `tour` under this solver's closed-tour setting.
    ///
    /// # Panics
    ///
    /// Panics if the tour contains an index outside `0..num_points()`.
    pub fn tour_length(&self, tour: &[usize]) -> f64 {
        tour_length(tour, &self.distances, self.config.closed_tour)
    }

    /// Refines the best tour with 2-opt using the configured threshold.
    pub fn refine(&self) -> Vec<usize> {
        self.refine_with_threshold(self.config.improvement_threshold)
    }

    /// Refines the best tour with 2-opt using an explicit threshold.
    pub fn refine_with_threshold(&self, threshold: f64) -> Vec<usize> {
        self.refine_outcome_with_threshold(threshold).tour
    }

    /// Like [`refine`](Self::refine) but also reports passes and swaps.
    pub fn refine_outcome(&self) -> RefineOutcome {
        self.refine_outcome_with_threshold(self.config.improvement_threshold)
    }

    /// Like [`refine_with_threshold`](Self::refine_with_threshold) but also
    /// reports passes and swaps.
    pub fn refine_outcome_with_threshold(&self, threshold: f64) -> RefineOutcome {
        let outcome = two_opt_refine(
            self.best_tour(),
            &self.distances,
            self.config.closed_tour,
            threshold,
        );
        debug!(
            "refined best tour: {:.4} -> {:.4} in {} passes, {} swaps",
            self.best_length(),
            outcome.length,
            outcome.passes,
            outcome.swaps
        );
        outcome
    }

    /// Refines an arbitrary caller-supplied tour.
    ///
    /// The tour must be a permutation of all locations, with its first index
    /// repeated at the end when the solver is closed.
    pub fn refine_tour(&self, tour: &[usize], threshold: f64) -> Result<RefineOutcome> {
        validate_threshold(threshold)?;
        validate_tour(tour, self.num_points(), self.config.closed_tour)?;
        Ok(two_opt_refine(
            tour,
            &self.distances,
            self.config.closed_tour,
            threshold,
        ))
    }

    /// Picks a constructed tour with probability proportional to its fitness.
    pub fn pick_tour<R: Rng>(&self, rng: &mut R) -> &[usize] {
        self.population.pick(rng)
    }

    /// Maps a tour to the coordinates it visits, in order.
    ///
    /// # Panics
    ///
    /// Panics if the tour contains an index outside `0..num_points()`.
    pub fn ordered_points(&self, tour: &[usize]) -> Vec<Point> {
        tour.iter().map(|&idx| self.points[idx]).collect()
    }
}

fn first_coincident_pair(distances: &DistanceMatrix) -> Option<(usize, usize)> {
    let n = distances.size();
    (0..n)
        .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
        .find(|&(i, j)| distances.get(i, j) == 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_10() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 10.0),
            Point::new(10.0, 10.0),
            Point::new(10.0, 0.0),
        ]
    }

    fn scattered() -> Vec<Point> {
        vec![
            Point::new(12.0, 3.0),
            Point::new(1.0, 14.0),
            Point::new(7.0, 7.0),
            Point::new(15.0, 15.0),
            Point::new(3.0, 2.0),
            Point::new(9.0, 12.0),
            Point::new(14.0, 8.0),
            Point::new(5.0, 10.0),
            Point::new(0.0, 6.0),
            Point::new(11.0, 0.0),
        ]
    }

    fn assert_closed_permutation(tour: &[usize], n: usize) {
        assert_eq!(tour.len(), n + 1);
        assert_eq!(tour[0], 0);
        assert_eq!(tour[n], 0);
        let mut body = tour[..n].to_vec();
        body.sort();
        assert_eq!(body, (0..n).collect::<Vec<_>>());
    }

    #[test]
    fn test_construct_square() {
        let solver = RouteSolver::construct(&square_10(), true).expect("valid");
        assert_eq!(solver.num_points(), 4);
        assert_eq!(solver.population().len(), 4);
        assert!(solver.is_closed());
        assert_closed_permutation(solver.best_tour(), 4);
        assert!((solver.best_length() - 40.0).abs() < 1e-10);
    }

    #[test]
    fn test_refine_square_perimeter() {
        let solver = RouteSolver::construct(&square_10(), true).expect("valid");
        let refined = solver.refine();
        assert_closed_permutation(&refined, 4);
        assert!((solver.tour_length(&refined) - 40.0).abs() < 1e-10);
    }

    #[test]
    fn test_population_all_permutations() {
        let points = scattered();
        let solver = RouteSolver::construct(&points, true).expect("valid");
        for tour in solver.population().tours() {
            assert_closed_permutation(tour, points.len());
        }
    }

    #[test]
    fn test_open_population() {
        let points = scattered();
        let solver = RouteSolver::construct(&points, false).expect("valid");
        for tour in solver.population().tours() {
            assert_eq!(tour.len(), points.len());
            assert_eq!(tour[0], 0);
            let mut sorted = tour.clone();
            sorted.sort();
            assert_eq!(sorted, (0..points.len()).collect::<Vec<_>>());
        }
        let refined = solver.refine();
        assert_eq!(refined.len(), points.len());
        assert!(solver.tour_length(&refined) <= solver.best_length() + 1e-10);
    }

    #[test]
    fn test_best_is_min_length() {
        let solver = RouteSolver::construct(&scattered(), true).expect("valid");
        let min = solver
            .population()
            .lengths()
            .iter()
            .copied()
            .fold(f64::INFINITY, f64::min);
        assert!((solver.best_length() - min).abs() < 1e-10);
        assert!((solver.tour_length(solver.best_tour()) - min).abs() < 1e-10);
    }

    #[test]
    fn test_refine_not_worse_than_best() {
        let solver = RouteSolver::construct(&scattered(), true).expect("valid");
        let outcome = solver.refine_outcome();
        assert!(outcome.length <= solver.best_length() + 1e-10);
        assert_closed_permutation(&outcome.tour, 10);
    }

    #[test]
    fn test_two_points() {
        let points = vec![Point::new(0.0, 0.0), Point::new(3.0, 4.0)];
        let solver = RouteSolver::construct(&points, true).expect("valid");
        assert_eq!(solver.best_tour(), &[0, 1, 0]);
        let outcome = solver.refine_outcome();
        assert_eq!(outcome.tour, vec![0, 1, 0]);
        assert_eq!(outcome.swaps, 0);
        assert!(outcome.is_degenerate());
        assert!((solver.tour_length(&outcome.tour) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_too_few_points() {
        let err = RouteSolver::construct(&[], true).unwrap_err();
        assert!(matches!(err, RouteError::InvalidInput(_)));
        let err = RouteSolver::construct(&[Point::new(1.0, 1.0)], true).unwrap_err();
        assert!(matches!(err, RouteError::InvalidInput(_)));
    }

    #[test]
    fn test_coincident_points_rejected() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(2.0, 2.0),
            Point::new(0.0, 0.0),
        ];
        let err = RouteSolver::construct(&points, true).unwrap_err();
        assert_eq!(err, RouteError::invalid_input("points 0 and 2 coincide"));
    }

    #[test]
    fn test_non_finite_rejected() {
        let points = vec![Point::new(0.0, 0.0), Point::new(f64::NAN, 1.0)];
        assert!(RouteSolver::construct(&points, true).is_err());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SolverConfig::default().with_improvement_threshold(-1.0);
        assert!(RouteSolver::new(&square_10(), config).is_err());
    }

    #[test]
    fn test_refine_tour_validates() {
        let solver = RouteSolver::construct(&square_10(), true).expect("valid");
        assert!(matches!(
            solver.refine_tour(&[0, 1, 2, 3], 0.01),
            Err(RouteError::InvalidTour(_))
        ));
        let outcome = solver.refine_tour(&[0, 2, 1, 3, 0], 0.01).expect("valid tour");
        assert!((outcome.length - 40.0).abs() < 1e-10);
    }

    #[test]
    fn test_refine_twice_same_length() {
        let solver = RouteSolver::construct(&scattered(), true).expect("valid");
        let first = solver.refine_with_threshold(0.0);
        let second = solver.refine_tour(&first, 0.0).expect("valid tour");
        assert!((second.length - solver.tour_length(&first)).abs() < 1e-10);
    }

    #[test]
    fn test_pick_tour_is_member() {
        let solver = RouteSolver::construct(&scattered(), true).expect("valid");
        let mut rng = u_numflow::random::create_rng(42);
        for _ in 0..20 {
            let tour = solver.pick_tour(&mut rng);
            assert!(solver
                .population()
                .tours()
                .iter()
                .any(|t| t.as_slice() == tour));
        }
    }

    #[test]
    fn test_ordered_points() {
        let points = square_10();
        let solver = RouteSolver::construct(&points, true).expect("valid");
        let ordered = solver.ordered_points(&[0, 3, 2, 1, 0]);
        assert_eq!(ordered.len(), 5);
        assert_eq!(ordered[1], points[3]);
        assert_eq!(ordered[4], points[0]);
    }

    #[test]
    fn test_population_size_hint_kept() {
        let config = SolverConfig::default().with_population_size(3);
        let solver = RouteSolver::new(&scattered(), config).expect("valid");
        assert_eq!(solver.config().population_size, 3);
        assert_eq!(solver.population().len(), 10);
    }

    #[test]
    fn test_solver_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RouteSolver>();
    }
}
