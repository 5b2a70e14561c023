//! Population of candidate tours with fitness-proportional selection.
//!
//! Fitness is the reciprocal of tour length, and selection probability is
//! fitness normalized over the population. Refinement only uses the fittest
//! member; the weighted picker is there for callers that want variety.

use rand::Rng;

use crate::distance::DistanceMatrix;
use crate::error::{Result, RouteError};
use crate::evaluation::tour_length;

/// A fixed set of candidate tours with per-tour length, fitness and
/// selection probability.
///
/// # Examples
///
/// ```
/// use survey_route::models::Point;
/// use survey_route::distance::DistanceMatrix;
/// use survey_route::selection::Population;
///
/// let dm = DistanceMatrix::from_points(&[
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 1.0),
///     Point::new(1.0, 0.0),
///     Point::new(1.0, 1.0),
/// ]);
/// let pop = Population::new(vec![vec![0, 3, 1, 2, 0], vec![0, 1, 3, 2, 0]], &dm, true).unwrap();
/// assert_eq!(pop.best(), &[0, 1, 3, 2, 0]);
/// assert!((pop.probabilities().iter().sum::<f64>() - 1.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct Population {
    tours: Vec<Vec<usize>>,
    lengths: Vec<f64>,
    fitnesses: Vec<f64>,
    probabilities: Vec<f64>,
}

impl Population {
    /// Evaluates the given tours and derives fitness and probability vectors.
    ///
    /// Fails with [`RouteError::InvalidInput`] if the population is empty or a
    /// tour has zero (or non-finite) length, since fitness would be undefined.
    pub fn new(tours: Vec<Vec<usize>>, distances: &DistanceMatrix, closed: bool) -> Result<Self> {
        if tours.is_empty() {
            return Err(RouteError::invalid_input("population has no tours"));
        }

        let lengths: Vec<f64> = tours
            .iter()
            .map(|tour| tour_length(tour, distances, closed))
            .collect();

        if let Some((k, &len)) = lengths
            .iter()
            .enumerate()
            .find(|&(_, &len)| !(len.is_finite() && len > 0.0))
        {
            return Err(RouteError::invalid_input(format!(
                "tour {k} has degenerate length {len}"
            )));
        }

        let fitnesses: Vec<f64> = lengths.iter().map(|&len| 1.0 / len).collect();
        let total: f64 = fitnesses.iter().sum();
        let probabilities = fitnesses.iter().map(|&f| f / total).collect();

        Ok(Self {
            tours,
            lengths,
            fitnesses,
            probabilities,
        })
    }

    /// All tours, in construction order.
    pub fn tours(&self) -> &[Vec<usize>] {
        &self.tours
    }

    /// Tour length per member.
    pub fn lengths(&self) -> &[f64] {
        &self.lengths
    }

    /// Fitness (1 / length) per member.
    pub fn fitnesses(&self) -> &[f64] {
        &self.fitnesses
    }

    /// Selection probability per member; sums to 1.
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.tours.len()
    }

    /// Returns `true` if the population has no members. Never true for a
    /// successfully constructed population.
    pub fn is_empty(&self) -> bool {
        self.tours.is_empty()
    }

    /// Index of the member with maximum fitness (first one on ties).
    pub fn best_index(&self) -> usize {
        let mut best = 0;
        for (k, &f) in self.fitnesses.iter().enumerate().skip(1) {
            if f > self.fitnesses[best] {
                best = k;
            }
        }
        best
    }

    /// The member with maximum fitness, i.e. the shortest tour.
    pub fn best(&self) -> &[usize] {
        &self.tours[self.best_index()]
    }

    /// Picks a member index with probability proportional to its fitness.
    ///
    /// Draws `r` in `[0, 1)` and subtracts probabilities in population order,
    /// returning the first member at which the remainder is no longer positive.
    pub fn pick_index<R: Rng>(&self, rng: &mut R) -> usize {
        let mut remaining: f64 = rng.random();
        for (k, &p) in self.probabilities.iter().enumerate() {
            remaining -= p;
            if remaining <= 0.0 {
                return k;
            }
        }
        // rounding can leave a tiny positive remainder
        self.tours.len() - 1
    }

    /// Picks a tour with probability proportional to its fitness.
    pub fn pick<R: Rng>(&self, rng: &mut R) -> &[usize] {
        &self.tours[self.pick_index(rng)]
    }
}
