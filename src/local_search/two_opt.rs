//! 2-opt segment-reversal refinement.
//!
//! # Algorithm
//!
//! A 2-opt move removes two edges and reconnects the tour by reversing the
//! segment between them. Each pass scans every pair of interior positions
//! `1 ≤ i < j ≤ len - 2`, builds the reversed candidate and recomputes its
//! full length. A strictly shorter candidate replaces the current tour at
//! once and the scan carries on from the next pair with the new tour
//! (first-improvement, no restart). After a pass the relative improvement
//! `1 - after / before` is compared with the threshold; another pass runs
//! only while it is larger.
//!
//! The first and last positions never move. For a closed tour they hold the
//! start location and its return.
//!
//! # Complexity
//!
//! O(n²) candidates per pass, each evaluated in O(n) from scratch, so O(n³)
//! per pass. Intended for tens to low hundreds of locations.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use log::{debug, trace};
use rand::Rng;

use crate::distance::DistanceMatrix;
use crate::evaluation::tour_length;

/// Minimum length decrease for a candidate to count as an improvement.
const IMPROVEMENT_EPS: f64 = 1e-10;

/// Refinement is skipped entirely at or below this number of locations.
const MIN_REFINABLE_POINTS: usize = 4;

/// Returns a copy of `tour` with positions `i..=j` reversed.
///
/// # Panics
///
/// Panics unless `i < j < tour.len()`.
///
/// # Examples
///
/// ```
/// use survey_route::local_search::two_opt_swap;
///
/// assert_eq!(two_opt_swap(&[0, 3, 1, 2, 0], 1, 2), vec![0, 1, 3, 2, 0]);
/// assert_eq!(two_opt_swap(&[0, 1, 2, 3, 4, 0], 1, 4), vec![0, 4, 3, 2, 1, 0]);
/// ```
pub fn two_opt_swap(tour: &[usize], i: usize, j: usize) -> Vec<usize> {
    assert!(
        i < j && j < tour.len(),
        "invalid 2-opt positions ({i}, {j}) for tour of length {}",
        tour.len()
    );
    let mut swapped = tour.to_vec();
    swapped[i..=j].reverse();
    swapped
}

/// Applies [`two_opt_swap`] at a random interior pair `1 ≤ i < j ≤ len - 2`.
///
/// Returns an unchanged copy if the tour has fewer than two interior positions.
pub fn random_two_opt_swap<R: Rng>(tour: &[usize], rng: &mut R) -> Vec<usize> {
    if tour.len() < 4 {
        return tour.to_vec();
    }
    let last = tour.len() - 2;
    let i = rng.random_range(1..last);
    let j = rng.random_range(i + 1..=last);
    two_opt_swap(tour, i, j)
}

/// Result of a 2-opt refinement run.
#[derive(Debug, Clone, PartialEq)]
pub struct RefineOutcome {
    /// The refined tour, same length and closedness as the input.
    pub tour: Vec<usize>,
    /// Length of the refined tour.
    pub length: f64,
    /// Number of full passes performed.
    pub passes: usize,
    /// Number of accepted swaps across all passes.
    pub swaps: usize,
}

impl RefineOutcome {
    /// Returns `true` if no pass was run because the tour has too few
    /// locations for a 2-opt move to change it. This is a no-op result, not
    /// a failure.
    pub fn is_degenerate(&self) -> bool {
        self.passes == 0
    }
}

/// Improves a tour with repeated 2-opt passes.
///
/// Passes continue while the relative length improvement of the last pass
/// exceeds `threshold`; a pass without any accepted swap always stops the
/// search. With a threshold of `0.0` the result is a 2-opt local optimum.
///
/// # Arguments
///
/// * `tour` — Location indices; for a closed tour the start is repeated at the end
/// * `distances` — Distance matrix
/// * `closed` — Whether the closing edge counts towards the length
/// * `threshold` — Relative improvement needed to run another pass
///
/// # Examples
///
/// ```
/// use survey_route::models::Point;
/// use survey_route::distance::DistanceMatrix;
/// use survey_route::local_search::two_opt_refine;
///
/// let dm = DistanceMatrix::from_points(&[
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 1.0),
///     Point::new(1.0, 0.0),
///     Point::new(1.0, 1.0),
/// ]);
/// let outcome = two_opt_refine(&[0, 3, 1, 2, 0], &dm, true, 0.01);
/// assert!((outcome.length - 4.0).abs() < 1e-10);
/// assert_eq!(outcome.tour.first(), Some(&0));
/// assert_eq!(outcome.tour.last(), Some(&0));
/// ```
pub fn two_opt_refine(
    tour: &[usize],
    distances: &DistanceMatrix,
    closed: bool,
    threshold: f64,
) -> RefineOutcome {
    let mut current = tour.to_vec();
    let mut best = tour_length(&current, distances, closed);
    let mut passes = 0;
    let mut swaps = 0;

    let num_points = if closed {
        current.len().saturating_sub(1)
    } else {
        current.len()
    };
    if num_points < MIN_REFINABLE_POINTS {
        debug!("2-opt skipped: {num_points} locations leave no useful move");
        return RefineOutcome {
            tour: current,
            length: best,
            passes,
            swaps,
        };
    }

    let last = current.len() - 2;
    loop {
        let before = best;
        let mut pass_swaps = 0;

        for i in 1..last {
            for j in i + 1..=last {
                let candidate = two_opt_swap(&current, i, j);
                let candidate_len = tour_length(&candidate, distances, closed);
                if candidate_len < best - IMPROVEMENT_EPS {
                    trace!("2-opt swap ({i}, {j}): {best:.4} -> {candidate_len:.4}");
                    current = candidate;
                    best = candidate_len;
                    pass_swaps += 1;
                }
            }
        }

        passes += 1;
        swaps += pass_swaps;
        let improvement = 1.0 - best / before;
        debug!(
            "2-opt pass {passes}: {pass_swaps} swaps, length {before:.4} -> {best:.4} ({:.3}%)",
            improvement * 100.0
        );

        if pass_swaps == 0 || improvement <= threshold {
            break;
        }
    }

    RefineOutcome {
        tour: current,
        length: best,
        passes,
        swaps,
    }
}
