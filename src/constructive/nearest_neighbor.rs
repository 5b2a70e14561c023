//! Nearest-neighbor constructive heuristic.
//!
//! Builds a tour greedily: starting from a given location, always move to the
//! nearest location not yet visited, scanning the current location's
//! precomputed neighbor ranking.
//!
//! # Normalization
//!
//! The finished sequence is rotated so that location 0 comes first. Rotations
//! of the same cyclic tour therefore compare equal, but the configured start
//! is generally not the first element afterwards. For open tours the rotation
//! also moves the gap between the last and first location, which changes the
//! path being described.
//!
//! # Complexity
//!
//! O(n²) per tour using the neighbor ranking, O(n³) for the full population.

use crate::distance::NeighbourRank;

/// Constructs one tour starting at `start` using the nearest-neighbor heuristic.
///
/// Returns a permutation of `0..n` rotated to begin at 0, followed by a
/// trailing 0 when `closed` is set.
///
/// # Panics
///
/// Panics if `start` is out of bounds for `rank`.
///
/// # Examples
///
/// ```
/// use survey_route::models::Point;
/// use survey_route::distance::{DistanceMatrix, NeighbourRank};
/// use survey_route::constructive::nearest_neighbor_tour;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(3.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(2.0, 0.0),
/// ];
/// let rank = NeighbourRank::from_matrix(&DistanceMatrix::from_points(&points));
///
/// assert_eq!(nearest_neighbor_tour(0, &rank, true), vec![0, 2, 3, 1, 0]);
/// // Started at 1 the greedy order is 1, 3, 2, 0; rotated to begin at 0.
/// assert_eq!(nearest_neighbor_tour(1, &rank, false), vec![0, 1, 3, 2]);
/// ```
pub fn nearest_neighbor_tour(start: usize, rank: &NeighbourRank, closed: bool) -> Vec<usize> {
    let n = rank.size();
    let mut visited = vec![false; n];
    let mut tour = Vec::with_capacity(if closed { n + 1 } else { n });

    visited[start] = true;
    tour.push(start);
    let mut current = start;

    while tour.len() < n {
        let next = rank
            .neighbours(current)
            .iter()
            .copied()
            .find(|&candidate| !visited[candidate]);
        match next {
            Some(next) => {
                visited[next] = true;
                tour.push(next);
                current = next;
            }
            None => break,
        }
    }

    if let Some(zero_pos) = tour.iter().position(|&idx| idx == 0) {
        tour.rotate_left(zero_pos);
    }
    if closed {
        if let Some(&first) = tour.first() {
            tour.push(first);
        }
    }
    tour
}

/// Constructs one nearest-neighbor tour per starting location, in start order.
pub fn nearest_neighbor_population(rank: &NeighbourRank, closed: bool) -> Vec<Vec<usize>> {
    (0..rank.size())
        .map(|start| nearest_neighbor_tour(start, rank, closed))
        .collect()
}
