//! Tour length and tour shape checks.

use crate::distance::DistanceMatrix;
use crate::error::{Result, RouteError};

/// Computes the total length of a tour given as a sequence of location indices.
///
/// Consecutive pairs are summed. When `closed` is set and the sequence does
/// not already end at its first index, the closing edge back to the start is
/// added, so `[0, 1, 2, 0]` and `[0, 1, 2]` have the same closed length.
///
/// # Panics
///
/// Panics if an index is out of bounds for `distances`.
///
/// # Examples
///
/// ```
/// use survey_route::models::Point;
/// use survey_route::distance::DistanceMatrix;
/// use survey_route::evaluation::tour_length;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 1.0),
///     Point::new(1.0, 1.0),
///     Point::new(1.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
/// assert!((tour_length(&[0, 1, 2, 3, 0], &dm, true) - 4.0).abs() < 1e-10);
/// assert!((tour_length(&[0, 1, 2, 3], &dm, true) - 4.0).abs() < 1e-10);
/// assert!((tour_length(&[0, 1, 2, 3], &dm, false) - 3.0).abs() < 1e-10);
/// ```
pub fn tour_length(tour: &[usize], distances: &DistanceMatrix, closed: bool) -> f64 {
    let mut dist: f64 = tour
        .windows(2)
        .map(|pair| distances.get(pair[0], pair[1]))
        .sum();
    if closed {
        if let (Some(&first), Some(&last)) = (tour.first(), tour.last()) {
            if first != last {
                dist += distances.get(last, first);
            }
        }
    }
    dist
}

/// Checks that `tour` visits each of the `n` locations exactly once.
///
/// A closed tour must repeat its first index at the end (length `n + 1`);
/// an open tour has length `n`.
pub fn validate_tour(tour: &[usize], n: usize, closed: bool) -> Result<()> {
    let expected = if closed { n + 1 } else { n };
    if tour.len() != expected {
        return Err(RouteError::invalid_tour(format!(
            "expected {expected} entries for {n} locations, got {}",
            tour.len()
        )));
    }

    let body = if closed {
        if tour.first() != tour.last() {
            return Err(RouteError::invalid_tour(
                "closed tour must end at its first index",
            ));
        }
        &tour[..n]
    } else {
        tour
    };

    let mut seen = vec![false; n];
    for &idx in body {
        if idx >= n {
            return Err(RouteError::invalid_tour(format!(
                "index {idx} out of range for {n} locations"
            )));
        }
        if seen[idx] {
            return Err(RouteError::invalid_tour(format!("index {idx} visited twice")));
        }
        seen[idx] = true;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Point;

    fn square() -> DistanceMatrix {
        DistanceMatrix::from_points(&[
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
        ])
    }

    #[test]
    fn test_closed_length() {
        let dm = square();
        assert!((tour_length(&[0, 1, 3, 2, 0], &dm, true) - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_crossing_length() {
        let dm = square();
        let expected = 2.0 + 2.0 * 2f64.sqrt();
        assert!((tour_length(&[0, 3, 1, 2, 0], &dm, true) - expected).abs() < 1e-10);
    }

    #[test]
    fn test_open_length_skips_closing_edge() {
        let dm = square();
        assert!((tour_length(&[0, 1, 3, 2], &dm, false) - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_rotation_and_reversal_invariant() {
        let dm = square();
        let base = tour_length(&[0, 1, 3, 2, 0], &dm, true);
        assert!((tour_length(&[3, 2, 0, 1, 3], &dm, true) - base).abs() < 1e-10);
        assert!((tour_length(&[0, 2, 3, 1, 0], &dm, true) - base).abs() < 1e-10);
        assert!((tour_length(&[1, 3, 2, 0], &dm, true) - base).abs() < 1e-10);
    }

    #[test]
    fn test_empty_and_single() {
        let dm = square();
        assert_eq!(tour_length(&[], &dm, true), 0.0);
        assert_eq!(tour_length(&[2], &dm, true), 0.0);
    }

    #[test]
    fn test_validate_ok() {
        assert!(validate_tour(&[0, 2, 1, 3, 0], 4, true).is_ok());
        assert!(validate_tour(&[3, 2, 1, 0], 4, false).is_ok());
    }

    #[test]
    fn test_validate_rejects() {
        assert!(validate_tour(&[0, 2, 1, 3], 4, true).is_err());
        assert!(validate_tour(&[0, 2, 1, 3, 1], 4, true).is_err());
        assert!(validate_tour(&[0, 2, 2, 3], 4, false).is_err());
        assert!(validate_tour(&[0, 2, 1, 4], 4, false).is_err());
    }
}
