//! Per-location nearest-neighbor ordering.

use super::DistanceMatrix;

/// For every location, all other locations sorted by ascending distance.
///
/// Equal distances keep ascending index order, so the ranking is fully
/// deterministic. A location never appears in its own list.
///
/// # Examples
///
/// ```
/// use survey_route::models::Point;
/// use survey_route::distance::{DistanceMatrix, NeighbourRank};
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(10.0, 0.0),
///     Point::new(1.0, 0.0),
/// ];
/// let rank = NeighbourRank::from_matrix(&DistanceMatrix::from_points(&points));
/// assert_eq!(rank.neighbours(0), &[2, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct NeighbourRank {
    ranks: Vec<Vec<usize>>,
}

impl NeighbourRank {
    /// Builds the ranking from a distance matrix.
    pub fn from_matrix(distances: &DistanceMatrix) -> Self {
        let n = distances.size();
        let ranks = (0..n)
            .map(|i| {
                let row = distances.row(i);
                let mut others: Vec<usize> = (0..n).filter(|&j| j != i).collect();
                // sort_by is stable: ties stay in index order
                others.sort_by(|&a, &b| row[a].total_cmp(&row[b]));
                others
            })
            .collect();
        Self { ranks }
    }

    /// Neighbours of `from`, nearest first.
    ///
    /// # Panics
    ///
    /// Panics if `from` is out of bounds.
    pub fn neighbours(&self, from: usize) -> &[usize] {
        &self.ranks[from]
    }

    /// Number of locations ranked.
    pub fn size(&self) -> usize {
        self.ranks.len()
    }
}
