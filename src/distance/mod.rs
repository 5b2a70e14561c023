//! Distance matrix and neighbor ranking.
//!
//! Both are computed once from the point set and never change afterwards.

mod matrix;
mod rank;

pub use matrix::DistanceMatrix;
pub use rank::NeighbourRank;
