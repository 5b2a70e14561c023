//! Constructive heuristics for building initial tours.
//!
//! - [`nearest_neighbor_tour`] — Greedy nearest-neighbor tour from one start, O(n²)
//! - [`nearest_neighbor_population`] — One greedy tour per possible start, O(n³)

mod nearest_neighbor;

pub use nearest_neighbor::{nearest_neighbor_population, nearest_neighbor_tour};
