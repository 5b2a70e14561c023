//! Candidate population bookkeeping and fitness-proportional selection.
//!
//! - [`Population`] — Tours with length, fitness (1/length) and probability vectors

mod population;

pub use population::Population;
