//! Local search operators for improving tours.
//!
//! - [`two_opt_refine`] — Repeated first-improvement 2-opt passes
//! - [`two_opt_swap`] — The segment-reversal move itself

mod two_opt;

pub use two_opt::{random_two_opt_swap, two_opt_refine, two_opt_swap, RefineOutcome};
