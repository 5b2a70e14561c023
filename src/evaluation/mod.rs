//! Tour evaluation.
//!
//! Provides total tour length (with optional closing edge) and validation of
//! index sequences supplied by callers.

mod length;

pub use length::{tour_length, validate_tour};
