//! Application domain model.
//!
//! Pure data (no FFI dependencies): ring geometry and the constants the
//! rest of the crate is configured from.

pub mod constants;
pub mod geometry;

pub use constants::*;
pub use geometry::{ring_center, ring_origin, stroke_square, Point};
