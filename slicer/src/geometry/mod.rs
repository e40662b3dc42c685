//! Tolerance-aware geometric value types. Every coordinate in the pipeline
//! passes through [`round`] before it is compared or stored, so equality is
//! exact comparison of snapped values rather than epsilon checks scattered
//! around the code.

pub mod point;
pub mod polygon;
pub mod segment;

pub use point::Point;
pub use polygon::Polygon;
pub use segment::Segment;

use crate::Pos;

/// Inverse of the coordinate tolerance (1e-6).
const SCALE: f64 = 1e6;

/// Snap a scalar to the global tolerance grid.
pub fn round(value: f64) -> f64 {
    (value * SCALE).round() / SCALE
}

/// Snap every component of a position to the global tolerance grid.
pub fn round_pos(pos: Pos) -> Pos {
    pos.map(round)
}
