//! Planar geometry consumed by the tracer.
//!
//! Purpose
//! - Provide the three queries the pen needs from its guide shape: point to
//!   point distance, point to polyline distance, and the highest-leftmost
//!   vertex used as the starting anchor.
//! - Keep the representation plain: `Point2<f64>` and a validated vertex list.
//!
//! Code cross-refs: `Polyline`, `distance_to_polyline`, `highest_leftmost_point`

mod types;
mod util;

pub use types::{Point, Polyline, ShapeError};
pub use util::{distance, distance_to_polyline, distance_to_segment, highest_leftmost_point};
