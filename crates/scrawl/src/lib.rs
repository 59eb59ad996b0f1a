//! Fuzzy offset contours around guide shapes.
//!
//! A pen walks around a polygon in small steps and steers itself to stay
//! within a randomized band around a target distance from the shape. The
//! resulting closed point sequence (`Sketch`) looks hand-drawn rather than
//! like an exact offset curve.
//!
//! Layout
//! - `geom`: points, polylines, distance queries, highest-leftmost selection.
//! - `pen`: pen state, configuration and motion primitives.
//! - `steer`: stochastic distance-feedback steering.
//! - `trace`: the outer tracing loop (`draw_around`) and its closing policy.
//! - `random`: range draws on an injected generator.
//! - `shapes`: regular and jittered guide shapes.
//!
//! API Policy
//! - Randomness is always injected (`&mut R where R: Rng`); nothing here owns
//!   a global generator, so seeded traces replay exactly.

pub mod geom;
pub mod pen;
pub mod random;
pub mod shapes;
pub mod steer;
pub mod trace;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom::{Point, Polyline, ShapeError};
pub use pen::{ConfigError, Pen, PenCfg, PenState};
pub use trace::{draw_around, draw_around_with, Sketch, TraceCfg, TraceError};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::{
        distance, distance_to_polyline, distance_to_segment, highest_leftmost_point, Point,
        Polyline, ShapeError,
    };
    pub use crate::pen::{ConfigError, Pen, PenCfg, PenState};
    pub use crate::random::{draw, random_range};
    pub use crate::shapes::{jittered_polygon, rectangle, regular_polygon, square, RadialCfg};
    pub use crate::steer::adjust_next_pen;
    pub use crate::trace::{draw_around, draw_around_with, Sketch, TraceCfg, TraceError};
    pub use nalgebra::Vector2 as Vec2;
}
