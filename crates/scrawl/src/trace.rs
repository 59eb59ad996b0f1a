//! Contour tracing: the outer loop around the steering controller.
//!
//! Algorithm (`draw_around_with`)
//! 1. Place the pen `pen_distance` above the highest-leftmost vertex.
//! 2. Seed the sketch with that point.
//! 3. Steer and step until the last point is within one `speed` of the seed
//!    (and at least two steps were taken), or the guard runs out.
//! 4. Close the sketch by appending the seed point again.
//!
//! The guard (10000 steps by default) bounds traces whose pen never comes
//! back to its start. Running out of guard is reported as
//! `TraceError::GuardExceeded`, which still hands back the closed sketch.

use crate::geom::{distance, highest_leftmost_point, Point, Polyline};
use crate::pen::Pen;
use crate::steer::adjust_next_pen;
use rand::Rng;
use std::fmt;

/// Default iteration cap for one trace.
pub const DEFAULT_GUARD: u32 = 10_000;

/// Tracer settings independent of the pen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceCfg {
    /// Maximum number of draw steps before the trace is cut off.
    pub guard: u32,
}

impl Default for TraceCfg {
    fn default() -> Self {
        Self {
            guard: DEFAULT_GUARD,
        }
    }
}

/// Ordered points of a traced contour.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sketch {
    points: Vec<Point>,
}

impl Sketch {
    pub fn new(first: Point) -> Self {
        Self {
            points: vec![first],
        }
    }

    #[inline]
    pub fn push(&mut self, p: Point) {
        self.points.push(p);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn first(&self) -> Option<&Point> {
        self.points.first()
    }

    #[inline]
    pub fn last(&self) -> Option<&Point> {
        self.points.last()
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// At least two points and first == last.
    pub fn is_closed(&self) -> bool {
        self.points.len() >= 2 && self.points.first() == self.points.last()
    }

    /// Sum of segment lengths.
    pub fn length(&self) -> f64 {
        self.points.windows(2).map(|w| distance(&w[0], &w[1])).sum()
    }
}

/// Error returned by the tracer.
#[derive(Clone, Debug, PartialEq)]
pub enum TraceError {
    /// The guard ran out before the pen came back to its start. `sketch` holds
    /// the points drawn so far, closed with the seed point.
    GuardExceeded { steps: u32, sketch: Sketch },
}

impl TraceError {
    /// Recover the partial sketch.
    pub fn into_sketch(self) -> Sketch {
        match self {
            Self::GuardExceeded { sketch, .. } => sketch,
        }
    }
}

impl fmt::Display for TraceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GuardExceeded { steps, sketch } => write!(
                f,
                "trace guard exceeded after {steps} steps ({} points drawn)",
                sketch.len()
            ),
        }
    }
}

impl std::error::Error for TraceError {}

/// Place the pen `pen_distance` above the highest-leftmost vertex and lower it.
/// The heading is left as it was.
pub fn start_drawing(poly: &Polyline, pen: &mut Pen) {
    // Polyline guarantees at least three vertices.
    let anchor = highest_leftmost_point(poly.points()).unwrap_or_else(Point::origin);
    pen.move_to(anchor.x, anchor.y + pen.cfg.pen_distance);
    pen.lower();
}

/// More than two points drawn and the last one within `speed` of `first`.
pub fn path_ready_to_close(sketch: &Sketch, pen: &Pen, first: &Point) -> bool {
    match sketch.last() {
        Some(last) if sketch.len() > 2 => distance(last, first) < pen.cfg.speed,
        _ => false,
    }
}

/// Steer, then advance by `speed`. Returns the new location.
pub fn draw_step<R: Rng + ?Sized>(poly: &Polyline, pen: &mut Pen, rng: &mut R) -> Point {
    adjust_next_pen(poly, pen, rng);
    let speed = pen.cfg.speed;
    pen.move_forward(speed);
    pen.location()
}

/// Trace around `poly` with the default guard.
pub fn draw_around<R: Rng + ?Sized>(
    poly: &Polyline,
    pen: &mut Pen,
    rng: &mut R,
) -> Result<Sketch, TraceError> {
    draw_around_with(poly, pen, rng, TraceCfg::default())
}

/// Trace around `poly`, stopping at closure or after `cfg.guard` steps.
pub fn draw_around_with<R: Rng + ?Sized>(
    poly: &Polyline,
    pen: &mut Pen,
    rng: &mut R,
    cfg: TraceCfg,
) -> Result<Sketch, TraceError> {
    start_drawing(poly, pen);
    let first = pen.location();
    let mut sketch = Sketch::new(first);
    let mut guard = cfg.guard;
    while !path_ready_to_close(&sketch, pen, &first) && guard > 0 {
        sketch.push(draw_step(poly, pen, rng));
        guard -= 1;
    }
    let steps = cfg.guard - guard;
    let closed_naturally = path_ready_to_close(&sketch, pen, &first);
    sketch.push(first);
    pen.lift();

    if closed_naturally {
        tracing::debug!(steps, points = sketch.len(), "trace closed");
        Ok(sketch)
    } else {
        tracing::warn!(steps, points = sketch.len(), "trace guard exceeded");
        Err(TraceError::GuardExceeded { steps, sketch })
    }
}

#[cfg(test)]
mod tests;
