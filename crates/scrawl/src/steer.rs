//! Stochastic distance-feedback steering.
//!
//! Before each step the pen probes the point one `speed` ahead and compares
//! its distance to the guide shape against `pen_distance`. The comparison
//! threshold is a fresh uniform draw from `[0, distance_fuzz)`, so a large
//! deviation is corrected almost surely while a small one is corrected only
//! sometimes. The resulting wobble around the exact offset is the intended
//! look of the drawing.
//!
//! With the shape kept on the pen's left (anticlockwise travel), turning left
//! pulls the probe towards the shape and turning right pushes it away.
//! `next_pen_too_close` fires on `draw < next_pen_distance - pen_distance`,
//! i.e. when the probe sits too far out, and the far-enough pass answers it by
//! turning left, inward. `next_pen_too_far` mirrors it. The comparisons are
//! what steer the pen; read the names through them.

use crate::geom::{distance_to_polyline, Polyline};
use crate::pen::Pen;
use crate::random::draw;
use rand::Rng;

/// Distance from the look-ahead point (one `speed` forward) to the shape.
#[inline]
pub fn next_pen_distance(poly: &Polyline, pen: &Pen) -> f64 {
    distance_to_polyline(&pen.next_point(pen.cfg.speed), poly)
}

/// True when a fresh fuzz draw is below `next_pen_distance - pen_distance`.
pub fn next_pen_too_close<R: Rng + ?Sized>(poly: &Polyline, pen: &Pen, rng: &mut R) -> bool {
    let excess = next_pen_distance(poly, pen) - pen.cfg.pen_distance;
    draw(rng, pen.cfg.distance_fuzz) < excess
}

/// True when a fresh fuzz draw is below `pen_distance - next_pen_distance`.
pub fn next_pen_too_far<R: Rng + ?Sized>(poly: &Polyline, pen: &Pen, rng: &mut R) -> bool {
    let deficit = pen.cfg.pen_distance - next_pen_distance(poly, pen);
    draw(rng, pen.cfg.distance_fuzz) < deficit
}

/// Turn left by `turn_step` while `next_pen_too_close` fires. Returns the
/// number of turns taken.
pub fn ensure_next_pen_far_enough<R: Rng + ?Sized>(
    poly: &Polyline,
    pen: &mut Pen,
    rng: &mut R,
) -> usize {
    let mut turns = 0;
    while next_pen_too_close(poly, pen, rng) {
        pen.turn_left(pen.cfg.turn_step);
        turns += 1;
    }
    turns
}

/// Turn right by `turn_step` while `next_pen_too_far` fires. Returns the
/// number of turns taken.
pub fn ensure_next_pen_close_enough<R: Rng + ?Sized>(
    poly: &Polyline,
    pen: &mut Pen,
    rng: &mut R,
) -> usize {
    let mut turns = 0;
    while next_pen_too_far(poly, pen, rng) {
        pen.turn_right(pen.cfg.turn_step);
        turns += 1;
    }
    turns
}

/// One steering pass: far-enough correction, then close-enough correction.
/// Returns the total number of turns applied.
pub fn adjust_next_pen<R: Rng + ?Sized>(poly: &Polyline, pen: &mut Pen, rng: &mut R) -> usize {
    let left = ensure_next_pen_far_enough(poly, pen, rng);
    let right = ensure_next_pen_close_enough(poly, pen, rng);
    left + right
}
