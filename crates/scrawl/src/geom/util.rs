use std::cmp::Ordering;

use super::types::{Point, Polyline};

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: &Point, b: &Point) -> f64 {
    nalgebra::distance(a, b)
}

/// Distance from `p` to the closed segment `[a, b]`.
pub fn distance_to_segment(p: &Point, a: &Point, b: &Point) -> f64 {
    let ab = b - a;
    let len2 = ab.norm_squared();
    if len2 <= 0.0 {
        return distance(p, a);
    }
    let t = ((p - a).dot(&ab) / len2).clamp(0.0, 1.0);
    distance(p, &(a + ab * t))
}

/// Minimum distance from `p` to any edge of `poly`.
pub fn distance_to_polyline(p: &Point, poly: &Polyline) -> f64 {
    poly.edges()
        .map(|(a, b)| distance_to_segment(p, &a, &b))
        .fold(f64::INFINITY, f64::min)
}

/// Topmost point (max y), ties broken by the leftmost (min x).
///
/// The result does not depend on the order of `points`; `None` if empty.
pub fn highest_leftmost_point(points: &[Point]) -> Option<Point> {
    points.iter().copied().max_by(|a, b| {
        match a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal) {
            Ordering::Equal => b.x.partial_cmp(&a.x).unwrap_or(Ordering::Equal),
            o => o,
        }
    })
}
