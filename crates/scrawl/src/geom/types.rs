//! Guide shape representation.
//!
//! - `Point`: alias for `nalgebra::Point2<f64>`.
//! - `Polyline`: at least three finite vertices, open or closed.
//! - `ShapeError`: rejection reasons for degenerate guide shapes.

use nalgebra::Point2;
use std::fmt;

/// Planar coordinate (value type, equality by coordinates).
pub type Point = Point2<f64>;

/// Error raised for guide shapes the tracer cannot work with.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeError {
    DegenerateGuideShape { reason: String },
}

impl ShapeError {
    pub(crate) fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateGuideShape {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateGuideShape { reason } => write!(f, "degenerate guide shape: {reason}"),
        }
    }
}

impl std::error::Error for ShapeError {}

/// Ordered vertex list describing a guide shape boundary.
///
/// Edges join consecutive vertices; a closed polyline (polygon) also joins the
/// last vertex back to the first.
#[derive(Clone, Debug, PartialEq)]
pub struct Polyline {
    points: Vec<Point>,
    closed: bool,
}

impl Polyline {
    /// Open polyline through `points`.
    pub fn open(points: Vec<Point>) -> Result<Self, ShapeError> {
        Self::build(points, false)
    }

    /// Closed polygon through `points` (closing edge implied).
    pub fn polygon(points: Vec<Point>) -> Result<Self, ShapeError> {
        Self::build(points, true)
    }

    fn build(points: Vec<Point>, closed: bool) -> Result<Self, ShapeError> {
        if points.len() < 3 {
            return Err(ShapeError::degenerate(format!(
                "need at least 3 points, got {}",
                points.len()
            )));
        }
        if let Some(p) = points
            .iter()
            .find(|p| !(p.x.is_finite() && p.y.is_finite()))
        {
            return Err(ShapeError::degenerate(format!(
                "non-finite vertex ({}, {})",
                p.x, p.y
            )));
        }
        Ok(Self { points, closed })
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Edges as `(start, end)` pairs, including the closing edge for polygons.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.points.len();
        let count = if self.closed { n } else { n - 1 };
        (0..count).map(move |k| (self.points[k], self.points[(k + 1) % n]))
    }

    /// Total edge length.
    pub fn perimeter(&self) -> f64 {
        self.edges().map(|(a, b)| nalgebra::distance(&a, &b)).sum()
    }
}
