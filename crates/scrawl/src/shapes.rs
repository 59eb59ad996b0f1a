//! Guide shape constructors: axis-aligned boxes, regular polygons and
//! reproducible radially jittered polygons.
//!
//! Model (jittered)
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular and
//!   radial jitter, and connect the vertices in angle order. The result is
//!   star-shaped around its center but not necessarily convex, which is the
//!   interesting case for a pen that keeps the shape on its left.
//! - Determinism: a single `StdRng` seeded from `seed` drives every draw.

use crate::geom::{Point, Polyline, ShapeError};
use nalgebra::point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;

/// Axis-aligned square with its lower-left corner at the origin.
///
/// Vertices run (0,0), (0,s), (s,s), (s,0).
pub fn square(side: f64) -> Result<Polyline, ShapeError> {
    rectangle(side, side)
}

/// Axis-aligned rectangle with its lower-left corner at the origin.
pub fn rectangle(width: f64, height: f64) -> Result<Polyline, ShapeError> {
    if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
        return Err(ShapeError::degenerate(format!(
            "rectangle sides must be finite and > 0, got {width} x {height}"
        )));
    }
    Polyline::polygon(vec![
        point![0.0, 0.0],
        point![0.0, height],
        point![width, height],
        point![width, 0.0],
    ])
}

/// Regular `n`-gon of circumradius `radius` centered at the origin; the first
/// vertex sits at angle `phase` (radians, measured from +x).
pub fn regular_polygon(n: usize, radius: f64, phase: f64) -> Result<Polyline, ShapeError> {
    if n < 3 {
        return Err(ShapeError::degenerate(format!(
            "regular polygon needs n >= 3, got {n}"
        )));
    }
    if !(radius > 0.0 && radius.is_finite()) {
        return Err(ShapeError::degenerate(format!(
            "radius must be finite and > 0, got {radius}"
        )));
    }
    let delta = TAU / n as f64;
    let pts = (0..n)
        .map(|k| {
            let th = phase + k as f64 * delta;
            point![radius * th.cos(), radius * th.sin()]
        })
        .collect();
    Polyline::polygon(pts)
}

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    /// Vertex count drawn uniformly from `min_vertices..=max_vertices`
    /// (both raised to at least 3; equal bounds give a fixed count).
    pub min_vertices: usize,
    pub max_vertices: usize,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radii = `base_radius * (1 + u)`, with `u∈[-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    pub base_radius: f64,
    pub center: Point,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
}

impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            min_vertices: 9,
            max_vertices: 9,
            angle_jitter_frac: 0.3,
            radial_jitter: 0.2,
            base_radius: 10.0,
            center: Point::origin(),
            random_phase: true,
        }
    }
}

/// Draw a reproducible jittered polygon around `cfg.center`.
pub fn jittered_polygon(cfg: RadialCfg, seed: u64) -> Result<Polyline, ShapeError> {
    if !(cfg.base_radius > 0.0 && cfg.base_radius.is_finite()) {
        return Err(ShapeError::degenerate(format!(
            "base_radius must be finite and > 0, got {}",
            cfg.base_radius
        )));
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let lo = cfg.min_vertices.max(3);
    let n = rng.gen_range(lo..=cfg.max_vertices.max(lo));
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.9);
    let delta = TAU / n as f64;
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * TAU
    } else {
        0.0
    };
    // Jitter below Δ/2 keeps the angles sorted, so vertices stay in angle order.
    let pts = (0..n)
        .map(|k| {
            let th = phase + k as f64 * delta + (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let r = cfg.base_radius * (1.0 + (rng.gen::<f64>() * 2.0 - 1.0) * rj);
            point![cfg.center.x + r * th.cos(), cfg.center.y + r * th.sin()]
        })
        .collect();
    Polyline::polygon(pts)
}
