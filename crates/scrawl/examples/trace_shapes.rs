//! Trace a few guide shapes and print sketch statistics.
//!
//! Usage:
//!   cargo run -p scrawl --example trace_shapes -- [seed]
//!
//! Prints, per shape: step count, sketch length, and the min/max distance of
//! the drawn points to the guide shape.

use rand::{rngs::StdRng, SeedableRng};
use scrawl::geom::distance_to_polyline;
use scrawl::shapes::{jittered_polygon, regular_polygon, square, RadialCfg};
use scrawl::{draw_around, Pen, PenCfg, Polyline};

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(2025);
    let shapes: Vec<(&str, Polyline)> = vec![
        ("square", square(10.0).unwrap()),
        ("triangle", regular_polygon(3, 8.0, 0.3).unwrap()),
        ("octagon", regular_polygon(8, 8.0, 0.0).unwrap()),
        ("jittered", jittered_polygon(RadialCfg::default(), seed).unwrap()),
    ];
    for (name, poly) in &shapes {
        let mut pen = Pen::new(PenCfg::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let (sketch, closed) = match draw_around(poly, &mut pen, &mut rng) {
            Ok(s) => (s, true),
            Err(e) => (e.into_sketch(), false),
        };
        let pts = sketch.points();
        let (lo, hi) = pts[1..pts.len() - 1]
            .iter()
            .map(|p| distance_to_polyline(p, poly))
            .fold((f64::INFINITY, 0.0f64), |(lo, hi), d| (lo.min(d), hi.max(d)));
        println!(
            "{name}: points={} closed={closed} length={:.2} dist=[{lo:.3}, {hi:.3}]",
            sketch.len(),
            sketch.length()
        );
    }
}
