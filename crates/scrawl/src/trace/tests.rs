use super::*;
use crate::geom::distance_to_polyline;
use crate::pen::PenCfg;
use crate::shapes::{regular_polygon, square};
use nalgebra::point;
use rand::{rngs::StdRng, SeedableRng};

fn pen(cfg: PenCfg) -> Pen {
    Pen::new(cfg).unwrap()
}

#[test]
fn start_drawing_sits_above_highest_leftmost_vertex() {
    let sq = square(10.0).unwrap();
    let mut p = pen(PenCfg::default());
    p.state.direction = 1.25;
    start_drawing(&sq, &mut p);
    assert_eq!(p.location(), point![0.0, 12.0]);
    assert_eq!(p.direction(), 1.25);
    assert!(p.state.pen_down);
}

#[test]
fn closing_needs_three_points_and_proximity() {
    let p = pen(PenCfg::default());
    let first = point![0.0, 0.0];
    let mut sketch = Sketch::new(first);
    sketch.push(point![0.1, 0.0]);
    // two points, last is close: still not ready
    assert!(!path_ready_to_close(&sketch, &p, &first));
    sketch.push(point![0.4, 0.0]);
    assert!(path_ready_to_close(&sketch, &p, &first));
    sketch.push(point![0.5, 0.0]);
    // distance == speed is not strictly less
    assert!(!path_ready_to_close(&sketch, &p, &first));
}

#[test]
fn draw_step_advances_by_speed() {
    let sq = square(10.0).unwrap();
    let mut p = pen(PenCfg::default());
    start_drawing(&sq, &mut p);
    let before = p.location();
    let mut rng = StdRng::seed_from_u64(3);
    let after = draw_step(&sq, &mut p, &mut rng);
    assert_eq!(after, p.location());
    assert!((distance(&before, &after) - p.cfg.speed).abs() < 1e-12);
}

#[test]
fn square_trace_is_closed() {
    let sq = square(10.0).unwrap();
    for seed in 0..5 {
        let mut p = pen(PenCfg::default());
        let mut rng = StdRng::seed_from_u64(seed);
        let sketch = draw_around(&sq, &mut p, &mut rng).expect("square trace closes");
        assert!(sketch.len() >= 4);
        assert_eq!(sketch.first(), sketch.last());
        assert!(sketch.is_closed());
        assert_eq!(sketch.first(), Some(&point![0.0, 12.0]));
        assert!(!p.state.pen_down);
    }
}

#[test]
fn drawn_points_stay_in_band() {
    let sq = square(10.0).unwrap();
    let cfg = PenCfg::default();
    let mut p = pen(cfg);
    let mut rng = StdRng::seed_from_u64(2024);
    let sketch = draw_around(&sq, &mut p, &mut rng).unwrap_or_else(TraceError::into_sketch);
    let pts = sketch.points();
    // skip the seed and the closing copy of it
    let drawn = &pts[1..pts.len() - 1];
    assert!(!drawn.is_empty());
    for q in drawn {
        let d = distance_to_polyline(q, &sq);
        assert!(
            (d - cfg.pen_distance).abs() <= cfg.distance_fuzz + 1e-9,
            "point ({}, {}) at distance {d}",
            q.x,
            q.y
        );
    }
}

#[test]
fn trace_goes_all_the_way_around() {
    let hex = regular_polygon(6, 8.0, 0.0).unwrap();
    let cfg = PenCfg::default();
    let mut p = pen(cfg);
    let mut rng = StdRng::seed_from_u64(17);
    let sketch = draw_around(&hex, &mut p, &mut rng).expect("hexagon trace closes");
    // offset curve of a convex polygon: perimeter + 2π·d
    let offset_perimeter = hex.perimeter() + std::f64::consts::TAU * cfg.pen_distance;
    assert!(sketch.length() > 0.8 * offset_perimeter);
    // every vertex direction was visited
    let pts = sketch.points();
    assert!(pts.iter().any(|q| q.y < -8.0));
    assert!(pts.iter().any(|q| q.x > 8.0));
    assert!(pts.iter().any(|q| q.x < -8.0));
}

#[test]
fn seeded_traces_replay() {
    let sq = square(10.0).unwrap();
    let run = |seed| {
        let mut p = pen(PenCfg::default());
        let mut rng = StdRng::seed_from_u64(seed);
        draw_around(&sq, &mut p, &mut rng)
    };
    assert_eq!(run(99), run(99));
}

#[test]
fn guard_bounds_steps_exactly() {
    // At this speed one lap needs far more than 10000 steps.
    let sq = square(10.0).unwrap();
    let cfg = PenCfg::new(0.001, 1.0, 0.1, 0.05).unwrap();
    let mut p = pen(cfg);
    let mut rng = StdRng::seed_from_u64(8);
    let err = draw_around(&sq, &mut p, &mut rng).unwrap_err();
    let TraceError::GuardExceeded { steps, sketch } = err.clone();
    assert_eq!(steps, DEFAULT_GUARD);
    assert_eq!(sketch.len(), DEFAULT_GUARD as usize + 2);
    assert!(sketch.is_closed());
    assert!(err.to_string().contains("10000 steps"));
    assert_eq!(err.into_sketch(), sketch);
    assert!(!p.state.pen_down);
}

#[test]
fn custom_guard_is_honoured() {
    let sq = square(10.0).unwrap();
    let mut rng = StdRng::seed_from_u64(4);

    let mut p = pen(PenCfg::default());
    let err = draw_around_with(&sq, &mut p, &mut rng, TraceCfg { guard: 0 }).unwrap_err();
    let sketch = err.into_sketch();
    assert_eq!(sketch.points(), &[point![0.0, 12.0], point![0.0, 12.0]]);

    let mut p = pen(PenCfg::default());
    let err = draw_around_with(&sq, &mut p, &mut rng, TraceCfg { guard: 5 }).unwrap_err();
    assert!(matches!(err, TraceError::GuardExceeded { steps: 5, .. }));
    assert_eq!(err.into_sketch().len(), 7);
}
