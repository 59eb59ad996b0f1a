use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::{rngs::StdRng, SeedableRng};
use scrawl::{draw_around_with, Pen, PenCfg, Sketch, TraceCfg};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;

use input::ShapeSpec;
use provenance::Payload;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Trace fuzzy offset contours around guide shapes")]
struct Cmd {
    /// Optional free-form tag; propagated to provenance and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Trace a guide shape and write the sketch as JSON
    Trace(TraceArgs),
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args, Clone, Debug)]
struct TraceArgs {
    /// Polygon vertices as "x,y x,y ..." (overrides --sides)
    #[arg(long)]
    points: Option<String>,
    /// Regular polygon with this many sides (overrides the default square)
    #[arg(long)]
    sides: Option<usize>,
    /// Circumradius for --sides
    #[arg(long, default_value_t = 10.0)]
    radius: f64,
    /// Side length of the default square
    #[arg(long, default_value_t = 10.0)]
    side: f64,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, default_value_t = 0.5)]
    speed: f64,
    #[arg(long, default_value_t = 2.0)]
    pen_distance: f64,
    #[arg(long, default_value_t = 0.5)]
    fuzz: f64,
    /// Heading correction per steering turn, radians
    #[arg(long, default_value_t = 0.05)]
    turn_step: f64,
    /// Maximum number of steps before the trace is cut off
    #[arg(long, default_value_t = scrawl::trace::DEFAULT_GUARD)]
    guard: u32,
    #[arg(long)]
    out: PathBuf,
}

/// JSON layout of a written sketch.
#[derive(Debug, Serialize)]
struct SketchDoc {
    points: Vec<[f64; 2]>,
    closed: bool,
    steps: usize,
    guard_exhausted: bool,
}

impl SketchDoc {
    fn new(sketch: &Sketch, guard_exhausted: bool) -> Self {
        Self {
            points: sketch.points().iter().map(|p| [p.x, p.y]).collect(),
            closed: sketch.is_closed(),
            // seed point and closing point are not steps
            steps: sketch.len().saturating_sub(2),
            guard_exhausted,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Trace(args) => trace(&args, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

fn trace(args: &TraceArgs, tag: Option<String>) -> Result<()> {
    tracing::info!(seed = args.seed, out = %args.out.display(), tag = ?tag, "trace");
    let doc = run_trace(args)?;
    if doc.guard_exhausted {
        tracing::warn!(steps = doc.steps, "guard exhausted before the pen closed the loop");
    }
    tracing::info!(points = doc.points.len(), steps = doc.steps, "sketch");

    write_json(&args.out, &doc)?;
    let params = serde_json::json!({
        "points": args.points,
        "sides": args.sides,
        "radius": args.radius,
        "side": args.side,
        "seed": args.seed,
        "speed": args.speed,
        "pen_distance": args.pen_distance,
        "fuzz": args.fuzz,
        "turn_step": args.turn_step,
        "guard": args.guard,
    });
    provenance::write_sidecar(&args.out, Payload::new(params).with_tag(tag))?;
    Ok(())
}

fn run_trace(args: &TraceArgs) -> Result<SketchDoc> {
    let shape = ShapeSpec::from_flags(
        args.points.as_deref(),
        args.sides,
        args.radius,
        args.side,
    )?;
    let poly = shape.build()?;
    let cfg = PenCfg {
        speed: args.speed,
        pen_distance: args.pen_distance,
        distance_fuzz: args.fuzz,
        turn_step: args.turn_step,
    };
    let mut pen = Pen::new(cfg).context("pen configuration")?;
    let mut rng = StdRng::seed_from_u64(args.seed);
    let trace_cfg = TraceCfg { guard: args.guard };
    let doc = match draw_around_with(&poly, &mut pen, &mut rng, trace_cfg) {
        Ok(sketch) => SketchDoc::new(&sketch, false),
        Err(err) => SketchDoc::new(&err.into_sketch(), true),
    };
    Ok(doc)
}

fn write_json(out: &Path, doc: &SketchDoc) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(doc)?)
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let doc = provenance::document(&Payload::new(serde_json::json!({})).with_tag(tag), &[]);
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
