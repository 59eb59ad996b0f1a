//! Guide shape selection from command-line flags.

use anyhow::{bail, Context, Result};
use scrawl::geom::{Point, Polyline};
use scrawl::shapes::{regular_polygon, square};

/// Which guide shape to trace.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeSpec {
    /// Explicit vertices, closed into a polygon.
    Points(Vec<Point>),
    /// Regular polygon centered at the origin.
    Regular { sides: usize, radius: f64 },
    /// Axis-aligned square with its lower-left corner at the origin.
    Square { side: f64 },
}

impl ShapeSpec {
    /// Explicit points win over `--sides`, which wins over the default square.
    pub fn from_flags(
        points: Option<&str>,
        sides: Option<usize>,
        radius: f64,
        side: f64,
    ) -> Result<Self> {
        if let Some(text) = points {
            return Ok(Self::Points(parse_points(text)?));
        }
        if let Some(sides) = sides {
            return Ok(Self::Regular { sides, radius });
        }
        Ok(Self::Square { side })
    }

    pub fn build(&self) -> Result<Polyline> {
        let poly = match self {
            Self::Points(pts) => Polyline::polygon(pts.clone()),
            Self::Regular { sides, radius } => regular_polygon(*sides, *radius, 0.0),
            Self::Square { side } => square(*side),
        };
        poly.context("building guide shape")
    }
}

/// Parse `"x,y x,y ..."` (whitespace or `;` separated pairs). Whitespace
/// around a comma belongs to its pair, so `"10, 0"` is one point.
pub fn parse_points(text: &str) -> Result<Vec<Point>> {
    let text = text.split(',').map(str::trim).collect::<Vec<_>>().join(",");
    let mut out = Vec::new();
    for pair in text
        .split(|c: char| c.is_whitespace() || c == ';')
        .filter(|s| !s.is_empty())
    {
        let Some((x, y)) = pair.split_once(',') else {
            bail!("expected `x,y`, got `{pair}`");
        };
        let x: f64 = x.trim().parse().with_context(|| format!("bad x in `{pair}`"))?;
        let y: f64 = y.trim().parse().with_context(|| format!("bad y in `{pair}`"))?;
        out.push(Point::new(x, y));
    }
    Ok(out)
}
