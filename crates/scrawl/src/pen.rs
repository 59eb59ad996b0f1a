//! Pen state, configuration and motion primitives.
//!
//! Heading convention
//! - `direction` is in radians, anticlockwise-positive, with 0 pointing along
//!   +y. A step of length `d` moves by `(d·sin θ, d·cos θ)`.
//! - Turning left subtracts from the heading, turning right adds to it.
//! - The heading is never wrapped; it accumulates across turns.

use crate::geom::Point;
use nalgebra::{point, Vector2};
use std::fmt;

/// Error raised for pen configurations the tracer cannot run with.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    InvalidConfiguration { reason: String },
}

impl ConfigError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration { reason } => {
                write!(f, "invalid pen configuration: {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Tunable constants of a pen; fixed for the lifetime of a trace.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PenCfg {
    /// Forward step length per iteration.
    pub speed: f64,
    /// Desired distance from the guide shape.
    pub pen_distance: f64,
    /// Width of the randomized slack band around `pen_distance`.
    pub distance_fuzz: f64,
    /// Heading increment (radians) per steering correction.
    pub turn_step: f64,
}

impl Default for PenCfg {
    fn default() -> Self {
        Self {
            speed: 0.5,
            pen_distance: 2.0,
            distance_fuzz: 0.5,
            turn_step: 0.05,
        }
    }
}

impl PenCfg {
    pub fn new(
        speed: f64,
        pen_distance: f64,
        distance_fuzz: f64,
        turn_step: f64,
    ) -> Result<Self, ConfigError> {
        let cfg = Self {
            speed,
            pen_distance,
            distance_fuzz,
            turn_step,
        };
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("speed", self.speed),
            ("pen_distance", self.pen_distance),
            ("turn_step", self.turn_step),
        ];
        for (name, v) in positive {
            if !v.is_finite() || v <= 0.0 {
                return Err(ConfigError::invalid(format!(
                    "{name} must be finite and > 0, got {v}"
                )));
            }
        }
        if !self.distance_fuzz.is_finite() || self.distance_fuzz < 0.0 {
            return Err(ConfigError::invalid(format!(
                "distance_fuzz must be finite and >= 0, got {}",
                self.distance_fuzz
            )));
        }
        Ok(())
    }
}

/// Mutable position, heading and contact flag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PenState {
    pub location: Point,
    pub direction: f64,
    /// Contact flag. Tracked across a trace but never read by the steering.
    pub pen_down: bool,
}

impl Default for PenState {
    fn default() -> Self {
        Self {
            location: Point::origin(),
            direction: 0.0,
            pen_down: false,
        }
    }
}

/// A pen: state plus configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pen {
    pub state: PenState,
    pub cfg: PenCfg,
}

impl Pen {
    /// Pen at the origin, heading +y, lifted.
    pub fn new(cfg: PenCfg) -> Result<Self, ConfigError> {
        cfg.validate()?;
        Ok(Self {
            state: PenState::default(),
            cfg,
        })
    }

    #[inline]
    pub fn location(&self) -> Point {
        self.state.location
    }

    #[inline]
    pub fn direction(&self) -> f64 {
        self.state.direction
    }

    #[inline]
    pub fn turn(&mut self, delta: f64) {
        self.state.direction += delta;
    }

    #[inline]
    pub fn turn_left(&mut self, delta: f64) {
        self.turn(-delta);
    }

    #[inline]
    pub fn turn_right(&mut self, delta: f64) {
        self.turn(delta);
    }

    /// Point `distance` ahead along the current heading; the pen does not move.
    #[inline]
    pub fn next_point(&self, distance: f64) -> Point {
        let (s, c) = self.state.direction.sin_cos();
        self.state.location + Vector2::new(distance * s, distance * c)
    }

    #[inline]
    pub fn move_forward(&mut self, distance: f64) {
        self.state.location = self.next_point(distance);
    }

    #[inline]
    pub fn move_backward(&mut self, distance: f64) {
        self.move_forward(-distance);
    }

    /// Place the pen without touching its heading.
    #[inline]
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.state.location = point![x, y];
    }

    #[inline]
    pub fn lower(&mut self) {
        self.state.pen_down = true;
    }

    #[inline]
    pub fn lift(&mut self) {
        self.state.pen_down = false;
    }
}
