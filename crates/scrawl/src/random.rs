//! Uniform range draws on an injected generator.
//!
//! The steering controller only ever needs "a uniform value below the fuzz
//! magnitude"; these helpers keep that draw in one place and guard against
//! empty ranges, which `Rng::gen_range` rejects with a panic.

use rand::Rng;

/// Uniform value in `[a, b)`.
///
/// Returns exactly `a` without touching `rng` when the span is zero or
/// negative.
#[inline]
pub fn random_range<R: Rng + ?Sized>(rng: &mut R, a: f64, b: f64) -> f64 {
    if b > a {
        rng.gen_range(a..b)
    } else {
        a
    }
}

/// Uniform value in `[0, magnitude)`.
#[inline]
pub fn draw<R: Rng + ?Sized>(rng: &mut R, magnitude: f64) -> f64 {
    random_range(rng, 0.0, magnitude)
}
