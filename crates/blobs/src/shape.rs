//! Wobbly closed blob outlines.
//!
//! A blob is a circle whose radius is perturbed independently at each
//! sample angle by uniform noise scaled by the wobble amplitude.

use blob_poster_core::RandomSource;
use glam::DVec2;
use std::f64::consts::TAU;

/// Boundary samples per blob used by the compositor.
pub const SAMPLE_COUNT: usize = 200;

/// Generates the boundary of one blob.
///
/// Angles are evenly spaced over the closed interval [0, 2π], so for
/// `point_count >= 2` the first and last samples sit at the same angle. Each
/// sample draws `u ~ U[0,1)` and uses radius `radius * (1 + wobble * (u - 0.5))`.
///
/// Exactly `point_count` draws are consumed, even when `wobble` is zero.
/// Neither `radius` nor `wobble` is validated: a non-positive radius gives a
/// degenerate or inverted outline.
pub fn blob(
    center: DVec2,
    radius: f64,
    point_count: usize,
    wobble: f64,
    rng: &mut impl RandomSource,
) -> Vec<DVec2> {
    let step = if point_count > 1 {
        TAU / (point_count - 1) as f64
    } else {
        0.0
    };
    (0..point_count)
        .map(|i| {
            let theta = step * i as f64;
            let u = rng.next_f64();
            let r = radius * (1.0 + wobble * (u - 0.5));
            center + r * DVec2::from_angle(theta)
        })
        .collect()
}
