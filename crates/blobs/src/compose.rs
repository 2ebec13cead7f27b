//! Layer compositing: turns a palette and parameter ranges into a [`Scene`].

use blob_poster_core::{Bounds, Layer, Palette, RandomSource, Scene, TextAnnotation};
use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::shape::{blob, SAMPLE_COUNT};

pub const TITLE: &str = "Generative Poster";
pub const SUBTITLE: &str = "Week 3 \u{2022} Arts & Advanced Big Data";

/// Per-layer opacity is drawn from this interval.
const OPACITY_MIN: f64 = 0.25;
const OPACITY_MAX: f64 = 0.6;

/// A closed interval sampled uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// A range holding a single value. Sampling it still consumes a draw.
    pub const fn fixed(value: f64) -> Self {
        Self::new(value, value)
    }

    pub fn sample(&self, rng: &mut impl RandomSource) -> f64 {
        rng.next_range(self.min, self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Composes `layer_count` blobs into a scene.
///
/// Draw order per layer is fixed: center x, center y, radius, wobble, the
/// [`SAMPLE_COUNT`] outline samples, color pick, opacity. Later layers sit on
/// top of earlier ones. Centers are not constrained to the canvas; the
/// renderer clips whatever falls outside the bounds.
///
/// After the layers come the title and subtitle annotations and the unit
/// bounds. Ranges are trusted as given.
pub fn compose(
    layer_count: usize,
    palette: &Palette,
    radius: ValueRange,
    wobble: ValueRange,
    rng: &mut impl RandomSource,
) -> Scene {
    let mut scene = Scene::new();
    for _ in 0..layer_count {
        let center = DVec2::new(rng.next_f64(), rng.next_f64());
        let r = radius.sample(rng);
        let w = wobble.sample(rng);
        let points = blob(center, r, SAMPLE_COUNT, w, rng);
        let color = palette.pick(rng);
        let opacity = rng.next_range(OPACITY_MIN, OPACITY_MAX);
        scene.push_layer(Layer::new(center, r, w, points, color, opacity));
    }

    scene.add_annotation(TextAnnotation::new(TITLE, DVec2::new(0.05, 0.95), 18.0).bold());
    scene.add_annotation(TextAnnotation::new(SUBTITLE, DVec2::new(0.05, 0.91), 11.0));
    scene.set_bounds(Bounds::UNIT);
    scene
}
