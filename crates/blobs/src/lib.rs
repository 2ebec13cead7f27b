#![deny(unsafe_code)]
//! Generative blob posters.
//!
//! A poster is a stack of translucent, wobbly circles on a unit-square
//! canvas. [`shape::blob`] builds one outline, [`compose::compose`] stacks
//! the layers, and [`generate`] ties both to a palette and a set of
//! [`PosterParams`].
//!
//! Every random value comes from a caller-owned [`RandomSource`], so the same
//! seed and parameters always reproduce the same scene, and separate
//! generations can run side by side with their own streams.

pub mod compose;
pub mod shape;

pub use compose::{compose, ValueRange};
pub use shape::blob;

use blob_poster_core::error::PosterError;
use blob_poster_core::params::{param_f64, param_string, param_usize};
use blob_poster_core::{Palette, RandomSource, Scene};
use serde_json::{json, Value};

const DEFAULT_LAYER_COUNT: usize = 8;
const DEFAULT_PALETTE_SIZE: usize = 6;
const DEFAULT_RADIUS: ValueRange = ValueRange::new(0.15, 0.45);
const DEFAULT_WOBBLE: ValueRange = ValueRange::new(0.05, 0.25);

/// Palette name meaning "draw `palette_size` uniform colors from the stream".
pub const RANDOM_PALETTE: &str = "random";

const LAYER_COUNT_BOUNDS: (usize, usize) = (1, 200);
const PALETTE_SIZE_BOUNDS: (usize, usize) = (1, 150);
const RADIUS_BOUNDS: (f64, f64) = (0.0, 1.0);
const WOBBLE_BOUNDS: (f64, f64) = (0.0, 200.0);

/// Tunable inputs for one poster.
///
/// [`Default`] reproduces the reference poster: 8 layers, a 6-color random
/// palette, radii in [0.15, 0.45] and wobble in [0.05, 0.25].
#[derive(Debug, Clone, PartialEq)]
pub struct PosterParams {
    pub layer_count: usize,
    /// Number of colors in a random palette. Ignored for named palettes.
    pub palette_size: usize,
    /// [`RANDOM_PALETTE`] or one of [`Palette::list_names`].
    pub palette: String,
    pub radius: ValueRange,
    pub wobble: ValueRange,
}

impl Default for PosterParams {
    fn default() -> Self {
        Self {
            layer_count: DEFAULT_LAYER_COUNT,
            palette_size: DEFAULT_PALETTE_SIZE,
            palette: RANDOM_PALETTE.to_string(),
            radius: DEFAULT_RADIUS,
            wobble: DEFAULT_WOBBLE,
        }
    }
}

impl PosterParams {
    /// Extracts parameters from a JSON object, falling back to defaults for
    /// missing or mistyped keys.
    pub fn from_json(params: &Value) -> Self {
        Self::default().merged_with(params)
    }

    /// Returns a copy with every key present in `overrides` applied.
    pub fn merged_with(&self, overrides: &Value) -> Self {
        Self {
            layer_count: param_usize(overrides, "layer_count", self.layer_count),
            palette_size: param_usize(overrides, "palette_size", self.palette_size),
            palette: param_string(overrides, "palette", &self.palette),
            radius: ValueRange::new(
                param_f64(overrides, "radius_min", self.radius.min),
                param_f64(overrides, "radius_max", self.radius.max),
            ),
            wobble: ValueRange::new(
                param_f64(overrides, "wobble_min", self.wobble.min),
                param_f64(overrides, "wobble_max", self.wobble.max),
            ),
        }
    }

    /// Current values as a flat JSON object, the inverse of [`from_json`](Self::from_json).
    pub fn to_json(&self) -> Value {
        json!({
            "layer_count": self.layer_count,
            "palette_size": self.palette_size,
            "palette": self.palette,
            "radius_min": self.radius.min,
            "radius_max": self.radius.max,
            "wobble_min": self.wobble.min,
            "wobble_max": self.wobble.max,
        })
    }

    /// Schema describing every parameter: type, default, bounds, description.
    pub fn param_schema() -> Value {
        let mut palettes = vec![RANDOM_PALETTE];
        palettes.extend_from_slice(Palette::list_names());
        json!({
            "layer_count": {
                "type": "integer",
                "default": DEFAULT_LAYER_COUNT,
                "min": LAYER_COUNT_BOUNDS.0,
                "max": LAYER_COUNT_BOUNDS.1,
                "description": "Number of blobs stacked on the canvas"
            },
            "palette_size": {
                "type": "integer",
                "default": DEFAULT_PALETTE_SIZE,
                "min": PALETTE_SIZE_BOUNDS.0,
                "max": PALETTE_SIZE_BOUNDS.1,
                "description": "Colors in the random palette"
            },
            "palette": {
                "type": "string",
                "default": RANDOM_PALETTE,
                "options": palettes,
                "description": "Random palette or a built-in palette name"
            },
            "radius_min": {
                "type": "number",
                "default": DEFAULT_RADIUS.min,
                "min": RADIUS_BOUNDS.0,
                "max": RADIUS_BOUNDS.1,
                "description": "Smallest nominal blob radius (exclusive lower bound)"
            },
            "radius_max": {
                "type": "number",
                "default": DEFAULT_RADIUS.max,
                "min": RADIUS_BOUNDS.0,
                "max": RADIUS_BOUNDS.1,
                "description": "Largest nominal blob radius"
            },
            "wobble_min": {
                "type": "number",
                "default": DEFAULT_WOBBLE.min,
                "min": WOBBLE_BOUNDS.0,
                "max": WOBBLE_BOUNDS.1,
                "description": "Smallest fractional radius perturbation"
            },
            "wobble_max": {
                "type": "number",
                "default": DEFAULT_WOBBLE.max,
                "min": WOBBLE_BOUNDS.0,
                "max": WOBBLE_BOUNDS.1,
                "description": "Largest fractional radius perturbation"
            }
        })
    }

    /// Checks the ranges the compositor trusts its caller to enforce.
    pub fn validate(&self) -> Result<(), PosterError> {
        check_usize("layer_count", self.layer_count, LAYER_COUNT_BOUNDS)?;
        if self.palette == RANDOM_PALETTE {
            check_usize("palette_size", self.palette_size, PALETTE_SIZE_BOUNDS)?;
        } else {
            Palette::from_name(&self.palette)?;
        }
        check_range("radius", self.radius)?;
        // The lower radius bound is exclusive.
        if self.radius.min <= RADIUS_BOUNDS.0 {
            return Err(out_of_bounds("radius_min", self.radius.min, RADIUS_BOUNDS));
        }
        check_f64("radius_max", self.radius.max, RADIUS_BOUNDS)?;
        check_range("wobble", self.wobble)?;
        check_f64("wobble_min", self.wobble.min, WOBBLE_BOUNDS)?;
        check_f64("wobble_max", self.wobble.max, WOBBLE_BOUNDS)?;
        Ok(())
    }

    /// Builds the palette for this poster. A random palette consumes
    /// `3 * palette_size` draws; a named one consumes none.
    pub fn palette(&self, rng: &mut impl RandomSource) -> Result<Palette, PosterError> {
        if self.palette == RANDOM_PALETTE {
            Palette::random(self.palette_size, rng)
        } else {
            Palette::from_name(&self.palette)
        }
    }
}

/// Generates a complete poster scene: palette first, then the layers, all
/// from the same stream.
///
/// Parameters are not validated here; call [`PosterParams::validate`] first
/// when they come from user input. The only failure is an unusable palette
/// (unknown name or zero size).
pub fn generate(params: &PosterParams, rng: &mut impl RandomSource) -> Result<Scene, PosterError> {
    let palette = params.palette(rng)?;
    log::debug!(
        "composing {} layers with a {}-color {} palette",
        params.layer_count,
        palette.len(),
        params.palette
    );
    Ok(compose(
        params.layer_count,
        &palette,
        params.radius,
        params.wobble,
        rng,
    ))
}

fn check_usize(name: &str, value: usize, (min, max): (usize, usize)) -> Result<(), PosterError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(out_of_bounds(name, value as f64, (min as f64, max as f64)))
    }
}

fn check_f64(name: &str, value: f64, bounds: (f64, f64)) -> Result<(), PosterError> {
    if (bounds.0..=bounds.1).contains(&value) {
        Ok(())
    } else {
        Err(out_of_bounds(name, value, bounds))
    }
}

fn out_of_bounds(name: &str, value: f64, (min, max): (f64, f64)) -> PosterError {
    PosterError::ParamOutOfBounds {
        name: name.to_string(),
        value,
        min,
        max,
    }
}

fn check_range(name: &str, range: ValueRange) -> Result<(), PosterError> {
    if range.min.is_finite() && range.max.is_finite() && range.min <= range.max {
        Ok(())
    } else {
        Err(PosterError::InvalidRange {
            name: name.to_string(),
            min: range.min,
            max: range.max,
        })
    }
}
