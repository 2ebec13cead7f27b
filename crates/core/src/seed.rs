//! Replay record for a generated poster.
//!
//! A [`Seed`] captures everything needed to regenerate a poster: the PRNG
//! seed, the export resolution, and the parameter overrides. Feeding the same
//! `Seed` to the same binary produces a bit-identical image.

use crate::error::PosterError;
use serde::{Deserialize, Serialize};

/// Default export resolution in dots per inch.
pub const DEFAULT_DPI: f64 = 300.0;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Seed {
    pub seed: u64,
    #[serde(default = "default_dpi")]
    pub dpi: f64,
    #[serde(default = "empty_params")]
    pub params: serde_json::Value,
}

fn default_dpi() -> f64 {
    DEFAULT_DPI
}

fn empty_params() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

impl Seed {
    /// Creates a Seed with empty params (`{}`) and the default DPI.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            dpi: DEFAULT_DPI,
            params: empty_params(),
        }
    }

    /// Validates that the DPI is finite and positive and that params is a
    /// JSON object.
    pub fn validate(&self) -> Result<(), PosterError> {
        if !self.dpi.is_finite() || self.dpi <= 0.0 {
            return Err(PosterError::ParamOutOfBounds {
                name: "dpi".to_string(),
                value: self.dpi,
                min: f64::MIN_POSITIVE,
                max: f64::MAX,
            });
        }
        if !self.params.is_object() {
            return Err(PosterError::InvalidParams(
                "params must be a JSON object".to_string(),
            ));
        }
        Ok(())
    }
}
