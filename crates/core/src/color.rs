//! The [`Srgb`] color type.
//!
//! Poster colors are plain RGB triples in [0, 1]. There is no alpha channel:
//! opacity belongs to the layer, not the color.

use crate::error::PosterError;
use crate::prng::RandomSource;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// sRGB color with components in [0, 1].
///
/// Serializes as a hex string `"#rrggbb"`. The hex round trip quantizes to
/// 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Srgb {
    pub const WHITE: Srgb = Srgb::new(1.0, 1.0, 1.0);
    pub const BLACK: Srgb = Srgb::new(0.0, 0.0, 0.0);

    /// Off-white paper tone used as the default poster background.
    pub const PAPER: Srgb = Srgb::new(0.98, 0.98, 0.97);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Draws a uniform random color: three draws, in red, green, blue order.
    pub fn random(rng: &mut impl RandomSource) -> Self {
        let r = rng.next_f64();
        let g = rng.next_f64();
        let b = rng.next_f64();
        Self { r, g, b }
    }

    /// Parses a hex color string like "#ff00aa" or "ff00aa" (case insensitive).
    ///
    /// Returns `PosterError::InvalidColor` if the input is not a valid 6-digit hex color.
    pub fn from_hex(hex: &str) -> Result<Srgb, PosterError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(PosterError::InvalidColor(format!(
                "expected 6 hex digits, got {hex:?}"
            )));
        }
        let channel = |range: std::ops::Range<usize>, name: &str| {
            u8::from_str_radix(&hex[range], 16)
                .map(|v| v as f64 / 255.0)
                .map_err(|e| PosterError::InvalidColor(format!("invalid {name} component: {e}")))
        };
        Ok(Srgb {
            r: channel(0..2, "red")?,
            g: channel(2..4, "green")?,
            b: channel(4..6, "blue")?,
        })
    }

    /// Quantizes to 8 bits per channel with rounding, clamping out-of-range values.
    pub fn to_rgb8(self) -> [u8; 3] {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b)]
    }

    /// Converts the color to a hex string like `"#rrggbb"`.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl Serialize for Srgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Srgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Srgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
