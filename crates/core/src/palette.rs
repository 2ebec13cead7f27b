//! Discrete color palettes sampled with replacement.
//!
//! A [`Palette`] is generated once per poster and then shared read-only by
//! every layer. Layers pick a color uniformly at random, so the same color
//! may appear any number of times.

use crate::color::Srgb;
use crate::error::PosterError;
use crate::prng::RandomSource;

/// Names accepted by [`Palette::from_name`], besides `"random"`.
const BUILTIN_NAMES: &[&str] = &["ocean", "neon", "earth", "vapor", "fire", "pastel"];

/// An ordered, non-empty list of colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Srgb>,
}

impl Palette {
    /// Creates a palette from a list of colors. Requires at least one color.
    pub fn new(colors: Vec<Srgb>) -> Result<Self, PosterError> {
        if colors.is_empty() {
            return Err(PosterError::InvalidPalette(
                "palette requires at least 1 color".to_string(),
            ));
        }
        Ok(Self { colors })
    }

    /// Creates a palette by parsing hex color strings.
    pub fn from_hex(hexes: &[&str]) -> Result<Self, PosterError> {
        let colors = hexes
            .iter()
            .map(|h| Srgb::from_hex(h))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(colors)
    }

    /// Generates `k` uniform random colors, three draws each.
    ///
    /// Returns `PosterError::InvalidPalette` if `k` is 0 (no draws are made).
    pub fn random(k: usize, rng: &mut impl RandomSource) -> Result<Self, PosterError> {
        Self::new((0..k).map(|_| Srgb::random(rng)).collect())
    }

    /// Looks up a built-in palette by name.
    pub fn from_name(name: &str) -> Result<Self, PosterError> {
        let hexes: &[&str] = match name {
            "ocean" => &["#001f3f", "#003366", "#005f73", "#0a9396", "#94d2bd"],
            "neon" => &["#ff00ff", "#00ff41", "#ffff00", "#ff0080", "#00ffff"],
            "earth" => &["#5c4033", "#8b6914", "#6b8e23", "#daa520", "#d2b48c"],
            "vapor" => &["#7b2d8e", "#c77dff", "#ff9ebb", "#80ced6", "#a0e7e5"],
            "fire" => &["#800000", "#cc0000", "#ff4500", "#ff8c00", "#ffd700"],
            "pastel" => &["#ffd1dc", "#b5ead7", "#c7ceea", "#ffdac1", "#e2f0cb"],
            _ => return Err(PosterError::UnknownPalette(name.to_string())),
        };
        Self::from_hex(hexes)
    }

    /// Names of the built-in palettes.
    pub fn list_names() -> &'static [&'static str] {
        BUILTIN_NAMES
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false for a constructed palette.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[Srgb] {
        &self.colors
    }

    /// Picks one color uniformly at random (one draw).
    pub fn pick(&self, rng: &mut impl RandomSource) -> Srgb {
        self.colors[rng.pick(self.colors.len())]
    }
}
