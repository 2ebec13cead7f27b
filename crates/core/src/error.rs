//! Error types for the blob-poster core.

use thiserror::Error;

/// Errors produced at the edges of poster generation: parameter validation,
/// palette construction, and encoding/output.
///
/// Shape generation and scene composition never fail; these errors come
/// from the layers around them.
#[derive(Debug, Error)]
pub enum PosterError {
    /// A surface size was zero, non-finite or larger than
    /// [`MAX_SIDE_PX`](crate::scene::MAX_SIDE_PX) on either side.
    #[error(
        "invalid dimensions: width and height must be between 1 and {} pixels",
        crate::scene::MAX_SIDE_PX
    )]
    InvalidDimensions,

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A palette could not be constructed from the given colors.
    #[error("invalid palette: {0}")]
    InvalidPalette(String),

    /// A palette name did not match any built-in palette.
    #[error("unknown palette: {0}")]
    UnknownPalette(String),

    /// A `[min, max]` range had `min > max` or a non-finite bound.
    #[error("invalid range for '{name}': [{min}, {max}]")]
    InvalidRange { name: String, min: f64, max: f64 },

    /// A parameter fell outside its allowed interval.
    #[error("parameter '{name}' = {value} is outside [{min}, {max}]")]
    ParamOutOfBounds {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A parameter object had the wrong shape.
    #[error("invalid params: {0}")]
    InvalidParams(String),

    /// A drawing backend failed while rendering a surface.
    #[error("render error: {0}")]
    Render(String),

    /// Encoding or writing an output failed.
    #[error("i/o error: {0}")]
    Io(String),
}
