#![deny(unsafe_code)]
//! Core types for the blob-poster generator.
//!
//! Provides the `Scene`/`Layer`/`TextAnnotation` data model, the `Srgb`
//! color type, discrete `Palette`s, the `RandomSource` trait with its
//! `Xorshift64` implementation, the `Seed` replay record, and parameter
//! helpers.

pub mod color;
pub mod error;
pub mod palette;
pub mod params;
pub mod prng;
pub mod scene;
pub mod seed;

pub use color::Srgb;
pub use error::PosterError;
pub use palette::Palette;
pub use prng::{RandomSource, Xorshift64};
pub use scene::{Bounds, Layer, Scene, TextAnnotation};
pub use seed::Seed;
