#![deny(unsafe_code)]
//! Rendering surfaces for blob-poster scenes.
//!
//! A [`Scene`](blob_poster_core::Scene) is handed to one of these surfaces
//! after composition:
//! - [`pixel::scene_to_rgb`]: in-memory RGB8 raster, labels included
//! - [`snapshot::encode_png`] / [`snapshot::write_png`]: PNG bytes or file
//!   (feature `png`, default on)
//! - [`svg::scene_to_svg`] / [`svg::write_svg`]: vector output

pub mod pixel;
pub mod svg;

#[cfg(feature = "png")]
pub mod snapshot;
