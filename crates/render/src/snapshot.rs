//! PNG encoding of a rendered [`Scene`].
//!
//! Feature-gated behind `png` (default on) so consumers that only need the
//! raw pixel buffer or SVG don't pull in the `image` crate. Rasterization
//! itself lives in [`crate::pixel`].

use blob_poster_core::error::PosterError;
use blob_poster_core::Scene;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use std::path::Path;

use crate::pixel::scene_to_rgb;

/// Rasterizes the scene at `dpi` and encodes it as PNG bytes.
///
/// Pixel size is the scene's figure size times `dpi`. Returns
/// `PosterError::InvalidDimensions` for an unusable `dpi`,
/// `PosterError::Render` if drawing fails and `PosterError::Io` if encoding
/// fails.
pub fn encode_png(scene: &Scene, dpi: f64) -> Result<Vec<u8>, PosterError> {
    let (w, h) = scene.pixel_size(dpi)?;
    let rgb = scene_to_rgb(scene, w, h)?;
    let mut png = Vec::new();
    PngEncoder::new(&mut png)
        .write_image(&rgb, w, h, ExtendedColorType::Rgb8)
        .map_err(|e| PosterError::Io(format!("PNG encode: {e}")))?;
    Ok(png)
}

/// Writes the scene as a PNG file at `dpi`.
pub fn write_png(scene: &Scene, dpi: f64, path: &Path) -> Result<(), PosterError> {
    let bytes = encode_png(scene, dpi)?;
    std::fs::write(path, bytes).map_err(|e| PosterError::Io(format!("{}: {e}", path.display())))?;
    log::debug!("wrote {}", path.display());
    Ok(())
}
