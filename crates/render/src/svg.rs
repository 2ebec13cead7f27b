//! SVG rendering of a [`Scene`].
//!
//! Coordinates are emitted in pixels at the requested DPI so the SVG and PNG
//! outputs line up.

use std::fmt::Write;
use std::path::Path;

use blob_poster_core::error::PosterError;
use blob_poster_core::{Layer, Scene, TextAnnotation};
use glam::DVec2;
use ::svg::node::element::{Polygon, Rectangle, Text};
use ::svg::Document;

use crate::pixel::POINTS_PER_INCH;

/// Builds the scene as an SVG document.
///
/// Returns `PosterError::InvalidDimensions` for an unusable `dpi`.
pub fn scene_document(scene: &Scene, dpi: f64) -> Result<Document, PosterError> {
    let (w, h) = scene.pixel_size(dpi)?;
    let size = DVec2::new(w as f64, h as f64);

    let mut document = Document::new()
        .set("width", w)
        .set("height", h)
        .set("viewBox", (0, 0, w, h))
        .add(
            Rectangle::new()
                .set("width", w)
                .set("height", h)
                .set("fill", scene.background().to_hex()),
        );
    for layer in scene.layers() {
        document = document.add(polygon(scene, layer, size));
    }
    for annotation in scene.annotations() {
        document = document.add(text(annotation, size, dpi));
    }
    Ok(document)
}

/// Renders the scene as a standalone SVG string.
pub fn scene_to_svg(scene: &Scene, dpi: f64) -> Result<String, PosterError> {
    Ok(scene_document(scene, dpi)?.to_string())
}

/// Writes the scene as an SVG file at `dpi`.
pub fn write_svg(scene: &Scene, dpi: f64, path: &Path) -> Result<(), PosterError> {
    let document = scene_document(scene, dpi)?;
    ::svg::save(path, &document).map_err(|e| PosterError::Io(format!("{}: {e}", path.display())))?;
    log::debug!("wrote {}", path.display());
    Ok(())
}

fn polygon(scene: &Scene, layer: &Layer, size: DVec2) -> Polygon {
    let mut points = String::with_capacity(layer.points().len() * 16);
    for &p in layer.points() {
        let q = scene.bounds().to_unit_down(p) * size;
        // Writing to a String cannot fail.
        let _ = write!(points, "{:.2},{:.2} ", q.x, q.y);
    }
    Polygon::new()
        .set("points", points.trim_end())
        .set("fill", layer.color().to_hex())
        .set("fill-opacity", format!("{:.4}", layer.opacity()))
        .set("stroke", "none")
}

/// Annotation positions are axes fractions with y up, anchored at the
/// left end of the text baseline.
fn text(annotation: &TextAnnotation, size: DVec2, dpi: f64) -> Text {
    let x = annotation.position.x * size.x;
    let y = (1.0 - annotation.position.y) * size.y;
    let font_px = annotation.font_size * dpi / POINTS_PER_INCH;
    Text::new(annotation.text.as_str())
        .set("x", format!("{x:.2}"))
        .set("y", format!("{y:.2}"))
        .set("font-family", "DejaVu Sans, sans-serif")
        .set("font-size", format!("{font_px:.2}"))
        .set("font-weight", if annotation.bold { "bold" } else { "normal" })
}
