//! Scene and layer data model.
//!
//! A [`Scene`] is the finished, renderer-independent description of a
//! poster: an ordered stack of filled blob [`Layer`]s (index 0 = bottom,
//! drawn first), text annotations, data-space [`Bounds`], a background
//! color and a physical figure size. Renderers receive it by reference;
//! nothing draws into an ambient context.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::color::Srgb;
use crate::error::PosterError;

/// Default figure size in inches (width, height).
pub const FIGURE_SIZE_INCHES: DVec2 = DVec2::new(7.0, 10.0);

/// Largest side, in pixels, a rendering surface may be sized to.
pub const MAX_SIDE_PX: u32 = 32_768;

/// Axis-aligned data-space rectangle mapped onto the whole figure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: DVec2,
    pub max: DVec2,
}

impl Bounds {
    /// The unit square [0,1]×[0,1].
    pub const UNIT: Bounds = Bounds {
        min: DVec2::ZERO,
        max: DVec2::ONE,
    };

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Maps a data-space point to normalized figure coordinates with y
    /// pointing down: `(0,0)` is the top-left corner, `(1,1)` bottom-right.
    pub fn to_unit_down(&self, p: DVec2) -> DVec2 {
        DVec2::new(
            (p.x - self.min.x) / self.width(),
            1.0 - (p.y - self.min.y) / self.height(),
        )
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::UNIT
    }
}

/// A positioned text label. Position is in axes-fraction coordinates
/// (0..1 on both axes, y up), independent of the data bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextAnnotation {
    pub text: String,
    pub position: DVec2,
    /// Font size in points.
    pub font_size: f64,
    pub bold: bool,
}

impl TextAnnotation {
    pub fn new(text: impl Into<String>, position: DVec2, font_size: f64) -> Self {
        Self {
            text: text.into(),
            position,
            font_size,
            bold: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// One filled, unstroked blob.
///
/// Keeps the generated center, radius and wobble alongside the boundary so a
/// scene can be inspected or replayed without re-deriving them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    center: DVec2,
    radius: f64,
    wobble: f64,
    points: Vec<DVec2>,
    color: Srgb,
    opacity: f64,
}

impl Layer {
    pub fn new(
        center: DVec2,
        radius: f64,
        wobble: f64,
        points: Vec<DVec2>,
        color: Srgb,
        opacity: f64,
    ) -> Self {
        Self {
            center,
            radius,
            wobble,
            points,
            color,
            opacity,
        }
    }

    pub fn center(&self) -> DVec2 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn wobble(&self) -> f64 {
        self.wobble
    }

    /// Closed boundary; renderers connect the last point back to the first.
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    pub fn color(&self) -> Srgb {
        self.color
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }
}

/// A complete poster ready for a rendering surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    layers: Vec<Layer>,
    annotations: Vec<TextAnnotation>,
    bounds: Bounds,
    background: Srgb,
    figure_size: DVec2,
}

impl Scene {
    /// Creates an empty scene: no layers, no annotations, unit bounds, paper
    /// background and the default 7×10 inch figure.
    pub fn new() -> Self {
        Self {
            layers: Vec::new(),
            annotations: Vec::new(),
            bounds: Bounds::UNIT,
            background: Srgb::PAPER,
            figure_size: FIGURE_SIZE_INCHES,
        }
    }

    /// Adds a layer on top of the stack.
    pub fn push_layer(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    pub fn add_annotation(&mut self, annotation: TextAnnotation) {
        self.annotations.push(annotation);
    }

    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    pub fn set_background(&mut self, background: Srgb) {
        self.background = background;
    }

    /// Layers in bottom-to-top order.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn annotations(&self) -> &[TextAnnotation] {
        &self.annotations
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn background(&self) -> Srgb {
        self.background
    }

    /// Figure size in inches.
    pub fn figure_size(&self) -> DVec2 {
        self.figure_size
    }

    /// Pixel dimensions of the figure at `dpi` dots per inch.
    ///
    /// Returns `PosterError::InvalidDimensions` if either side rounds to zero
    /// or exceeds [`MAX_SIDE_PX`].
    pub fn pixel_size(&self, dpi: f64) -> Result<(u32, u32), PosterError> {
        let to_px = |inches: f64| {
            let px = (inches * dpi).round();
            if px.is_finite() && (1.0..=MAX_SIDE_PX as f64).contains(&px) {
                Ok(px as u32)
            } else {
                Err(PosterError::InvalidDimensions)
            }
        };
        Ok((to_px(self.figure_size.x)?, to_px(self.figure_size.y)?))
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dot(x: f64, color: Srgb) -> Layer {
        Layer::new(
            DVec2::new(x, 0.5),
            0.125,
            0.0,
            vec![DVec2::new(x, 0.5)],
            color,
            0.5,
        )
    }

    #[test]
    fn new_scene_is_empty_with_unit_bounds() {
        let scene = Scene::new();
        assert_eq!(scene.layer_count(), 0);
        assert!(scene.annotations().is_empty());
        assert_eq!(scene.bounds(), Bounds::UNIT);
        assert_eq!(scene.background(), Srgb::PAPER);
        assert_eq!(scene.figure_size(), DVec2::new(7.0, 10.0));
    }

    #[test]
    fn push_layer_preserves_order() {
        let mut scene = Scene::new();
        scene.push_layer(dot(0.1, Srgb::BLACK));
        scene.push_layer(dot(0.2, Srgb::WHITE));
        scene.push_layer(dot(0.3, Srgb::BLACK));
        let xs: Vec<f64> = scene.layers().iter().map(|l| l.center().x).collect();
        assert_eq!(xs, vec![0.1, 0.2, 0.3]);
    }

    #[test]
    fn pixel_size_scales_with_dpi() {
        let scene = Scene::new();
        assert_eq!(scene.pixel_size(100.0).unwrap(), (700, 1000));
        assert_eq!(scene.pixel_size(300.0).unwrap(), (2100, 3000));
    }

    #[test]
    fn pixel_size_rejects_zero_and_nan() {
        let scene = Scene::new();
        assert!(matches!(
            scene.pixel_size(0.0),
            Err(PosterError::InvalidDimensions)
        ));
        assert!(scene.pixel_size(f64::NAN).is_err());
        assert!(scene.pixel_size(1e12).is_err());
    }

    #[test]
    fn pixel_size_caps_each_side() {
        let scene = Scene::new();
        // 10 in at 3276.8 dpi is exactly the limit.
        assert_eq!(scene.pixel_size(3276.8).unwrap().1, MAX_SIDE_PX);
        assert!(matches!(
            scene.pixel_size(3300.0),
            Err(PosterError::InvalidDimensions)
        ));
    }

    #[test]
    fn unit_bounds_flip_y_for_screen_space() {
        let b = Bounds::UNIT;
        assert_eq!(b.to_unit_down(DVec2::new(0.0, 0.0)), DVec2::new(0.0, 1.0));
        assert_eq!(b.to_unit_down(DVec2::new(1.0, 1.0)), DVec2::new(1.0, 0.0));
        assert_eq!(b.to_unit_down(DVec2::new(0.25, 0.75)), DVec2::new(0.25, 0.25));
    }

    #[test]
    fn annotation_builder_sets_bold() {
        let a = TextAnnotation::new("Hi", DVec2::new(0.05, 0.95), 18.0).bold();
        assert!(a.bold);
        assert_eq!(a.font_size, 18.0);
    }

    #[test]
    fn scene_json_round_trip() {
        let mut scene = Scene::new();
        // Colors serialize as 8-bit hex, so use exactly representable ones.
        scene.set_background(Srgb::WHITE);
        scene.push_layer(dot(0.25, Srgb::from_hex("#336699").unwrap()));
        scene.add_annotation(TextAnnotation::new("t", DVec2::new(0.125, 0.25), 11.0));
        let json = serde_json::to_string(&scene).unwrap();
        let back: Scene = serde_json::from_str(&json).unwrap();
        assert_eq!(scene, back);
    }
}
