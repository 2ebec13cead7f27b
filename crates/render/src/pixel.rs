//! CPU rasterization of a [`Scene`] into an RGB8 buffer.
//!
//! Always available (no feature gate) so both the PNG snapshot path and any
//! in-memory consumer share the same conversion.
//!
//! Drawing goes through a `plotters` bitmap backend: the background fill,
//! then each layer polygon in stack order with its opacity blended over what
//! is already there, then the text annotations in the bundled DejaVu Sans
//! faces.

use std::fmt::Display;
use std::sync::OnceLock;

use blob_poster_core::error::PosterError;
use blob_poster_core::scene::MAX_SIDE_PX;
use blob_poster_core::{Layer, Scene, Srgb, TextAnnotation};
use glam::DVec2;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::register_font;
use plotters::style::text_anchor::{HPos, Pos, VPos};

const REGULAR_FACE: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");
const BOLD_FACE: &[u8] = include_bytes!("../assets/DejaVuSans-Bold.ttf");

/// Family name the bundled faces are registered under.
const FONT_FAMILY: &str = "sans-serif";

/// Points per inch, for converting annotation font sizes.
pub const POINTS_PER_INCH: f64 = 72.0;

type Canvas<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

static FONTS: OnceLock<Result<(), String>> = OnceLock::new();

/// Rasterizes `scene` at `width × height` pixels, row-major RGB8.
///
/// The scene bounds map onto the full image with y pointing up; geometry
/// outside the bounds is clipped. Annotation point sizes are converted with
/// the image's pixels per inch, taken from the figure height.
///
/// Returns `PosterError::InvalidDimensions` if either side is zero or above
/// [`MAX_SIDE_PX`], and `PosterError::Render` if the backend fails.
pub fn scene_to_rgb(scene: &Scene, width: u32, height: u32) -> Result<Vec<u8>, PosterError> {
    if !(1..=MAX_SIDE_PX).contains(&width) || !(1..=MAX_SIDE_PX).contains(&height) {
        return Err(PosterError::InvalidDimensions);
    }
    let len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(3))
        .ok_or(PosterError::InvalidDimensions)?;
    let size = DVec2::new(width as f64, height as f64);
    let px_per_inch = size.y / scene.figure_size().y;
    if !px_per_inch.is_finite() || px_per_inch <= 0.0 {
        return Err(PosterError::InvalidDimensions);
    }
    register_fonts()?;

    let mut buf = vec![0u8; len];
    {
        let root = BitMapBackend::with_buffer(&mut buf, (width, height)).into_drawing_area();
        root.fill(&rgb(scene.background())).map_err(render_error)?;
        for layer in scene.layers() {
            draw_layer(&root, scene, layer, size)?;
        }
        for annotation in scene.annotations() {
            draw_annotation(&root, annotation, size, px_per_inch)?;
        }
        root.present().map_err(render_error)?;
    }
    log::debug!(
        "rasterized {} layers and {} labels at {width}x{height}",
        scene.layer_count(),
        scene.annotations().len()
    );
    Ok(buf)
}

fn draw_layer(root: &Canvas<'_>, scene: &Scene, layer: &Layer, size: DVec2) -> Result<(), PosterError> {
    let points = layer.points();
    if points.len() < 3 || !points.iter().all(|p| p.is_finite()) {
        return Ok(());
    }
    let outline: Vec<(i32, i32)> = points
        .iter()
        .map(|&p| to_pixel(scene.bounds().to_unit_down(p) * size))
        .collect();
    let fill = rgb(layer.color())
        .mix(layer.opacity().clamp(0.0, 1.0))
        .filled();
    root.draw(&Polygon::new(outline, fill)).map_err(render_error)
}

/// Annotation positions are axes fractions with y up, anchored at the left
/// end of the text's bottom edge.
fn draw_annotation(
    root: &Canvas<'_>,
    annotation: &TextAnnotation,
    size: DVec2,
    px_per_inch: f64,
) -> Result<(), PosterError> {
    let anchor = DVec2::new(annotation.position.x, 1.0 - annotation.position.y) * size;
    let style = if annotation.bold {
        FontStyle::Bold
    } else {
        FontStyle::Normal
    };
    let font_px = annotation.font_size * px_per_inch / POINTS_PER_INCH;
    let text_style = FontDesc::new(FontFamily::Name(FONT_FAMILY), font_px, style)
        .color(&BLACK)
        .pos(Pos::new(HPos::Left, VPos::Bottom));
    root.draw(&Text::new(annotation.text.as_str(), to_pixel(anchor), text_style))
        .map_err(render_error)
}

fn register_fonts() -> Result<(), PosterError> {
    FONTS
        .get_or_init(|| {
            register_font(FONT_FAMILY, FontStyle::Normal, REGULAR_FACE)
                .and_then(|()| register_font(FONT_FAMILY, FontStyle::Bold, BOLD_FACE))
                .map_err(|_| "invalid font data".to_string())
        })
        .clone()
        .map_err(PosterError::Render)
}

fn rgb(color: Srgb) -> RGBColor {
    let [r, g, b] = color.to_rgb8();
    RGBColor(r, g, b)
}

fn to_pixel(p: DVec2) -> (i32, i32) {
    (p.x.round() as i32, p.y.round() as i32)
}

fn render_error(e: impl Display) -> PosterError {
    PosterError::Render(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use blob_poster_blobs::{generate, PosterParams};
    use blob_poster_core::Xorshift64;

    fn square(min: DVec2, max: DVec2, color: Srgb, opacity: f64) -> Layer {
        let points = vec![
            min,
            DVec2::new(max.x, min.y),
            max,
            DVec2::new(min.x, max.y),
        ];
        Layer::new((min + max) / 2.0, 0.0, 0.0, points, color, opacity)
    }

    fn pixel(buf: &[u8], w: u32, x: u32, y: u32) -> [u8; 3] {
        let i = ((y * w + x) * 3) as usize;
        [buf[i], buf[i + 1], buf[i + 2]]
    }

    fn bare_scene(background: Srgb) -> Scene {
        let mut scene = Scene::new();
        scene.set_background(background);
        scene
    }

    fn poster(layers: usize) -> Scene {
        let params = PosterParams {
            layer_count: layers,
            ..PosterParams::default()
        };
        generate(&params, &mut Xorshift64::new(11)).unwrap()
    }

    /// Pixels in `x0..x1 × y0..y1` that differ from `bg`.
    fn inked(buf: &[u8], w: u32, (x0, x1): (u32, u32), (y0, y1): (u32, u32), bg: [u8; 3]) -> usize {
        (y0..y1)
            .flat_map(|y| (x0..x1).map(move |x| (x, y)))
            .filter(|&(x, y)| pixel(buf, w, x, y) != bg)
            .count()
    }

    #[test]
    fn correct_length() {
        let buf = scene_to_rgb(&Scene::new(), 8, 4).unwrap();
        assert_eq!(buf.len(), 8 * 4 * 3);
    }

    #[test]
    fn zero_and_oversized_dimensions_are_rejected() {
        assert!(matches!(
            scene_to_rgb(&Scene::new(), 0, 10),
            Err(PosterError::InvalidDimensions)
        ));
        assert!(scene_to_rgb(&Scene::new(), 10, 0).is_err());
        assert!(scene_to_rgb(&Scene::new(), MAX_SIDE_PX + 1, 10).is_err());
    }

    #[test]
    fn empty_scene_is_background() {
        let scene = bare_scene(Srgb::from_hex("#102030").unwrap());
        let buf = scene_to_rgb(&scene, 5, 5).unwrap();
        assert!(buf.chunks(3).all(|px| px == [0x10, 0x20, 0x30]));
    }

    #[test]
    fn opaque_square_covers_its_quadrant() {
        let mut scene = bare_scene(Srgb::WHITE);
        // Bottom-left quadrant in data space = bottom-left in image space.
        scene.push_layer(square(DVec2::ZERO, DVec2::splat(0.5), Srgb::BLACK, 1.0));
        let buf = scene_to_rgb(&scene, 20, 20).unwrap();
        assert_eq!(pixel(&buf, 20, 4, 15), [0, 0, 0]);
        assert_eq!(pixel(&buf, 20, 15, 4), [255, 255, 255]);
        assert_eq!(pixel(&buf, 20, 4, 4), [255, 255, 255]);
    }

    #[test]
    fn partial_opacity_blends_with_background() {
        let mut scene = bare_scene(Srgb::WHITE);
        scene.push_layer(square(DVec2::ZERO, DVec2::ONE, Srgb::BLACK, 0.5));
        let buf = scene_to_rgb(&scene, 10, 10).unwrap();
        let [r, g, b] = pixel(&buf, 10, 5, 5);
        assert!((120..=135).contains(&r), "expected ~50% gray, got {r}");
        assert_eq!((r, r), (g, b));
    }

    #[test]
    fn later_layers_are_drawn_on_top() {
        let red = Srgb::new(1.0, 0.0, 0.0);
        let blue = Srgb::new(0.0, 0.0, 1.0);
        let mut a = Scene::new();
        a.push_layer(square(DVec2::ZERO, DVec2::ONE, red, 1.0));
        a.push_layer(square(DVec2::ZERO, DVec2::ONE, blue, 1.0));
        let mut b = Scene::new();
        b.push_layer(square(DVec2::ZERO, DVec2::ONE, blue, 1.0));
        b.push_layer(square(DVec2::ZERO, DVec2::ONE, red, 1.0));

        let buf_a = scene_to_rgb(&a, 10, 10).unwrap();
        let buf_b = scene_to_rgb(&b, 10, 10).unwrap();
        assert_eq!(pixel(&buf_a, 10, 5, 5), [0, 0, 255]);
        assert_eq!(pixel(&buf_b, 10, 5, 5), [255, 0, 0]);
    }

    #[test]
    fn geometry_outside_bounds_is_clipped() {
        let mut scene = bare_scene(Srgb::WHITE);
        scene.push_layer(square(
            DVec2::splat(-2.0),
            DVec2::splat(-1.0),
            Srgb::BLACK,
            1.0,
        ));
        scene.push_layer(square(
            DVec2::new(0.5, -1.0),
            DVec2::new(3.0, 3.0),
            Srgb::BLACK,
            1.0,
        ));
        let buf = scene_to_rgb(&scene, 16, 16).unwrap();
        assert_eq!(pixel(&buf, 16, 2, 8), [255, 255, 255]);
        assert_eq!(pixel(&buf, 16, 12, 8), [0, 0, 0]);
    }

    #[test]
    fn degenerate_outlines_are_skipped() {
        let mut scene = bare_scene(Srgb::WHITE);
        scene.push_layer(Layer::new(
            DVec2::splat(0.5),
            0.0,
            0.0,
            vec![DVec2::splat(0.5), DVec2::splat(0.6)],
            Srgb::BLACK,
            1.0,
        ));
        let buf = scene_to_rgb(&scene, 4, 4).unwrap();
        assert!(buf.chunks(3).all(|px| px == [255, 255, 255]));
    }

    #[test]
    fn labels_are_drawn_without_layers() {
        // 504x720 at 72 dpi: title baseline near y = 36, subtitle near y = 65.
        let scene = poster(0);
        let buf = scene_to_rgb(&scene, 504, 720).unwrap();
        let bg = Srgb::PAPER.to_rgb8();
        assert!(inked(&buf, 504, (20, 250), (10, 40), bg) > 0, "title missing");
        assert!(inked(&buf, 504, (20, 250), (50, 68), bg) > 0, "subtitle missing");
        assert_eq!(inked(&buf, 504, (0, 504), (360, 720), bg), 0);
    }

    #[test]
    fn bold_title_inks_more_than_regular() {
        let mut bold = bare_scene(Srgb::WHITE);
        bold.add_annotation(TextAnnotation::new("Poster", DVec2::new(0.1, 0.5), 30.0).bold());
        let mut regular = bare_scene(Srgb::WHITE);
        regular.add_annotation(TextAnnotation::new("Poster", DVec2::new(0.1, 0.5), 30.0));

        let white = [255, 255, 255];
        let a = scene_to_rgb(&bold, 504, 720).unwrap();
        let b = scene_to_rgb(&regular, 504, 720).unwrap();
        let region = ((0, 504), (300, 370));
        assert!(inked(&a, 504, region.0, region.1, white) > inked(&b, 504, region.0, region.1, white));
    }

    #[test]
    fn labels_scale_with_resolution() {
        let scene = poster(0);
        let bg = Srgb::PAPER.to_rgb8();
        let low = scene_to_rgb(&scene, 252, 360).unwrap();
        let high = scene_to_rgb(&scene, 504, 720).unwrap();
        let low_ink = inked(&low, 252, (0, 252), (0, 40), bg);
        let high_ink = inked(&high, 504, (0, 504), (0, 80), bg);
        assert!(high_ink > 2 * low_ink, "{high_ink} vs {low_ink}");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn any_poster_fills_the_whole_buffer(seed in any::<u64>(), layers in 0usize..12) {
                let params = PosterParams { layer_count: layers, ..PosterParams::default() };
                let scene = generate(&params, &mut Xorshift64::new(seed)).unwrap();
                let buf = scene_to_rgb(&scene, 35, 50).unwrap();
                prop_assert_eq!(buf.len(), 35 * 50 * 3);
            }
        }
    }
}
