//! Raster export: scene → SVG markup → pixels → PNG.

use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};
use resvg::tiny_skia::{Color, Pixmap, Transform};
use resvg::usvg::{Options, Tree};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::macros::format_description;

use crate::color::HexColor;
use crate::error::ExportError;
use crate::scene::VectorScene;
use crate::svg::to_svg;

// ============================================================================
// Options
// ============================================================================

/// Settings for one export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct ExportOptions {
    /// Painted under the scene; the scene itself has transparent areas.
    pub background: HexColor,
    /// Output pixels per canvas unit.
    pub scale: f32,
    /// File name stem, before the timestamp.
    pub file_prefix: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            background: HexColor::WHITE,
            scale: 1.0,
            file_prefix: "my-character".to_string(),
        }
    }
}

impl ExportOptions {
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_background(mut self, background: HexColor) -> Self {
        self.background = background;
        self
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// An encoded image ready to be offered as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedImage {
    pub file_name: String,
    pub width: u32,
    pub height: u32,
    pub png: Vec<u8>,
}

// ============================================================================
// Rasterization
// ============================================================================

/// Renders `scene` to straight-alpha RGBA pixels over an opaque background.
pub fn rasterize(scene: &VectorScene, options: &ExportOptions) -> Result<RgbaImage, ExportError> {
    let markup = to_svg(scene);
    let tree = Tree::from_str(&markup, &Options::default())?;

    let scale = if options.scale.is_finite() && options.scale > 0.0 {
        options.scale
    } else {
        log::warn!("export: invalid scale {}, using 1", options.scale);
        1.0
    };
    let (width, height) = scene.size.to_pixels(scale);
    let mut pixmap = Pixmap::new(width, height).ok_or(ExportError::Surface { width, height })?;

    let HexColor { r, g, b } = options.background;
    pixmap.fill(Color::from_rgba8(r, g, b, 255));
    resvg::render(&tree, Transform::from_scale(scale, scale), &mut pixmap.as_mut());

    log::debug!("export: rasterized {width}x{height} at scale {scale}");
    Ok(pixmap_to_rgba_image(&pixmap))
}

/// Encodes pixels as PNG.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, ExportError> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// `"{prefix}-{YYYYMMDD-HHMMSS}.png"`.
pub fn file_name(prefix: &str, at: OffsetDateTime) -> Result<String, ExportError> {
    let stamp = at
        .format(format_description!("[year][month][day]-[hour][minute][second]"))
        .map_err(|err| ExportError::Timestamp(err.to_string()))?;
    Ok(format!("{prefix}-{stamp}.png"))
}

/// Rasterizes, encodes and names one export. Intermediate buffers are owned
/// locally and released on every return path.
pub fn export_png(
    scene: &VectorScene,
    options: &ExportOptions,
    at: OffsetDateTime,
) -> Result<ExportedImage, ExportError> {
    let image = rasterize(scene, options)?;
    let png = encode_png(&image)?;
    let file_name = file_name(&options.file_prefix, at)?;
    log::debug!("export: {file_name} ({} bytes)", png.len());
    Ok(ExportedImage {
        file_name,
        width: image.width(),
        height: image.height(),
        png,
    })
}

/// Converts a tiny_skia pixmap to an image::RgbaImage.
fn pixmap_to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let width = pixmap.width();
    let mut image = RgbaImage::new(width, pixmap.height());

    for (index, pixel) in pixmap.pixels().iter().enumerate() {
        let index = index as u32;
        // tiny_skia stores premultiplied alpha
        let (r, g, b, a) = unpremultiply(pixel.red(), pixel.green(), pixel.blue(), pixel.alpha());
        image.put_pixel(index % width, index / width, Rgba([r, g, b, a]));
    }

    image
}

fn unpremultiply(r: u8, g: u8, b: u8, a: u8) -> (u8, u8, u8, u8) {
    if a == 0 {
        (0, 0, 0, 0)
    } else {
        let alpha = f32::from(a) / 255.0;
        (
            (f32::from(r) / alpha).round().min(255.0) as u8,
            (f32::from(g) / alpha).round().min(255.0) as u8,
            (f32::from(b) / alpha).round().min(255.0) as u8,
            a,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::CharacterAttributes;
    use crate::compose::{BasicRenderer, compose, render_character};
    use time::macros::datetime;

    #[test]
    fn unpremultiply_restores_channels() {
        assert_eq!(unpremultiply(0, 0, 0, 0), (0, 0, 0, 0));
        assert_eq!(unpremultiply(255, 128, 0, 255), (255, 128, 0, 255));
        assert_eq!(unpremultiply(51, 0, 51, 51), (255, 0, 255, 51));
    }

    #[test]
    fn options_defaults_and_json() {
        let options = ExportOptions::default();
        assert_eq!(options.background, HexColor::WHITE);
        assert_eq!(options.scale, 1.0);
        assert_eq!(options.file_prefix, "my-character");

        let parsed = ExportOptions::from_json(r##"{"scale":2,"background":"#000000"}"##).unwrap();
        assert_eq!(parsed.scale, 2.0);
        assert_eq!(parsed.background, HexColor::BLACK);
        assert_eq!(parsed.file_prefix, "my-character");
        assert!(options.to_json().unwrap().contains("\"filePrefix\""));
    }

    #[test]
    fn file_names_are_timestamped() {
        let at = datetime!(2024-03-07 09:05:02 UTC);
        assert_eq!(file_name("my-character", at).unwrap(), "my-character-20240307-090502.png");
    }

    #[test]
    fn background_is_opaque() {
        let scene = compose(&BasicRenderer, &CharacterAttributes::default(), None);
        let options = ExportOptions::default().with_background(HexColor::rgb(0x10, 0x20, 0x30));
        let image = rasterize(&scene, &options).unwrap();

        assert_eq!((image.width(), image.height()), (400, 600));
        // top-left corner is empty canvas
        assert_eq!(image.get_pixel(0, 0), &Rgba([0x10, 0x20, 0x30, 255]));
        assert!(image.pixels().all(|p| p.0[3] == 255));
    }

    #[test]
    fn scale_changes_pixel_size() {
        let scene = compose(&BasicRenderer, &CharacterAttributes::default(), None);
        let image = rasterize(&scene, &ExportOptions::default().with_scale(0.5)).unwrap();
        assert_eq!((image.width(), image.height()), (200, 300));
    }

    #[test]
    fn export_png_produces_png_bytes() {
        let scene = render_character(&CharacterAttributes::default());
        let at = datetime!(2025-01-01 00:00:00 UTC);
        let export = export_png(&scene, &ExportOptions::default(), at).unwrap();

        assert_eq!(export.file_name, "my-character-20250101-000000.png");
        assert_eq!(&export.png[..8], b"\x89PNG\r\n\x1a\n");
        assert_eq!((export.width, export.height), (400, 600));
    }
}
