//! Source decoding, resizing and canvas compositing.
//!
//! Bitmap sources go through the `image` crate; SVG sources are rasterized
//! with resvg directly at the target size, so vector sources stay sharp at
//! every output dimension.

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use resvg::{tiny_skia, usvg};

use crate::error::{AssetsError, Result};
use crate::types::{Colour, Fit};

/// Sniff whether the bytes look like an SVG document.
pub fn is_svg_source(bytes: &[u8]) -> bool {
    let head = String::from_utf8_lossy(&bytes[..bytes.len().min(1024)]);
    let trimmed = head.trim_start();
    trimmed.starts_with("<?xml") || trimmed.starts_with("<svg") || trimmed.starts_with("<!DOCTYPE svg")
}

/// Decode the source bytes and resize into the target box.
///
/// `Contain` preserves aspect ratio inside the box (the result may be
/// smaller than the box on one axis); `Cover` fills the box exactly,
/// cropping overflow.
pub fn render_source(bytes: &[u8], width: u32, height: u32, fit: Fit) -> Result<RgbaImage> {
    if is_svg_source(bytes) {
        render_svg(bytes, width, height, fit)
    } else {
        render_bitmap(bytes, width, height, fit)
    }
}

/// Fill a canvas with the background colour and alpha-blend the layer
/// centred on it.
pub fn composite_on_canvas(
    width: u32,
    height: u32,
    background: Colour,
    layer: &RgbaImage,
) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(width, height, Rgba(background.to_rgba()));
    let x = (i64::from(width) - i64::from(layer.width())) / 2;
    let y = (i64::from(height) - i64::from(layer.height())) / 2;
    imageops::overlay(&mut canvas, layer, x, y);
    canvas
}

fn render_svg(bytes: &[u8], target_width: u32, target_height: u32, fit: Fit) -> Result<RgbaImage> {
    let tree = usvg::Tree::from_data(bytes, &usvg::Options::default()).map_err(|e| {
        AssetsError::Render {
            message: format!("Failed to parse SVG: {}", e),
        }
    })?;

    let size = tree.size();
    let (source_width, source_height) = (size.width(), size.height());
    if source_width <= 0.0 || source_height <= 0.0 {
        return Err(AssetsError::Render {
            message: "SVG has no intrinsic size".to_string(),
        });
    }

    let sx = target_width as f32 / source_width;
    let sy = target_height as f32 / source_height;

    match fit {
        Fit::Contain => {
            let scale = sx.min(sy);
            let width = ((source_width * scale).round() as u32).max(1);
            let height = ((source_height * scale).round() as u32).max(1);
            let mut pixmap = new_pixmap(width, height)?;
            resvg::render(
                &tree,
                tiny_skia::Transform::from_scale(scale, scale),
                &mut pixmap.as_mut(),
            );
            Ok(pixmap_to_image(&pixmap))
        }
        Fit::Cover => {
            let scale = sx.max(sy);
            let mut pixmap = new_pixmap(target_width, target_height)?;
            let tx = (target_width as f32 - source_width * scale) / 2.0;
            let ty = (target_height as f32 - source_height * scale) / 2.0;
            let transform = tiny_skia::Transform::from_scale(scale, scale).post_translate(tx, ty);
            resvg::render(&tree, transform, &mut pixmap.as_mut());
            Ok(pixmap_to_image(&pixmap))
        }
    }
}

fn render_bitmap(bytes: &[u8], width: u32, height: u32, fit: Fit) -> Result<RgbaImage> {
    let img = image::load_from_memory(bytes).map_err(|e| AssetsError::Render {
        message: format!("Failed to decode image: {}", e),
    })?;

    let resized = match fit {
        Fit::Contain => img.resize(width, height, FilterType::Lanczos3),
        Fit::Cover => img.resize_to_fill(width, height, FilterType::Lanczos3),
    };

    Ok(resized.to_rgba8())
}

fn new_pixmap(width: u32, height: u32) -> Result<tiny_skia::Pixmap> {
    tiny_skia::Pixmap::new(width, height).ok_or_else(|| AssetsError::Render {
        message: format!("Failed to allocate pixmap {}x{}", width, height),
    })
}

fn pixmap_to_image(pixmap: &tiny_skia::Pixmap) -> RgbaImage {
    let mut image = RgbaImage::new(pixmap.width(), pixmap.height());
    for (pixel, out) in pixmap.pixels().iter().zip(image.pixels_mut()) {
        let c = pixel.demultiply();
        *out = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }
    image
}
