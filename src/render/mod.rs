//! Pixel rendering: decode, resize, composite and encode.
//!
//! This is the collaborator boundary for instruction thunks: everything
//! here is pure bytes-in/bytes-out with no shared state, so render calls
//! are safe to run in any order or concurrently.

pub mod encode;
pub mod raster;

pub use encode::{encode_ico, encode_png};
pub use raster::{composite_on_canvas, is_svg_source, render_source};

use crate::error::Result;
use crate::types::{Colour, PngOptions, ResizeOptions};

/// Canvas and inner-box dimensions for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderLayout {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub inner_width: u32,
    pub inner_height: u32,
}

/// Render one asset to PNG bytes: resize the source into the inner box,
/// composite it centred on a canvas of the full size, encode.
///
/// Explicit `width`/`height` on the resize options override the inner box
/// as the resize target.
pub fn render_asset(
    source: &[u8],
    layout: RenderLayout,
    resize_options: ResizeOptions,
    background: Colour,
    png: PngOptions,
) -> Result<Vec<u8>> {
    let width = resize_options.width.unwrap_or(layout.inner_width);
    let height = resize_options.height.unwrap_or(layout.inner_height);
    let layer = raster::render_source(source, width, height, resize_options.fit.unwrap_or_default())?;
    let canvas = raster::composite_on_canvas(
        layout.canvas_width,
        layout.canvas_height,
        background,
        &layer,
    );
    encode::encode_png(&canvas, png)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Fit;

    const SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100"><rect width="100" height="100" fill="#336699"/></svg>"##;

    #[test]
    fn test_render_asset_pads_and_composites() {
        let layout = RenderLayout {
            canvas_width: 64,
            canvas_height: 64,
            inner_width: 44,
            inner_height: 44,
        };
        let bytes = render_asset(
            SVG.as_bytes(),
            layout,
            ResizeOptions::default(),
            Colour::WHITE,
            PngOptions::default(),
        )
        .unwrap();

        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!((decoded.width(), decoded.height()), (64, 64));
        // Padding ring is background, centre is the source fill.
        assert_eq!(decoded.get_pixel(0, 0).0, [255, 255, 255, 255]);
        assert_eq!(decoded.get_pixel(32, 32).0, [0x33, 0x66, 0x99, 255]);
    }

    #[test]
    fn test_render_asset_explicit_resize_target_wins() {
        let layout = RenderLayout {
            canvas_width: 64,
            canvas_height: 64,
            inner_width: 44,
            inner_height: 44,
        };
        let bytes = render_asset(
            SVG.as_bytes(),
            layout,
            ResizeOptions {
                fit: Some(Fit::Contain),
                width: Some(10),
                height: Some(10),
                ..Default::default()
            },
            Colour::BLACK,
            PngOptions::default(),
        )
        .unwrap();

        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        // A 10px layer on a 64px canvas leaves (64-10)/2 = 27px of margin.
        assert_eq!(decoded.get_pixel(26, 32).0, [0, 0, 0, 255]);
        assert_eq!(decoded.get_pixel(32, 32).0, [0x33, 0x66, 0x99, 255]);
    }
}
