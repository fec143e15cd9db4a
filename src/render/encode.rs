//! PNG and ICO encoding.

use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder, RgbaImage};

use crate::error::{AssetsError, Result};
use crate::types::PngOptions;

/// Encode an RGBA image as PNG.
///
/// The configured compression level (0-9) is mapped onto the encoder's
/// fast/default/best tiers. The `quality` option is accepted for
/// configuration compatibility but the encoder is lossless.
pub fn encode_png(image: &RgbaImage, options: PngOptions) -> Result<Vec<u8>> {
    let compression = match options.effective_compression_level() {
        0..=3 => CompressionType::Fast,
        4..=6 => CompressionType::Default,
        _ => CompressionType::Best,
    };

    let mut bytes = Vec::new();
    PngEncoder::new_with_quality(&mut bytes, compression, FilterType::Adaptive)
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| AssetsError::Render {
            message: format!("Failed to encode PNG: {}", e),
        })?;

    Ok(bytes)
}

/// Encode an ICO container holding exactly one PNG frame.
pub fn encode_ico(png: &[u8], width: u32, height: u32) -> Result<Vec<u8>> {
    let frame = IcoFrame::with_encoded(png, width, height, ExtendedColorType::Rgba8).map_err(
        |e| AssetsError::Render {
            message: format!("Failed to build ICO frame: {}", e),
        },
    )?;

    let mut bytes = Vec::new();
    IcoEncoder::new(&mut bytes)
        .encode_images(&[frame])
        .map_err(|e| AssetsError::Render {
            message: format!("Failed to encode ICO: {}", e),
        })?;

    Ok(bytes)
}
