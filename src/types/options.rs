//! Resize and PNG encoding options with layered defaulting.
//!
//! Options are sparse: every field is optional so that a spec-level value,
//! a group-level value and a global default can be layered without losing
//! track of what was actually declared. [`ResizeOptions::over`] and
//! [`PngOptions::over`] merge field-wise, nearer layer winning.

use serde::{Deserialize, Serialize};

use super::colour::Colour;

/// How a source image is fitted into its target box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fit {
    /// Preserve aspect ratio, fit entirely inside the box.
    #[default]
    Contain,
    /// Preserve aspect ratio, fill the box, cropping overflow.
    Cover,
}

/// Sparse resize options.
///
/// `width`/`height`, when set, override the padded inner box as the resize
/// target. Splash-screen expansion swaps them together with the display
/// dimensions for landscape variants.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizeOptions {
    pub fit: Option<Fit>,
    pub background: Option<Colour>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl ResizeOptions {
    /// Merge field-wise over a base layer; fields set on `self` win.
    pub fn over(self, base: ResizeOptions) -> ResizeOptions {
        ResizeOptions {
            fit: self.fit.or(base.fit),
            background: self.background.or(base.background),
            width: self.width.or(base.width),
            height: self.height.or(base.height),
        }
    }

    /// Swap the explicit resize target dimensions, if any.
    pub fn swapped(self) -> ResizeOptions {
        ResizeOptions {
            width: self.height,
            height: self.width,
            ..self
        }
    }
}

/// Default resize options for light renders: contain on white.
pub const DEFAULT_RESIZE_OPTIONS: ResizeOptions = ResizeOptions {
    fit: Some(Fit::Contain),
    background: Some(Colour::WHITE),
    width: None,
    height: None,
};

/// Default resize options for dark renders: contain on black.
pub const DEFAULT_DARK_RESIZE_OPTIONS: ResizeOptions = ResizeOptions {
    fit: Some(Fit::Contain),
    background: Some(Colour::BLACK),
    width: None,
    height: None,
};

/// Fill unset resize fields from the light or dark defaults.
pub fn resize_options_with_defaults(dark: bool, options: ResizeOptions) -> ResizeOptions {
    options.over(if dark {
        DEFAULT_DARK_RESIZE_OPTIONS
    } else {
        DEFAULT_RESIZE_OPTIONS
    })
}

/// Sparse PNG encoding options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PngOptions {
    /// zlib compression level, 0-9.
    pub compression_level: Option<u8>,
    /// Quantization quality, 0-100. Carried for configuration
    /// compatibility; the PNG encoder is lossless.
    pub quality: Option<u8>,
}

impl PngOptions {
    /// Merge field-wise over a base layer; fields set on `self` win.
    pub fn over(self, base: PngOptions) -> PngOptions {
        PngOptions {
            compression_level: self.compression_level.or(base.compression_level),
            quality: self.quality.or(base.quality),
        }
    }

    /// Effective compression level, defaulting to 9.
    pub fn effective_compression_level(self) -> u8 {
        self.compression_level.unwrap_or(9)
    }
}

/// Default PNG compression: level 9, quality 60.
pub const DEFAULT_PNG_COMPRESSION_OPTIONS: PngOptions = PngOptions {
    compression_level: Some(9),
    quality: Some(60),
};

/// Fill unset PNG fields from the global compression defaults.
pub fn png_options_with_defaults(options: PngOptions) -> PngOptions {
    options.over(DEFAULT_PNG_COMPRESSION_OPTIONS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_over_prefers_nearer_layer() {
        let specific = ResizeOptions {
            background: Some(Colour::BLACK),
            ..Default::default()
        };
        let merged = specific.over(DEFAULT_RESIZE_OPTIONS);
        assert_eq!(merged.background, Some(Colour::BLACK));
        assert_eq!(merged.fit, Some(Fit::Contain));
    }

    #[test]
    fn test_resize_defaults_light_and_dark() {
        let light = resize_options_with_defaults(false, ResizeOptions::default());
        assert_eq!(light.background, Some(Colour::WHITE));

        let dark = resize_options_with_defaults(true, ResizeOptions::default());
        assert_eq!(dark.background, Some(Colour::BLACK));
    }

    #[test]
    fn test_resize_swapped() {
        let options = ResizeOptions {
            width: Some(100),
            height: Some(50),
            ..Default::default()
        };
        let swapped = options.swapped();
        assert_eq!(swapped.width, Some(50));
        assert_eq!(swapped.height, Some(100));

        // No explicit target stays empty either way.
        assert_eq!(ResizeOptions::default().swapped(), ResizeOptions::default());
    }

    #[test]
    fn test_png_defaults() {
        let merged = png_options_with_defaults(PngOptions::default());
        assert_eq!(merged.compression_level, Some(9));
        assert_eq!(merged.quality, Some(60));

        let custom = png_options_with_defaults(PngOptions {
            quality: Some(80),
            ..Default::default()
        });
        assert_eq!(custom.compression_level, Some(9));
        assert_eq!(custom.quality, Some(80));
    }

    #[test]
    fn test_fit_parses_lowercase() {
        let fit: Fit = serde_yaml::from_str("cover").unwrap();
        assert_eq!(fit, Fit::Cover);
    }
}
