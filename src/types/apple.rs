//! Apple splash-screen specs.
//!
//! One [`AppleDeviceSize`] per physical device class, grouped under
//! [`AppleSplashScreens`] with cascading padding/resize/PNG defaults.

use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::options::{PngOptions, ResizeOptions};

/// One physical device class: portrait pixel dimensions and scale factor.
///
/// The presence of `dark_resize_options` is what triggers dark-variant
/// generation for the device.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AppleDeviceSize {
    pub width: u32,
    pub height: u32,
    pub scale_factor: u32,
    #[serde(default)]
    pub padding: Option<f64>,
    #[serde(default)]
    pub png: Option<PngOptions>,
    #[serde(default)]
    pub resize_options: Option<ResizeOptions>,
    #[serde(default)]
    pub dark_resize_options: Option<ResizeOptions>,
}

impl AppleDeviceSize {
    /// Bare device dimensions, no per-device overrides.
    pub const fn new(width: u32, height: u32, scale_factor: u32) -> Self {
        Self {
            width,
            height,
            scale_factor,
            padding: None,
            png: None,
            resize_options: None,
            dark_resize_options: None,
        }
    }

    /// The inner box an image occupies on the splash canvas after padding.
    pub fn padded_box(&self, padding: f64) -> (u32, u32) {
        let scale = |dimension: u32| {
            ((f64::from(dimension) * (1.0 - padding)).round() as u32).max(1)
        };
        (scale(self.width), scale(self.height))
    }
}

/// Naming function for splash-screen outputs.
///
/// The dark flag is three-valued: `None` means the device has no dark
/// variant at all, `Some(false)`/`Some(true)` are the light/dark halves of
/// a device that has both.
pub type SplashScreenNameFn = fn(landscape: bool, size: &AppleDeviceSize, dark: Option<bool>) -> String;

/// Resolver for an alternative dark-mode source image, keyed by the
/// original image name. Returning `Ok(None)` falls back to the light source.
pub type DarkImageResolverFn = fn(original_name: &str) -> Result<Option<Vec<u8>>>;

/// Default splash-screen names:
/// `apple-splash-{portrait|landscape}-{dark-|light-|}{w}x{h}.png`.
///
/// The appearance segment is only present when the dark flag is a concrete
/// boolean, i.e. when the device generates both appearances.
pub fn default_splash_screen_name(
    landscape: bool,
    size: &AppleDeviceSize,
    dark: Option<bool>,
) -> String {
    let orientation = if landscape { "landscape" } else { "portrait" };
    let appearance = match dark {
        Some(true) => "dark-",
        Some(false) => "light-",
        None => "",
    };
    format!(
        "apple-splash-{}-{}{}x{}.png",
        orientation, appearance, size.width, size.height
    )
}

/// Options for the generated `apple-touch-startup-image` head links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkMediaOptions {
    /// Emit the splash links from the CLI build output.
    pub log: bool,
    /// Prepend the `screen` token to the media query.
    pub add_media_screen: bool,
    /// Base path for link hrefs; falls back to the request base path.
    pub base_path: Option<String>,
    /// Close the link tag XHTML-style (` />`).
    pub xhtml: bool,
}

impl Default for LinkMediaOptions {
    fn default() -> Self {
        Self {
            log: true,
            add_media_screen: true,
            base_path: None,
            xhtml: false,
        }
    }
}

/// Splash-screen group spec: device list plus cascading defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppleSplashScreens {
    pub sizes: Vec<AppleDeviceSize>,
    pub padding: Option<f64>,
    pub resize_options: Option<ResizeOptions>,
    pub dark_resize_options: Option<ResizeOptions>,
    pub link_media_options: LinkMediaOptions,
    pub png: Option<PngOptions>,
    #[serde(skip)]
    pub name: Option<SplashScreenNameFn>,
    #[serde(skip)]
    pub dark_image_resolver: Option<DarkImageResolverFn>,
}
