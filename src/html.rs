//! HTML head link construction.
//!
//! Every link kind is built into one [`HtmlLink`] value; the serialized
//! `<link>` string is derived from the same fields via
//! [`HtmlLink::to_html`], so the string and structured forms cannot drift
//! apart.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AssetsError;
use crate::types::{AppleDeviceSize, AssetSize, SplashScreenNameFn};

/// Favicon link naming conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HtmlLinkPreset {
    /// Legacy convention: non-SVG favicons always get `sizes="any"`.
    #[default]
    #[serde(rename = "default")]
    Default,
    /// 2023 convention: exact pixel sizes on ICO favicons, `sizes="any"`
    /// on the SVG one.
    #[serde(rename = "2023")]
    V2023,
}

impl FromStr for HtmlLinkPreset {
    type Err = AssetsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(HtmlLinkPreset::Default),
            "2023" => Ok(HtmlLinkPreset::V2023),
            _ => Err(AssetsError::Parse {
                message: format!("Unknown head link preset: {}", s),
                help: Some("Use 'default' or '2023'".to_string()),
            }),
        }
    }
}

/// A `<link>` element for the document head.
///
/// Capability fields (`mime_type`, `sizes`, `media`) are optional and only
/// set for the link kinds that carry them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HtmlLink {
    pub id: String,
    pub rel: &'static str,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
    pub href: String,
}

impl HtmlLink {
    /// Serialize as a `<link>` tag.
    ///
    /// The id attribute is emitted only when `include_id` is set; `xhtml`
    /// closes the tag with ` />`.
    pub fn to_html(&self, include_id: bool, xhtml: bool) -> String {
        let mut html = String::from("<link");
        if include_id {
            html.push_str(&format!(" id=\"{}\"", self.id));
        }
        html.push_str(&format!(" rel=\"{}\"", self.rel));
        if let Some(mime_type) = self.mime_type {
            html.push_str(&format!(" type=\"{}\"", mime_type));
        }
        if let Some(sizes) = &self.sizes {
            html.push_str(&format!(" sizes=\"{}\"", sizes));
        }
        if let Some(media) = &self.media {
            html.push_str(&format!(" media=\"{}\"", media));
        }
        html.push_str(&format!(" href=\"{}\"", self.href));
        if xhtml {
            html.push_str(" /");
        }
        html.push('>');
        html
    }
}

impl fmt::Display for HtmlLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_html(false, false))
    }
}

/// Options for a favicon link.
#[derive(Debug, Clone)]
pub struct FaviconLinkOptions<'a> {
    pub name: &'a str,
    pub size: Option<AssetSize>,
    pub base_path: &'a str,
}

/// Build a favicon `<link rel="icon">`.
///
/// SVG favicons (by `.svg` name suffix) carry `type="image/svg+xml"` and,
/// under the 2023 preset, `sizes="any"`. Non-SVG favicons carry
/// `sizes="any"` under the legacy preset and the exact pixel size under
/// the 2023 preset.
pub fn favicon_link(preset: HtmlLinkPreset, options: &FaviconLinkOptions<'_>) -> HtmlLink {
    let href = format!("{}{}", options.base_path, options.name);

    if options.name.ends_with(".svg") {
        return HtmlLink {
            id: "fav-svg".to_string(),
            rel: "icon",
            mime_type: Some("image/svg+xml"),
            sizes: (preset == HtmlLinkPreset::V2023).then(|| "any".to_string()),
            media: None,
            href,
        };
    }

    let resolved = options.size.map(AssetSize::resolve);
    let id = match &resolved {
        Some(size) => format!("fav-{}x{}", size.width, size.height),
        None => "fav".to_string(),
    };
    let sizes = match preset {
        HtmlLinkPreset::Default => Some("any".to_string()),
        HtmlLinkPreset::V2023 => {
            resolved.map(|size| format!("{}x{}", size.width, size.height))
        }
    };

    HtmlLink {
        id,
        rel: "icon",
        mime_type: None,
        sizes,
        media: None,
        href,
    }
}

/// Options for an apple-touch-icon link.
#[derive(Debug, Clone)]
pub struct AppleTouchIconLinkOptions<'a> {
    pub name: &'a str,
    pub size: AssetSize,
    pub base_path: &'a str,
}

/// Build an `<link rel="apple-touch-icon">`.
pub fn apple_touch_icon_link(options: &AppleTouchIconLinkOptions<'_>) -> HtmlLink {
    let size = options.size.resolve();
    HtmlLink {
        id: format!("ati-{}-{}", size.width, size.height),
        rel: "apple-touch-icon",
        mime_type: None,
        sizes: None,
        media: None,
        href: format!("{}{}", options.base_path, options.name),
    }
}

/// Options for an apple-touch-startup-image link.
#[derive(Debug, Clone)]
pub struct AppleSplashScreenLinkOptions<'a> {
    pub size: &'a AppleDeviceSize,
    pub landscape: bool,
    pub add_media_screen: bool,
    pub name: SplashScreenNameFn,
    pub base_path: &'a str,
    pub dark: Option<bool>,
}

/// Build an `<link rel="apple-touch-startup-image">`.
///
/// The device width/height media values always describe portrait
/// orientation: for landscape links, which receive a dimension-swapped
/// size, the width and height are swapped back here. Token order is
/// `screen`, dark scheme, device-width, device-height, pixel ratio,
/// orientation.
pub fn apple_splash_screen_link(options: &AppleSplashScreenLinkOptions<'_>) -> HtmlLink {
    let AppleDeviceSize {
        width,
        height,
        scale_factor,
        ..
    } = *options.size;

    let device_width = css_number(f64::from(if options.landscape { height } else { width })
        / f64::from(scale_factor));
    let device_height = css_number(f64::from(if options.landscape { width } else { height })
        / f64::from(scale_factor));
    let orientation = if options.landscape { "landscape" } else { "portrait" };

    let mut tokens = vec![
        format!("(device-width: {}px)", device_width),
        format!("(device-height: {}px)", device_height),
        format!("(-webkit-device-pixel-ratio: {})", scale_factor),
        format!("(orientation: {})", orientation),
    ];

    if options.dark == Some(true) {
        tokens.insert(0, "(prefers-color-scheme: dark)".to_string());
    }

    if options.add_media_screen {
        tokens.insert(0, "screen".to_string());
    }

    let appearance = if options.dark == Some(true) { "dark" } else { "light" };

    HtmlLink {
        id: format!(
            "atsi-{}-{}-{}-{}",
            device_width, device_height, scale_factor, appearance
        ),
        rel: "apple-touch-startup-image",
        mime_type: None,
        sizes: None,
        media: Some(tokens.join(" and ")),
        href: format!(
            "{}{}",
            options.base_path,
            (options.name)(options.landscape, options.size, options.dark)
        ),
    }
}

/// Format a CSS pixel value without a trailing `.0`.
fn css_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
