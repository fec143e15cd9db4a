//! Icon asset families and their per-type specs.
//!
//! An asset family (transparent, maskable, apple touch) bundles a size
//! list with padding and resize policy. Specs are sparse; resolving a spec
//! fills the family defaults in.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::colour::Colour;
use super::options::{Fit, PngOptions, ResizeOptions};
use super::size::{AssetSize, ResolvedSize};

/// A named family of icon renders sharing padding and background policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    /// Plain icons composited on a transparent canvas.
    Transparent,
    /// Icons padded for host-OS shape masking.
    Maskable,
    /// Apple touch icons.
    Apple,
}

impl AssetType {
    /// Get the short name for this asset type.
    pub fn name(&self) -> &'static str {
        match self {
            AssetType::Transparent => "transparent",
            AssetType::Maskable => "maskable",
            AssetType::Apple => "apple",
        }
    }

    /// Family defaults: padding and resize policy.
    pub const fn defaults(self) -> AssetDefaults {
        match self {
            AssetType::Transparent => AssetDefaults {
                padding: 0.05,
                resize_options: ResizeOptions {
                    fit: Some(Fit::Contain),
                    background: Some(Colour::TRANSPARENT),
                    width: None,
                    height: None,
                },
            },
            AssetType::Maskable | AssetType::Apple => AssetDefaults {
                padding: 0.3,
                resize_options: ResizeOptions {
                    fit: Some(Fit::Contain),
                    background: Some(Colour::WHITE),
                    width: None,
                    height: None,
                },
            },
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Per-family default padding and resize options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssetDefaults {
    pub padding: f64,
    pub resize_options: ResizeOptions,
}

/// A favicon derived from an icon size: `[size, output-name]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Favicon(pub AssetSize, pub String);

impl Favicon {
    pub fn size(&self) -> AssetSize {
        self.0
    }

    pub fn name(&self) -> &str {
        &self.1
    }
}

/// A sparse per-family spec, as declared by a preset or config file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetSpec {
    pub sizes: Vec<AssetSize>,
    /// Padding fraction in `[0, 1)`.
    pub padding: Option<f64>,
    pub resize_options: Option<ResizeOptions>,
    /// Extra ICO outputs derived from this family's render pipeline.
    pub favicons: Option<Vec<Favicon>>,
}

impl AssetSpec {
    /// Fill in family defaults and normalize the size list.
    ///
    /// A declared `resize_options` replaces the family default wholesale;
    /// unset fields fall back at render time, not here.
    pub fn resolve(&self, kind: AssetType) -> ResolvedAssetSpec {
        let defaults = kind.defaults();
        ResolvedAssetSpec {
            sizes: self.sizes.iter().map(|size| size.resolve()).collect(),
            padding: self.padding.unwrap_or(defaults.padding),
            resize_options: self.resize_options.unwrap_or(defaults.resize_options),
            favicons: self.favicons.clone().unwrap_or_default(),
        }
    }
}

/// An asset spec with family defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedAssetSpec {
    pub sizes: Vec<ResolvedSize>,
    pub padding: f64,
    pub resize_options: ResizeOptions,
    pub favicons: Vec<Favicon>,
}

/// Naming function for icon outputs.
pub type AssetNameFn = fn(AssetType, &ResolvedSize) -> String;

/// Default output names: `pwa-{w}x{h}.png`, `maskable-icon-{w}x{h}.png`,
/// `apple-touch-icon-{w}x{h}.png`.
pub fn default_asset_name(kind: AssetType, size: &ResolvedSize) -> String {
    match kind {
        AssetType::Transparent => format!("pwa-{}x{}.png", size.width, size.height),
        AssetType::Maskable => format!("maskable-icon-{}x{}.png", size.width, size.height),
        AssetType::Apple => format!("apple-touch-icon-{}x{}.png", size.width, size.height),
    }
}

/// The three asset families of a preset, resolved for one run.
#[derive(Debug, Clone)]
pub struct ResolvedAssets {
    pub transparent: ResolvedAssetSpec,
    pub maskable: ResolvedAssetSpec,
    pub apple: ResolvedAssetSpec,
    pub png: PngOptions,
    pub asset_name: AssetNameFn,
}

impl ResolvedAssets {
    pub fn get(&self, kind: AssetType) -> &ResolvedAssetSpec {
        match kind {
            AssetType::Transparent => &self.transparent,
            AssetType::Maskable => &self.maskable,
            AssetType::Apple => &self.apple,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_asset_names() {
        let size = AssetSize::Square(512).resolve();
        assert_eq!(
            default_asset_name(AssetType::Transparent, &size),
            "pwa-512x512.png"
        );
        assert_eq!(
            default_asset_name(AssetType::Maskable, &size),
            "maskable-icon-512x512.png"
        );
        assert_eq!(
            default_asset_name(AssetType::Apple, &size),
            "apple-touch-icon-512x512.png"
        );
    }

    #[test]
    fn test_resolve_applies_family_defaults() {
        let spec = AssetSpec {
            sizes: vec![AssetSize::Square(64)],
            ..Default::default()
        };

        let transparent = spec.resolve(AssetType::Transparent);
        assert_eq!(transparent.padding, 0.05);
        assert_eq!(
            transparent.resize_options.background,
            Some(Colour::TRANSPARENT)
        );

        let maskable = spec.resolve(AssetType::Maskable);
        assert_eq!(maskable.padding, 0.3);
        assert_eq!(maskable.resize_options.background, Some(Colour::WHITE));
    }

    #[test]
    fn test_resolve_spec_overrides_replace_defaults() {
        let spec = AssetSpec {
            sizes: vec![AssetSize::Square(64)],
            padding: Some(0.1),
            // Declared without a background: the default background is
            // replaced wholesale, not merged back in.
            resize_options: Some(ResizeOptions {
                fit: Some(Fit::Cover),
                ..Default::default()
            }),
            favicons: None,
        };

        let resolved = spec.resolve(AssetType::Apple);
        assert_eq!(resolved.padding, 0.1);
        assert_eq!(resolved.resize_options.fit, Some(Fit::Cover));
        assert_eq!(resolved.resize_options.background, None);
    }

    #[test]
    fn test_favicon_spec_parses_as_pair() {
        let favicon: Favicon = serde_yaml::from_str("[48, favicon.ico]").unwrap();
        assert_eq!(favicon.size(), AssetSize::Square(48));
        assert_eq!(favicon.name(), "favicon.ico");
    }
}
