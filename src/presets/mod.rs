//! Presets: declarative bundles of asset-type specs.
//!
//! A preset may come from the built-in registry (by name) or be supplied
//! inline. Built-in presets carry a paired HTML-link preset; inline presets
//! pick theirs at request time.

pub mod devices;
mod minimal;
mod minimal_2023;

use serde::{Deserialize, Serialize};

use crate::error::{AssetsError, Result};
use crate::html::HtmlLinkPreset;
use crate::types::{AppleSplashScreens, AssetNameFn, AssetSpec, PngOptions};

pub use devices::AppleDevices;
pub use minimal::minimal_preset;
pub use minimal_2023::minimal_2023_preset;

/// A declarative bundle of asset-type specs plus naming/compression
/// overrides and an optional splash-screen spec.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Preset {
    pub transparent: AssetSpec,
    pub maskable: AssetSpec,
    pub apple: AssetSpec,
    pub png: Option<PngOptions>,
    #[serde(skip)]
    pub asset_name: Option<AssetNameFn>,
    pub apple_splash_screens: Option<AppleSplashScreens>,
}

impl Preset {
    /// Return this preset with the given splash-screen spec attached.
    pub fn with_apple_splash_screens(mut self, splash_screens: AppleSplashScreens) -> Self {
        self.apple_splash_screens = Some(splash_screens);
        self
    }
}

/// A preset reference: a built-in name or an inline preset object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PresetSource {
    Named(String),
    Inline(Preset),
}

impl Default for PresetSource {
    fn default() -> Self {
        PresetSource::Named("minimal".to_string())
    }
}

impl PresetSource {
    /// Resolve into a concrete preset and the HTML-link preset to use.
    ///
    /// Built-in names fix the HTML-link preset to their paired value and
    /// ignore `favicon_preset`; inline presets use `favicon_preset`,
    /// defaulting to [`HtmlLinkPreset::Default`].
    pub fn resolve(
        &self,
        favicon_preset: Option<HtmlLinkPreset>,
    ) -> Result<(Preset, HtmlLinkPreset)> {
        match self {
            PresetSource::Named(name) => {
                BuiltinPresets::get(name).ok_or_else(|| AssetsError::UnknownPreset {
                    name: name.clone(),
                    help: Some("Known presets: minimal, minimal-2023".to_string()),
                })
            }
            PresetSource::Inline(preset) => Ok((
                preset.clone(),
                favicon_preset.unwrap_or(HtmlLinkPreset::Default),
            )),
        }
    }
}

impl From<Preset> for PresetSource {
    fn from(preset: Preset) -> Self {
        PresetSource::Inline(preset)
    }
}

impl From<&str> for PresetSource {
    fn from(name: &str) -> Self {
        PresetSource::Named(name.to_string())
    }
}

/// Collection of builtin presets.
pub struct BuiltinPresets;

impl BuiltinPresets {
    /// Get a builtin preset and its paired HTML-link preset by name.
    pub fn get(name: &str) -> Option<(Preset, HtmlLinkPreset)> {
        match name {
            "minimal" => Some((minimal_preset(), HtmlLinkPreset::Default)),
            "minimal-2023" => Some((minimal_2023_preset(), HtmlLinkPreset::V2023)),
            _ => None,
        }
    }

    /// Names of all builtin presets.
    pub fn names() -> &'static [&'static str] {
        &["minimal", "minimal-2023"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AssetSize;

    #[test]
    fn test_builtin_minimal_pairs_default_links() {
        let (preset, html_preset) = BuiltinPresets::get("minimal").unwrap();
        assert_eq!(html_preset, HtmlLinkPreset::Default);
        assert_eq!(
            preset.transparent.sizes,
            vec![
                AssetSize::Square(64),
                AssetSize::Square(192),
                AssetSize::Square(512)
            ]
        );
    }

    #[test]
    fn test_builtin_minimal_2023_pairs_2023_links() {
        let (preset, html_preset) = BuiltinPresets::get("minimal-2023").unwrap();
        assert_eq!(html_preset, HtmlLinkPreset::V2023);
        let favicons = preset.transparent.favicons.unwrap();
        assert_eq!(favicons[0].size(), AssetSize::Square(48));
        assert_eq!(favicons[0].name(), "favicon.ico");
    }

    #[test]
    fn test_unknown_builtin() {
        assert!(BuiltinPresets::get("android").is_none());
    }

    #[test]
    fn test_named_source_ignores_favicon_preset() {
        let source = PresetSource::from("minimal-2023");
        let (_, html_preset) = source.resolve(Some(HtmlLinkPreset::Default)).unwrap();
        assert_eq!(html_preset, HtmlLinkPreset::V2023);
    }

    #[test]
    fn test_inline_source_uses_favicon_preset() {
        let source = PresetSource::Inline(minimal_2023_preset());
        let (_, html_preset) = source.resolve(None).unwrap();
        assert_eq!(html_preset, HtmlLinkPreset::Default);

        let (_, html_preset) = source.resolve(Some(HtmlLinkPreset::V2023)).unwrap();
        assert_eq!(html_preset, HtmlLinkPreset::V2023);
    }

    #[test]
    fn test_unknown_named_source_errors() {
        let source = PresetSource::from("ios");
        let err = source.resolve(None).unwrap_err();
        assert!(matches!(err, AssetsError::UnknownPreset { .. }));
    }

    #[test]
    fn test_preset_source_parses_name_or_object() {
        let named: PresetSource = serde_yaml::from_str("minimal-2023").unwrap();
        assert_eq!(named, PresetSource::Named("minimal-2023".to_string()));

        let inline: PresetSource =
            serde_yaml::from_str("transparent:\n  sizes: [64]\n").unwrap();
        match inline {
            PresetSource::Inline(preset) => {
                assert_eq!(preset.transparent.sizes, vec![AssetSize::Square(64)]);
            }
            PresetSource::Named(_) => panic!("expected inline preset"),
        }
    }
}
