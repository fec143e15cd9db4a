//! Minimal preset, 2023 favicon conventions.

use crate::types::{AssetSize, AssetSpec, Favicon};

use super::Preset;

/// The bare minimum asset set, with a 48px favicon per the 2023
/// favicon recommendations.
pub fn minimal_2023_preset() -> Preset {
    Preset {
        transparent: AssetSpec {
            sizes: vec![
                AssetSize::Square(64),
                AssetSize::Square(192),
                AssetSize::Square(512),
            ],
            favicons: Some(vec![Favicon(AssetSize::Square(48), "favicon.ico".to_string())]),
            ..Default::default()
        },
        maskable: AssetSpec {
            sizes: vec![AssetSize::Square(512)],
            ..Default::default()
        },
        apple: AssetSpec {
            sizes: vec![AssetSize::Square(180)],
            ..Default::default()
        },
        ..Default::default()
    }
}
