//! Legacy minimal preset.

use crate::types::{AssetSize, AssetSpec, Favicon};

use super::Preset;

/// The bare minimum asset set, with a 64px favicon.
///
/// Superseded by [`minimal_2023_preset`](super::minimal_2023_preset);
/// kept for compatibility with existing setups.
pub fn minimal_preset() -> Preset {
    Preset {
        transparent: AssetSpec {
            sizes: vec![
                AssetSize::Square(64),
                AssetSize::Square(192),
                AssetSize::Square(512),
            ],
            favicons: Some(vec![Favicon(AssetSize::Square(64), "favicon.ico".to_string())]),
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
