//! Web manifest `icons` fragment generation.

use serde::{Deserialize, Serialize};

use crate::error::{AssetsError, Result};
use crate::instructions::InstructionSet;

/// The `icons` member of a web app manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestIcons {
    pub icons: Vec<ManifestIcon>,
}

/// One manifest icon entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
}

/// Collect the manifest icons entry from an instruction set.
///
/// Transparent icons come first, then maskable icons with
/// `purpose: "maskable"`.
pub fn generate_manifest_icons_entry(instructions: &InstructionSet) -> ManifestIcons {
    let mut icons = Vec::new();

    for icon in instructions.transparent.values() {
        icons.push(ManifestIcon {
            src: icon.url.clone(),
            sizes: format!("{}x{}", icon.width, icon.height),
            mime_type: icon.mime_type.to_string(),
            purpose: None,
        });
    }
    for icon in instructions.maskable.values() {
        icons.push(ManifestIcon {
            src: icon.url.clone(),
            sizes: format!("{}x{}", icon.width, icon.height),
            mime_type: icon.mime_type.to_string(),
            purpose: Some("maskable".to_string()),
        });
    }

    ManifestIcons { icons }
}

/// The manifest icons entry as pretty-printed JSON.
pub fn generate_manifest_icons_json(instructions: &InstructionSet) -> Result<String> {
    serde_json::to_string_pretty(&generate_manifest_icons_entry(instructions)).map_err(|e| {
        AssetsError::Render {
            message: format!("Failed to serialize manifest icons: {}", e),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instructions::{resolve_instructions, ImageAssetsRequest, ImageResolverFn};
    use crate::presets::Preset;
    use crate::types::{AssetSize, AssetSpec};

    fn sample_instructions() -> InstructionSet {
        let preset = Preset {
            transparent: AssetSpec {
                sizes: vec![AssetSize::Square(192)],
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
        };
        let resolver: ImageResolverFn = Box::new(|| Ok(vec![]));
        resolve_instructions(ImageAssetsRequest::new("logo.png", resolver).with_preset(preset))
            .unwrap()
    }

    #[test]
    fn test_manifest_entry_marks_maskable_purpose() {
        let icons = generate_manifest_icons_entry(&sample_instructions());

        assert_eq!(
            icons,
            ManifestIcons {
                icons: vec![
                    ManifestIcon {
                        src: "/pwa-192x192.png".to_string(),
                        sizes: "192x192".to_string(),
                        mime_type: "image/png".to_string(),
                        purpose: None,
                    },
                    ManifestIcon {
                        src: "/maskable-icon-512x512.png".to_string(),
                        sizes: "512x512".to_string(),
                        mime_type: "image/png".to_string(),
                        purpose: Some("maskable".to_string()),
                    },
                ]
            }
        );
    }

    #[test]
    fn test_manifest_json_shape() {
        let json = generate_manifest_icons_json(&sample_instructions()).unwrap();
        insta::assert_snapshot!(json, @r###"
        {
          "icons": [
            {
              "src": "/pwa-192x192.png",
              "sizes": "192x192",
              "type": "image/png"
            },
            {
              "src": "/maskable-icon-512x512.png",
              "sizes": "512x512",
              "type": "image/png",
              "purpose": "maskable"
            }
          ]
        }
        "###);
    }
}
