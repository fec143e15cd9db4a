//! User configuration (`pwa-assets.config.yaml`) loading.
//!
//! The config file carries the same options as the CLI flags plus an
//! optional inline preset. YAML and JSON are both accepted, chosen by file
//! extension.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AssetsError, Result};
use crate::html::HtmlLinkPreset;
use crate::output::LogLevel;
use crate::presets::PresetSource;

/// Config file names probed, in order, when no explicit path is given.
pub const CONFIG_FILENAMES: &[&str] = &[
    "pwa-assets.config.yaml",
    "pwa-assets.config.yml",
    "pwa-assets.config.json",
];

/// Options for the generated head links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadLinkOptions {
    /// Base path prefixed to every link href and output URL.
    pub base_path: String,
    /// Favicon link preset; built-in asset presets override this.
    pub preset: Option<HtmlLinkPreset>,
    /// Close link tags XHTML-style.
    pub xhtml: bool,
    /// Emit id attributes on serialized links.
    pub include_id: bool,
}

impl Default for HeadLinkOptions {
    fn default() -> Self {
        Self {
            base_path: "/".to_string(),
            preset: None,
            xhtml: false,
            include_id: false,
        }
    }
}

/// User configuration loaded from a config file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    /// Project root; image paths resolve relative to it.
    pub root: Option<PathBuf>,
    /// Source images to generate assets for.
    pub images: Vec<String>,
    /// Built-in preset name or inline preset object.
    pub preset: PresetSource,
    /// Overwrite already-generated assets.
    pub override_assets: Option<bool>,
    pub log_level: LogLevel,
    pub head_link_options: HeadLinkOptions,
}

impl UserConfig {
    /// Load configuration from a file, parsed by extension.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| AssetsError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        let json = path.extension().is_some_and(|ext| ext == "json");
        Self::parse(&content, json)
    }

    /// Parse configuration from a YAML or JSON string.
    pub fn parse(content: &str, json: bool) -> Result<Self> {
        if json {
            serde_json::from_str(content).map_err(|e| AssetsError::Parse {
                message: format!("Invalid config: {}", e),
                help: Some("Check pwa-assets.config.json syntax".to_string()),
            })
        } else {
            serde_yaml::from_str(content).map_err(|e| AssetsError::Parse {
                message: format!("Invalid config: {}", e),
                help: Some("Check pwa-assets.config.yaml syntax".to_string()),
            })
        }
    }

    /// Probe `root` for a config file; absent files are not an error.
    pub fn discover(root: &Path) -> Result<Option<(PathBuf, Self)>> {
        for filename in CONFIG_FILENAMES {
            let path = root.join(filename);
            if path.exists() {
                let config = Self::load(&path)?;
                return Ok(Some((path, config)));
            }
        }
        Ok(None)
    }

    /// Effective override behaviour, defaulting to true.
    pub fn effective_override_assets(&self) -> bool {
        self.override_assets.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::Preset;
    use tempfile::tempdir;

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config = UserConfig::parse("{}", false).unwrap();
        assert_eq!(config.preset, PresetSource::Named("minimal".to_string()));
        assert!(config.effective_override_assets());
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.head_link_options.base_path, "/");
    }

    #[test]
    fn test_parse_full_yaml_config() {
        let yaml = r#"
images:
  - public/favicon.svg
preset: minimal-2023
override_assets: false
log_level: silent
head_link_options:
  base_path: /app/
  preset: "2023"
  xhtml: true
"#;
        let config = UserConfig::parse(yaml, false).unwrap();
        assert_eq!(config.images, vec!["public/favicon.svg"]);
        assert_eq!(config.preset, PresetSource::Named("minimal-2023".to_string()));
        assert!(!config.effective_override_assets());
        assert_eq!(config.log_level, LogLevel::Silent);
        assert_eq!(config.head_link_options.base_path, "/app/");
        assert_eq!(config.head_link_options.preset, Some(HtmlLinkPreset::V2023));
        assert!(config.head_link_options.xhtml);
    }

    #[test]
    fn test_parse_inline_preset() {
        let yaml = r#"
images: [logo.svg]
preset:
  transparent:
    sizes: [64, 192]
    favicons:
      - [48, favicon.ico]
  maskable:
    sizes: [512]
  apple:
    sizes: [180]
"#;
        let config = UserConfig::parse(yaml, false).unwrap();
        match config.preset {
            PresetSource::Inline(preset) => {
                assert_eq!(preset.transparent.sizes.len(), 2);
                assert_eq!(preset.maskable.sizes.len(), 1);
            }
            PresetSource::Named(_) => panic!("expected inline preset"),
        }
    }

    #[test]
    fn test_parse_json_config() {
        let json = r#"{ "images": ["logo.svg"], "preset": "minimal-2023" }"#;
        let config = UserConfig::parse(json, true).unwrap();
        assert_eq!(config.images, vec!["logo.svg"]);
    }

    #[test]
    fn test_parse_invalid_config_errors() {
        assert!(UserConfig::parse("images: {not: [valid", false).is_err());
    }

    #[test]
    fn test_discover_finds_yaml_first() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("pwa-assets.config.yaml"),
            "images: [a.svg]",
        )
        .unwrap();
        std::fs::write(dir.path().join("pwa-assets.config.json"), "{}").unwrap();

        let (path, config) = UserConfig::discover(dir.path()).unwrap().unwrap();
        assert!(path.ends_with("pwa-assets.config.yaml"));
        assert_eq!(config.images, vec!["a.svg"]);
    }

    #[test]
    fn test_discover_without_config() {
        let dir = tempdir().unwrap();
        assert!(UserConfig::discover(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_config_round_trips_through_yaml() {
        let config = UserConfig {
            images: vec!["logo.svg".to_string()],
            preset: PresetSource::Inline(Preset::default()),
            ..Default::default()
        };
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed = UserConfig::parse(&yaml, false).unwrap();
        assert_eq!(parsed.images, config.images);
    }
}
