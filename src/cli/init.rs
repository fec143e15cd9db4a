//! Init command implementation.
//!
//! Generates a starter `pwa-assets.config.yaml`.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{AssetsError, Result};
use crate::output::Printer;

const CONFIG_FILENAME: &str = "pwa-assets.config.yaml";

const CONFIG_TEMPLATE: &str = "\
# pwa-assets configuration
# Source images to generate assets for; assets are written next to each image.
images:
  - public/favicon.svg

# Built-in preset (minimal, minimal-2023) or an inline preset object.
preset: minimal-2023

# Overwrite already-generated assets.
override_assets: true

head_link_options:
  base_path: /
";

/// Initialize a project (generates pwa-assets.config.yaml)
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to initialize (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing config
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs) -> Result<()> {
    let printer = Printer::new();
    let config_path = args.path.join(CONFIG_FILENAME);

    if config_path.exists() && !args.force {
        return Err(AssetsError::Io {
            path: config_path,
            message: format!("{} already exists (use --force to overwrite)", CONFIG_FILENAME),
        });
    }

    fs::write(&config_path, CONFIG_TEMPLATE).map_err(|e| AssetsError::Io {
        path: config_path.clone(),
        message: format!("Failed to write config: {}", e),
    })?;

    printer.success("Created", CONFIG_FILENAME);

    Ok(())
}
