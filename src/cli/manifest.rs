//! Manifest command implementation.
//!
//! Prints the web manifest `icons` entry for the instructed assets as
//! pretty-printed JSON.

use clap::Args;

use crate::error::{AssetsError, Result};
use crate::instructions::resolve_instructions;
use crate::manifest::generate_manifest_icons_json;

use super::ResolveArgs;

/// Print the web manifest icons entry
#[derive(Args, Debug)]
pub struct ManifestArgs {
    #[command(flatten)]
    pub resolve: ResolveArgs,
}

pub fn run(args: ManifestArgs) -> Result<()> {
    let cli = args.resolve.resolve()?;

    if cli.images.is_empty() {
        return Err(AssetsError::MissingImages {
            help: Some(
                "Pass image paths or set `images` in pwa-assets.config.yaml".to_string(),
            ),
        });
    }

    for image in &cli.images {
        let instructions = resolve_instructions(cli.request_for(image))?;
        println!("{}", generate_manifest_icons_json(&instructions)?);
    }

    Ok(())
}
