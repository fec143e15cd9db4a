//! Html command implementation.
//!
//! Resolves instructions without writing any assets and prints the head
//! links to stdout, one per line.

use clap::Args;

use crate::error::{AssetsError, Result};
use crate::instructions::resolve_instructions;
use crate::markup::generate_html_markup;

use super::ResolveArgs;

/// Print the HTML head links for the instructed assets
#[derive(Args, Debug)]
pub struct HtmlArgs {
    #[command(flatten)]
    pub resolve: ResolveArgs,
}

pub fn run(args: HtmlArgs) -> Result<()> {
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
        for link in generate_html_markup(&instructions) {
            println!("{}", link);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100"><rect width="100" height="100" fill="#336699"/></svg>"##;

    #[test]
    fn test_html_does_not_write_assets() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("favicon.svg"), SVG).unwrap();

        let args = HtmlArgs {
            resolve: ResolveArgs {
                images: vec!["favicon.svg".to_string()],
                root: Some(dir.path().to_path_buf()),
                config: None,
                preset: Some("minimal-2023".to_string()),
            },
        };
        run(args).unwrap();

        assert!(!dir.path().join("favicon.ico").exists());
        assert!(!dir.path().join("pwa-64x64.png").exists());
    }

    #[test]
    fn test_html_without_images_errors() {
        let dir = tempdir().unwrap();
        let args = HtmlArgs {
            resolve: ResolveArgs {
                images: vec![],
                root: Some(dir.path().to_path_buf()),
                config: None,
                preset: None,
            },
        };
        assert!(matches!(run(args), Err(AssetsError::MissingImages { .. })));
    }
}
