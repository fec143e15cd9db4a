pub mod build;
pub mod completions;
pub mod html;
pub mod init;
pub mod manifest;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::config::UserConfig;
use crate::error::Result;
use crate::instructions::{HtmlLinkOptions, ImageAssetsRequest};
use crate::presets::PresetSource;

/// pwa-assets - PWA icon and splash screen generator
#[derive(Parser, Debug)]
#[command(name = "pwa-assets")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate PWA assets from source images
    Build(build::BuildArgs),

    /// Print the HTML head links for the instructed assets
    Html(html::HtmlArgs),

    /// Print the web manifest icons entry
    Manifest(manifest::ManifestArgs),

    /// Initialize a project (generates pwa-assets.config.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Flags shared by the asset-resolving subcommands.
#[derive(Args, Debug, Clone)]
pub struct ResolveArgs {
    /// Source images to process (overrides the config file)
    pub images: Vec<String>,

    /// Project root
    #[arg(long, short)]
    pub root: Option<PathBuf>,

    /// Path to config file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Built-in preset name: minimal or minimal-2023
    #[arg(long, short)]
    pub preset: Option<String>,
}

/// Config plus the pieces resolved from CLI flags.
pub(crate) struct ResolvedCli {
    pub config: UserConfig,
    pub root: PathBuf,
    pub images: Vec<String>,
    pub preset: PresetSource,
}

impl ResolveArgs {
    /// Load the config file (explicit path or discovery) and settle the
    /// flag-vs-config precedence: flags win.
    pub(crate) fn resolve(&self) -> Result<ResolvedCli> {
        let config = match &self.config {
            Some(path) => UserConfig::load(path)?,
            None => {
                let probe_root = self
                    .root
                    .clone()
                    .unwrap_or_else(|| PathBuf::from("."));
                UserConfig::discover(&probe_root)?
                    .map(|(_, config)| config)
                    .unwrap_or_default()
            }
        };

        let root = self
            .root
            .clone()
            .or_else(|| config.root.clone())
            .unwrap_or_else(|| PathBuf::from("."));

        let images = if self.images.is_empty() {
            config.images.clone()
        } else {
            self.images.clone()
        };

        let preset = match &self.preset {
            Some(name) => PresetSource::Named(name.clone()),
            None => config.preset.clone(),
        };

        Ok(ResolvedCli {
            config,
            root,
            images,
            preset,
        })
    }
}

impl ResolvedCli {
    /// Build an instruction request for one image path.
    pub(crate) fn request_for(&self, image: &str) -> ImageAssetsRequest {
        let head = &self.config.head_link_options;
        let mut request = ImageAssetsRequest::from_file(self.root.join(image))
            .with_preset(self.preset.clone())
            .with_base_path(head.base_path.clone())
            .with_html_links(HtmlLinkOptions {
                xhtml: head.xhtml,
                include_id: head.include_id,
            });
        if let Some(favicon_preset) = head.preset {
            request = request.with_favicon_preset(favicon_preset);
        }
        request
    }

    /// The directory assets for `image` are generated into (next to the
    /// source image).
    pub(crate) fn folder_for(&self, image: &str) -> PathBuf {
        let path = self.root.join(image);
        path.parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.root.clone())
    }
}
