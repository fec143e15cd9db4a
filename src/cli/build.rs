//! Build command implementation.
//!
//! Resolves instructions per image and writes the assets next to each
//! source image. One failing image does not abort its siblings; all
//! failures are reported and the first one is returned at the end.

use clap::Args;

use crate::error::{AssetsError, Result};
use crate::generate::{generate_assets, GenerateEvent, GenerateStats};
use crate::instructions::resolve_instructions;
use crate::output::{display_path, plural, LogLevel, Printer};

use super::{ResolveArgs, ResolvedCli};

/// Generate PWA assets from source images
#[derive(Args, Debug)]
pub struct BuildArgs {
    #[command(flatten)]
    pub resolve: ResolveArgs,

    /// Keep assets that already exist instead of regenerating them
    #[arg(long)]
    pub no_override: bool,

    /// Suppress status output
    #[arg(long, short)]
    pub silent: bool,
}

pub fn run(args: BuildArgs) -> Result<()> {
    let cli = args.resolve.resolve()?;

    let log_level = if args.silent {
        LogLevel::Silent
    } else {
        cli.config.log_level
    };
    let printer = Printer::with_level(log_level);

    if cli.images.is_empty() {
        return Err(AssetsError::MissingImages {
            help: Some(
                "Pass image paths or set `images` in pwa-assets.config.yaml".to_string(),
            ),
        });
    }

    let override_assets = !args.no_override && cli.config.effective_override_assets();

    let mut totals = GenerateStats::default();
    let mut first_error: Option<AssetsError> = None;

    for image in &cli.images {
        printer.status("Generating", image);
        match process_image(&cli, image, override_assets, &printer) {
            Ok(stats) => totals.merge(stats),
            Err(error) => {
                printer.error("Failed", &format!("{}: {}", image, error));
                if first_error.is_none() {
                    first_error = Some(error);
                }
            }
        }
    }

    printer.success(
        "Finished",
        &format!(
            "{} written, {} skipped",
            plural(totals.written, "asset", "assets"),
            plural(totals.skipped, "asset", "assets"),
        ),
    );

    match first_error {
        Some(error) => Err(error),
        None => Ok(()),
    }
}

fn process_image(
    cli: &ResolvedCli,
    image: &str,
    override_assets: bool,
    printer: &Printer,
) -> Result<GenerateStats> {
    let request = cli.request_for(image);
    let favicon_preset = cli.config.head_link_options.preset;

    // The splash-screen link log flag lives on the preset.
    let (preset, _) = cli.preset.resolve(favicon_preset)?;
    let log_splash_links = preset
        .apple_splash_screens
        .as_ref()
        .map(|splash| splash.link_media_options.log)
        .unwrap_or(true);

    let instructions = resolve_instructions(request)?;
    let folder = cli.folder_for(image);

    let stats = generate_assets(&instructions, override_assets, &folder, |event| match event {
        GenerateEvent::Written { kind, path } => {
            printer.success("Generated", &format!("{} {}", kind, display_path(path)));
        }
        GenerateEvent::Skipped { kind, path } => {
            printer.skip("Skipping", &format!("{} {}", kind, display_path(path)));
        }
        GenerateEvent::Failed { error } => {
            printer.error("Failed", &format!("{}", error));
        }
    })?;

    if printer.level() == LogLevel::Info {
        let splash_urls: Vec<&String> = instructions.apple_splash_screen.keys().collect();
        for (url, link) in instructions
            .favicon
            .iter()
            .chain(instructions.apple.iter())
            .chain(instructions.apple_splash_screen.iter())
            .filter_map(|(url, icon)| icon.link.as_ref().map(|link| (url, link)))
        {
            if !log_splash_links && splash_urls.contains(&url) {
                continue;
            }
            println!("{}", link);
        }
    }

    Ok(stats)
}
