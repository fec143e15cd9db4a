use clap::Parser;
use miette::Result;
use pwa_assets::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build(args) => pwa_assets::cli::build::run(args)?,
        Commands::Html(args) => pwa_assets::cli::html::run(args)?,
        Commands::Manifest(args) => pwa_assets::cli::manifest::run(args)?,
        Commands::Init(args) => pwa_assets::cli::init::run(args)?,
        Commands::Completions(args) => pwa_assets::cli::completions::run(args)?,
    }

    Ok(())
}
