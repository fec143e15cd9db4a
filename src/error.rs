use miette::Diagnostic;
use thiserror::Error;

/// Main error type for asset generation.
#[derive(Error, Diagnostic, Debug)]
pub enum AssetsError {
    #[error("IO error: {0}")]
    #[diagnostic(code(pwa_assets::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(pwa_assets::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(pwa_assets::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Unknown preset: {name}")]
    #[diagnostic(code(pwa_assets::preset))]
    UnknownPreset {
        name: String,
        #[help]
        help: Option<String>,
    },

    #[error("Unknown Apple device: {name}")]
    #[diagnostic(code(pwa_assets::device))]
    UnknownDevice {
        name: String,
        #[help]
        help: Option<String>,
    },

    #[error("No input images provided")]
    #[diagnostic(code(pwa_assets::images))]
    MissingImages {
        #[help]
        help: Option<String>,
    },

    #[error("Failed to read source image {path}: {message}")]
    #[diagnostic(code(pwa_assets::source))]
    SourceRead { path: String, message: String },

    #[error("Failed to write asset {path}: {message}")]
    #[diagnostic(code(pwa_assets::write))]
    AssetWrite {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Render error: {message}")]
    #[diagnostic(code(pwa_assets::render))]
    Render { message: String },
}

pub type Result<T> = std::result::Result<T, AssetsError>;
