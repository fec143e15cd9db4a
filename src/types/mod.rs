//! Core data model: sizes, colours, options and asset specs.

pub mod apple;
pub mod asset;
pub mod colour;
pub mod options;
pub mod size;

pub use apple::{
    default_splash_screen_name, AppleDeviceSize, AppleSplashScreens, DarkImageResolverFn,
    LinkMediaOptions, SplashScreenNameFn,
};
pub use asset::{
    default_asset_name, AssetDefaults, AssetNameFn, AssetSpec, AssetType, Favicon, ResolvedAssetSpec,
    ResolvedAssets,
};
pub use colour::Colour;
pub use options::{
    png_options_with_defaults, resize_options_with_defaults, Fit, PngOptions, ResizeOptions,
    DEFAULT_DARK_RESIZE_OPTIONS, DEFAULT_PNG_COMPRESSION_OPTIONS, DEFAULT_RESIZE_OPTIONS,
};
pub use size::{AssetSize, ResolvedSize};
