//! pwa-assets - PWA icon and splash screen generator
//!
//! A library for expanding a declarative preset and a single source image
//! into the full set of PWA image assets, head link markup and manifest
//! icon entries.

pub mod cli;
pub mod config;
pub mod error;
pub mod generate;
pub mod html;
pub mod instructions;
pub mod manifest;
pub mod markup;
pub mod output;
pub mod presets;
pub mod render;
pub mod splash;
pub mod types;

pub use config::{HeadLinkOptions as ConfigHeadLinkOptions, UserConfig, CONFIG_FILENAMES};
pub use error::{AssetsError, Result};
pub use generate::{generate_assets, GenerateEvent, GenerateStats};
pub use html::{
    apple_splash_screen_link, apple_touch_icon_link, favicon_link, AppleSplashScreenLinkOptions,
    AppleTouchIconLinkOptions, FaviconLinkOptions, HtmlLink, HtmlLinkPreset,
};
pub use instructions::{
    default_resolve_svg_name, resolve_instructions, HtmlLinkOptions, IconAsset,
    ImageAssetsRequest, ImageResolverFn, InstructionSet, RenderFn, SvgNameFn,
};
pub use manifest::{generate_manifest_icons_entry, generate_manifest_icons_json, ManifestIcon, ManifestIcons};
pub use markup::{generate_html_links, generate_html_markup};
pub use output::{LogLevel, Printer};
pub use presets::{
    minimal_2023_preset, minimal_preset, AppleDevices, BuiltinPresets, Preset, PresetSource,
};
pub use splash::{
    expand_splash_screen_variants, resolve_apple_splash_screens, ResolvedAppleSplashScreens,
    ResolvedLinkMediaOptions, SplashScreenVariant,
};
pub use types::{
    default_asset_name, default_splash_screen_name, AppleDeviceSize, AppleSplashScreens,
    AssetSize, AssetSpec, AssetType, Colour, Favicon, Fit, PngOptions, ResizeOptions,
    ResolvedSize,
};
