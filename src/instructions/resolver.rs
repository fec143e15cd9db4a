//! Top-level instruction resolution.

use std::sync::Arc;

use crate::error::Result;
use crate::html::{favicon_link, FaviconLinkOptions};
use crate::splash::resolve_apple_splash_screen_instructions;
use crate::types::{
    default_asset_name, AssetType, ResolvedAssets, DEFAULT_PNG_COMPRESSION_OPTIONS,
};

use super::icons::{resolve_masked_icons, resolve_transparent_icons};
use super::{IconAsset, ImageAssetsRequest, InstructionSet, RenderFn};

/// Resolve a request into a full [`InstructionSet`].
///
/// The source image is loaded exactly once, up front, and shared read-only
/// by every render thunk; a successful return therefore guarantees the
/// source is readable. No pixel work happens here — every `buffer` stays
/// lazy until invoked.
pub fn resolve_instructions(request: ImageAssetsRequest) -> Result<InstructionSet> {
    let (preset, html_preset) = request.preset.resolve(request.favicon_preset)?;

    let assets = ResolvedAssets {
        transparent: preset.transparent.resolve(AssetType::Transparent),
        maskable: preset.maskable.resolve(AssetType::Maskable),
        apple: preset.apple.resolve(AssetType::Apple),
        png: preset.png.unwrap_or(DEFAULT_PNG_COMPRESSION_OPTIONS),
        asset_name: preset.asset_name.unwrap_or(default_asset_name),
    };

    let mut instructions =
        InstructionSet::new(request.image_name.clone(), request.original_name.clone());

    let image = Arc::new((request.image_resolver)()?);

    resolve_transparent_icons(&request, &image, &assets, html_preset, &mut instructions);
    resolve_masked_icons(
        AssetType::Maskable,
        &request,
        &image,
        &assets,
        html_preset,
        &mut instructions,
    );
    resolve_masked_icons(
        AssetType::Apple,
        &request,
        &image,
        &assets,
        html_preset,
        &mut instructions,
    );

    if request.image_name.ends_with(".svg") {
        let name = (request.resolve_svg_name)(&request.image_name);
        let url = format!("{}{}", request.base_path, name);
        let link = favicon_link(
            html_preset,
            &FaviconLinkOptions {
                name: &name,
                size: None,
                base_path: &request.base_path,
            },
        );
        let passthrough = Arc::clone(&image);
        let buffer: RenderFn = Box::new(move || Ok(passthrough.as_ref().clone()));
        // Dimensions do not apply to the vector passthrough; 0 is the
        // "not applicable" sentinel.
        instructions.favicon.insert(
            url.clone(),
            IconAsset::new(name, url, 0, 0, "image/svg+xml", buffer)
                .with_link(&link, request.html_links),
        );
    }

    resolve_apple_splash_screen_instructions(
        &image,
        &request,
        &mut instructions,
        preset.apple_splash_screens.as_ref(),
    )?;

    Ok(instructions)
}
