//! Per-asset-type instruction builders.
//!
//! Icons and their derived favicons share the family render pipeline:
//! favicons re-run the composite at their own size and wrap the PNG in an
//! ICO container, rather than reusing the primary render.

use std::sync::Arc;

use crate::html::{
    apple_touch_icon_link, favicon_link, AppleTouchIconLinkOptions, FaviconLinkOptions,
    HtmlLinkPreset,
};
use crate::render::{encode_ico, render_asset, RenderLayout};
use crate::types::{AssetType, Colour, PngOptions, ResolvedAssetSpec, ResolvedAssets, ResolvedSize};

use super::{IconAsset, ImageAssetsRequest, InstructionSet, RenderFn};

fn icon_layout(size: &ResolvedSize, padding: f64) -> RenderLayout {
    let (inner_width, inner_height) = size.padded_box(padding);
    RenderLayout {
        canvas_width: size.width,
        canvas_height: size.height,
        inner_width,
        inner_height,
    }
}

fn render_thunk(
    image: &Arc<Vec<u8>>,
    spec: &ResolvedAssetSpec,
    size: &ResolvedSize,
    background: Colour,
    png: PngOptions,
) -> RenderFn {
    let source = Arc::clone(image);
    let layout = icon_layout(size, spec.padding);
    let resize_options = spec.resize_options;
    Box::new(move || render_asset(&source, layout, resize_options, background, png))
}

fn favicon_thunk(
    image: &Arc<Vec<u8>>,
    spec: &ResolvedAssetSpec,
    size: &ResolvedSize,
    background: Colour,
    png: PngOptions,
) -> RenderFn {
    let source = Arc::clone(image);
    let layout = icon_layout(size, spec.padding);
    let resize_options = spec.resize_options;
    let (width, height) = (size.width, size.height);
    Box::new(move || {
        let png_bytes = render_asset(&source, layout, resize_options, background, png)?;
        encode_ico(&png_bytes, width, height)
    })
}

/// Build instructions for the transparent icon family and its favicons.
///
/// Transparent icons always composite on a fully transparent canvas; the
/// spec's resize background is only used for the resize step itself.
pub(super) fn resolve_transparent_icons(
    request: &ImageAssetsRequest,
    image: &Arc<Vec<u8>>,
    assets: &ResolvedAssets,
    html_preset: HtmlLinkPreset,
    instructions: &mut InstructionSet,
) {
    let spec = &assets.transparent;

    for size in &spec.sizes {
        let name = (assets.asset_name)(AssetType::Transparent, size);
        let url = format!("{}{}", request.base_path, name);
        instructions.transparent.insert(
            url.clone(),
            IconAsset::new(
                name,
                url,
                size.width,
                size.height,
                "image/png",
                render_thunk(image, spec, size, Colour::TRANSPARENT, assets.png),
            ),
        );
    }

    resolve_favicons(
        request,
        image,
        spec,
        Colour::TRANSPARENT,
        assets,
        html_preset,
        instructions,
    );
}

/// Build instructions for a composited icon family (maskable or apple
/// touch) and its favicons. Apple touch icons get a head link.
pub(super) fn resolve_masked_icons(
    kind: AssetType,
    request: &ImageAssetsRequest,
    image: &Arc<Vec<u8>>,
    assets: &ResolvedAssets,
    html_preset: HtmlLinkPreset,
    instructions: &mut InstructionSet,
) {
    let spec = assets.get(kind);
    let background = spec.resize_options.background.unwrap_or(Colour::WHITE);

    for size in &spec.sizes {
        let name = (assets.asset_name)(kind, size);
        let url = format!("{}{}", request.base_path, name);
        let asset = IconAsset::new(
            name.clone(),
            url.clone(),
            size.width,
            size.height,
            "image/png",
            render_thunk(image, spec, size, background, assets.png),
        );

        if kind == AssetType::Apple {
            let link = apple_touch_icon_link(&AppleTouchIconLinkOptions {
                name: &name,
                size: size.original,
                base_path: &request.base_path,
            });
            instructions
                .apple
                .insert(url, asset.with_link(&link, request.html_links));
        } else {
            instructions.maskable.insert(url, asset);
        }
    }

    resolve_favicons(
        request,
        image,
        spec,
        background,
        assets,
        html_preset,
        instructions,
    );
}

fn resolve_favicons(
    request: &ImageAssetsRequest,
    image: &Arc<Vec<u8>>,
    spec: &ResolvedAssetSpec,
    background: Colour,
    assets: &ResolvedAssets,
    html_preset: HtmlLinkPreset,
    instructions: &mut InstructionSet,
) {
    for favicon in &spec.favicons {
        let size = favicon.size().resolve();
        let name = favicon.name().to_string();
        let url = format!("{}{}", request.base_path, name);

        let link = favicon_link(
            html_preset,
            &FaviconLinkOptions {
                name: &name,
                size: Some(favicon.size()),
                base_path: &request.base_path,
            },
        );

        instructions.favicon.insert(
            url.clone(),
            IconAsset::new(
                name,
                url,
                size.width,
                size.height,
                "image/x-icon",
                favicon_thunk(image, spec, &size, background, assets.png),
            )
            .with_link(&link, request.html_links),
        );
    }
}
