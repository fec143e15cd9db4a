//! Apple splash-screen expansion.
//!
//! Turns a splash-screen group spec into the flat list of
//! orientation/appearance variants, then into per-variant instructions.
//! Group-level defaults cascade onto copies of the device entries; the
//! caller's spec is never mutated.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::Result;
use crate::html::{apple_splash_screen_link, AppleSplashScreenLinkOptions};
use crate::instructions::{HtmlLinkOptions, IconAsset, ImageAssetsRequest, InstructionSet, RenderFn};
use crate::render::{render_asset, RenderLayout};
use crate::types::{
    default_splash_screen_name, png_options_with_defaults, resize_options_with_defaults,
    AppleDeviceSize, AppleSplashScreens, Colour, DarkImageResolverFn, PngOptions, ResizeOptions,
    SplashScreenNameFn,
};

/// One concrete orientation/appearance rendering of a device.
///
/// For landscape variants, `size` has width/height swapped and its resize
/// options carry the swapped explicit resize target. `dark` is `None` for
/// devices without a dark variant, `Some(false)`/`Some(true)` for the two
/// halves of a dark-capable device.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplashScreenVariant {
    pub size: AppleDeviceSize,
    pub landscape: bool,
    pub dark: Option<bool>,
    pub resize_options: Option<ResizeOptions>,
    pub padding: f64,
    pub png: PngOptions,
}

/// Link-media options with the base path settled.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLinkMediaOptions {
    pub log: bool,
    pub add_media_screen: bool,
    pub base_path: String,
    pub xhtml: bool,
}

/// A splash-screen group with all defaults applied.
pub struct ResolvedAppleSplashScreens {
    pub sizes: Vec<AppleDeviceSize>,
    pub padding: f64,
    pub link_media_options: ResolvedLinkMediaOptions,
    pub name: SplashScreenNameFn,
    pub png: PngOptions,
    pub dark_image_resolver: Option<DarkImageResolverFn>,
}

/// Apply group-level defaults onto copies of the device entries.
///
/// Devices missing `padding`/`png`/`resize_options` inherit the group
/// value; `dark_resize_options` is inherited only when the group declares
/// one, so group-level dark options turn every device dark-capable.
pub fn resolve_apple_splash_screens(
    config: &AppleSplashScreens,
    request_base_path: &str,
) -> ResolvedAppleSplashScreens {
    let padding = config.padding.unwrap_or(0.3);
    let resize_options =
        resize_options_with_defaults(false, config.resize_options.unwrap_or_default());
    let dark_resize_options = config
        .dark_resize_options
        .map(|options| resize_options_with_defaults(true, options));
    let png = png_options_with_defaults(config.png.unwrap_or_default());

    let sizes = config
        .sizes
        .iter()
        .map(|device| {
            let mut device = *device;
            if device.padding.is_none() {
                device.padding = Some(padding);
            }
            if device.png.is_none() {
                device.png = Some(png);
            }
            if device.resize_options.is_none() {
                device.resize_options = Some(resize_options);
            }
            if device.dark_resize_options.is_none() {
                device.dark_resize_options = dark_resize_options;
            }
            device
        })
        .collect();

    let link = &config.link_media_options;
    ResolvedAppleSplashScreens {
        sizes,
        padding,
        link_media_options: ResolvedLinkMediaOptions {
            log: link.log,
            add_media_screen: link.add_media_screen,
            base_path: link
                .base_path
                .clone()
                .unwrap_or_else(|| request_base_path.to_string()),
            xhtml: link.xhtml,
        },
        name: config.name.unwrap_or(default_splash_screen_name),
        png,
        dark_image_resolver: config.dark_image_resolver,
    }
}

/// Expand the device list into concrete variants.
///
/// Duplicate physical dimensions are suppressed first-wins via a
/// width→height map: a later device whose (width, height) pair was already
/// emitted produces nothing, even at a different scale factor. Each
/// surviving device yields portrait+landscape, plus dark portrait+landscape
/// when it has dark resize options.
pub fn expand_splash_screen_variants(
    screens: &ResolvedAppleSplashScreens,
) -> Vec<SplashScreenVariant> {
    let mut seen: HashMap<u32, u32> = HashMap::new();
    let mut variants = Vec::new();

    for device in &screens.sizes {
        if seen.get(&device.width) == Some(&device.height) {
            continue;
        }
        seen.insert(device.width, device.height);

        let padding = device.padding.unwrap_or(0.3);
        let png = device.png.unwrap_or(screens.png);
        let dark = device.dark_resize_options.is_some().then_some(false);

        // The display size and the explicit resize target rotate together.
        let landscape_size = AppleDeviceSize {
            width: device.height,
            height: device.width,
            resize_options: Some(device.resize_options.unwrap_or_default().swapped()),
            ..*device
        };

        variants.push(SplashScreenVariant {
            size: *device,
            landscape: false,
            dark,
            resize_options: device.resize_options,
            padding,
            png,
        });
        variants.push(SplashScreenVariant {
            size: landscape_size,
            landscape: true,
            dark,
            resize_options: landscape_size.resize_options,
            padding,
            png,
        });

        if let Some(dark_resize_options) = device.dark_resize_options {
            let landscape_dark_resize_options = dark_resize_options.swapped();
            let landscape_dark_size = AppleDeviceSize {
                width: device.height,
                height: device.width,
                resize_options: Some(landscape_dark_resize_options),
                dark_resize_options: None,
                ..*device
            };

            variants.push(SplashScreenVariant {
                size: *device,
                landscape: false,
                dark: Some(true),
                resize_options: Some(dark_resize_options),
                padding,
                png,
            });
            variants.push(SplashScreenVariant {
                size: landscape_dark_size,
                landscape: true,
                dark: Some(true),
                resize_options: Some(landscape_dark_resize_options),
                padding,
                png,
            });
        }
    }

    variants
}

/// Expand the splash-screen spec into instructions.
///
/// An absent spec or an empty device list produces no output. The dark
/// source image, when a resolver is configured, is loaded once here and
/// shared read-only across all dark thunks.
pub(crate) fn resolve_apple_splash_screen_instructions(
    image: &Arc<Vec<u8>>,
    request: &ImageAssetsRequest,
    instructions: &mut InstructionSet,
    config: Option<&AppleSplashScreens>,
) -> Result<()> {
    let Some(config) = config else {
        return Ok(());
    };
    if config.sizes.is_empty() {
        return Ok(());
    }

    let screens = resolve_apple_splash_screens(config, &request.base_path);
    let variants = expand_splash_screen_variants(&screens);

    let needs_dark_source = variants.iter().any(|variant| variant.dark == Some(true));
    let dark_image: Option<Arc<Vec<u8>>> = match (
        needs_dark_source,
        screens.dark_image_resolver,
        request.original_name.as_deref(),
    ) {
        (true, Some(resolver), Some(original_name)) => resolver(original_name)?.map(Arc::new),
        _ => None,
    };

    let link_options = HtmlLinkOptions {
        xhtml: screens.link_media_options.xhtml,
        include_id: request.html_links.include_id,
    };

    for variant in variants {
        let name = (screens.name)(variant.landscape, &variant.size, variant.dark);
        let url = format!("{}{}", request.base_path, name);

        let link = apple_splash_screen_link(&AppleSplashScreenLinkOptions {
            size: &variant.size,
            landscape: variant.landscape,
            add_media_screen: screens.link_media_options.add_media_screen,
            name: screens.name,
            base_path: &screens.link_media_options.base_path,
            dark: variant.dark,
        });

        let source = if variant.dark == Some(true) {
            dark_image.as_ref().map(Arc::clone).unwrap_or_else(|| Arc::clone(image))
        } else {
            Arc::clone(image)
        };
        let resize_options = variant.resize_options.unwrap_or_default();
        let background = resize_options.background.unwrap_or(if variant.dark == Some(true) {
            Colour::BLACK
        } else {
            Colour::WHITE
        });
        let (inner_width, inner_height) = variant.size.padded_box(variant.padding);
        let layout = RenderLayout {
            canvas_width: variant.size.width,
            canvas_height: variant.size.height,
            inner_width,
            inner_height,
        };
        let png = variant.png;
        let buffer: RenderFn =
            Box::new(move || render_asset(&source, layout, resize_options, background, png));

        instructions.apple_splash_screen.insert(
            url.clone(),
            IconAsset::new(
                name,
                url,
                variant.size.width,
                variant.size.height,
                "image/png",
                buffer,
            )
            .with_link(&link, link_options),
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Fit;

    fn resolved(config: &AppleSplashScreens) -> ResolvedAppleSplashScreens {
        resolve_apple_splash_screens(config, "/")
    }

    fn device(width: u32, height: u32, scale_factor: u32) -> AppleDeviceSize {
        AppleDeviceSize::new(width, height, scale_factor)
    }

    #[test]
    fn test_one_device_yields_portrait_and_landscape() {
        let config = AppleSplashScreens {
            sizes: vec![device(320, 480, 1)],
            ..Default::default()
        };
        let variants = expand_splash_screen_variants(&resolved(&config));

        assert_eq!(variants.len(), 2);
        assert!(!variants[0].landscape);
        assert!(variants[1].landscape);
        assert_eq!(variants[0].dark, None);
        assert_eq!(variants[1].dark, None);
        // Landscape swaps the display size.
        assert_eq!((variants[1].size.width, variants[1].size.height), (480, 320));
    }

    #[test]
    fn test_dark_options_double_the_variants() {
        let config = AppleSplashScreens {
            sizes: vec![device(320, 480, 1)],
            dark_resize_options: Some(ResizeOptions::default()),
            ..Default::default()
        };
        let variants = expand_splash_screen_variants(&resolved(&config));

        assert_eq!(variants.len(), 4);
        let flags: Vec<(bool, Option<bool>)> = variants
            .iter()
            .map(|variant| (variant.landscape, variant.dark))
            .collect();
        assert_eq!(
            flags,
            vec![
                (false, Some(false)),
                (true, Some(false)),
                (false, Some(true)),
                (true, Some(true)),
            ]
        );
        // Dark variants render with the dark resize options' background.
        assert_eq!(
            variants[2].resize_options.unwrap().background,
            Some(Colour::BLACK)
        );
    }

    #[test]
    fn test_duplicate_dimensions_are_first_wins() {
        // Same physical dimensions at different scale factors: only the
        // first device produces output.
        let config = AppleSplashScreens {
            sizes: vec![device(1536, 2048, 2), device(1536, 2048, 3)],
            ..Default::default()
        };
        let variants = expand_splash_screen_variants(&resolved(&config));

        assert_eq!(variants.len(), 2);
        assert_eq!(variants[0].size.scale_factor, 2);
    }

    #[test]
    fn test_same_width_different_height_is_kept() {
        let config = AppleSplashScreens {
            sizes: vec![device(800, 600, 2), device(800, 601, 2)],
            ..Default::default()
        };
        let variants = expand_splash_screen_variants(&resolved(&config));
        assert_eq!(variants.len(), 4);
    }

    #[test]
    fn test_group_defaults_cascade_onto_devices() {
        let config = AppleSplashScreens {
            sizes: vec![device(320, 480, 1)],
            padding: Some(0.2),
            png: Some(PngOptions {
                compression_level: Some(3),
                quality: None,
            }),
            ..Default::default()
        };
        let screens = resolved(&config);

        let device = &screens.sizes[0];
        assert_eq!(device.padding, Some(0.2));
        assert_eq!(device.png.unwrap().compression_level, Some(3));
        // Quality falls back to the global default through the group layer.
        assert_eq!(device.png.unwrap().quality, Some(60));
        assert_eq!(
            device.resize_options.unwrap().background,
            Some(Colour::WHITE)
        );
    }

    #[test]
    fn test_device_overrides_survive_the_cascade() {
        let config = AppleSplashScreens {
            sizes: vec![AppleDeviceSize {
                padding: Some(0.1),
                ..device(320, 480, 1)
            }],
            padding: Some(0.4),
            ..Default::default()
        };
        let screens = resolved(&config);
        assert_eq!(screens.sizes[0].padding, Some(0.1));

        let variants = expand_splash_screen_variants(&screens);
        assert_eq!(variants[0].padding, 0.1);
    }

    #[test]
    fn test_caller_spec_is_not_mutated() {
        let config = AppleSplashScreens {
            sizes: vec![device(320, 480, 1)],
            ..Default::default()
        };
        let _ = resolved(&config);
        assert_eq!(config.sizes[0].padding, None);
        assert_eq!(config.sizes[0].resize_options, None);
    }

    #[test]
    fn test_landscape_swaps_explicit_resize_target() {
        let config = AppleSplashScreens {
            sizes: vec![AppleDeviceSize {
                resize_options: Some(ResizeOptions {
                    fit: Some(Fit::Contain),
                    width: Some(300),
                    height: Some(200),
                    ..Default::default()
                }),
                ..device(320, 480, 1)
            }],
            ..Default::default()
        };
        let variants = expand_splash_screen_variants(&resolved(&config));

        let landscape = &variants[1];
        assert_eq!(landscape.resize_options.unwrap().width, Some(200));
        assert_eq!(landscape.resize_options.unwrap().height, Some(300));
    }

    #[test]
    fn test_link_media_base_path_falls_back_to_request() {
        let config = AppleSplashScreens {
            sizes: vec![device(320, 480, 1)],
            ..Default::default()
        };
        let screens = resolve_apple_splash_screens(&config, "/app/");
        assert_eq!(screens.link_media_options.base_path, "/app/");
    }
}
