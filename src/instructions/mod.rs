//! Resolved generation instructions.
//!
//! An [`InstructionSet`] binds every output URL to an [`IconAsset`]: the
//! output name, dimensions, MIME type, optional head link markup and a
//! deferred render thunk. Resolution never renders pixels; the thunks are
//! invoked later, by the asset generator or by the caller directly.

mod icons;
mod resolver;

pub use resolver::resolve_instructions;

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::ser::SerializeStruct as _;
use serde::{Serialize, Serializer};

use crate::error::{AssetsError, Result};
use crate::html::{HtmlLink, HtmlLinkPreset};
use crate::presets::PresetSource;

/// Loads the source image bytes. Invoked exactly once per resolution.
pub type ImageResolverFn = Box<dyn Fn() -> Result<Vec<u8>> + Send + Sync>;

/// A deferred render producing the final asset bytes.
///
/// Captures only immutable owned parameters and shared read-only source
/// bytes, so sibling thunks may run concurrently.
pub type RenderFn = Box<dyn Fn() -> Result<Vec<u8>> + Send + Sync>;

/// Maps the source image name to the served SVG favicon name.
pub type SvgNameFn = fn(&str) -> String;

/// Default SVG favicon name: the base file name of the source image.
pub fn default_resolve_svg_name(name: &str) -> String {
    Path::new(name)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| name.to_string())
}

/// Flags for serialized head link markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HtmlLinkOptions {
    /// Close tags XHTML-style (` />`).
    pub xhtml: bool,
    /// Emit the id attribute in serialized links.
    pub include_id: bool,
}

/// One resolution request: the source image plus preset and link options.
pub struct ImageAssetsRequest {
    pub image_resolver: ImageResolverFn,
    pub image_name: String,
    pub original_name: Option<String>,
    pub preset: PresetSource,
    /// HTML-link preset for inline presets; built-in presets bring their own.
    pub favicon_preset: Option<HtmlLinkPreset>,
    pub html_links: HtmlLinkOptions,
    /// Prefix for output URLs; plain string concatenation, the trailing
    /// slash is the caller's responsibility.
    pub base_path: String,
    pub resolve_svg_name: SvgNameFn,
}

impl ImageAssetsRequest {
    /// Build a request with default preset, base path and link options.
    pub fn new(image_name: impl Into<String>, image_resolver: ImageResolverFn) -> Self {
        Self {
            image_resolver,
            image_name: image_name.into(),
            original_name: None,
            preset: PresetSource::default(),
            favicon_preset: None,
            html_links: HtmlLinkOptions::default(),
            base_path: "/".to_string(),
            resolve_svg_name: default_resolve_svg_name,
        }
    }

    /// Build a request that reads the source image from disk.
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let image_name = path.display().to_string();
        let read_path = path.clone();
        let resolver: ImageResolverFn = Box::new(move || {
            std::fs::read(&read_path).map_err(|e| AssetsError::SourceRead {
                path: read_path.display().to_string(),
                message: format!("{}", e),
            })
        });
        let mut request = Self::new(image_name, resolver);
        request.original_name = path.file_name().map(|n| n.to_string_lossy().into_owned());
        request
    }

    /// Set the preset to resolve with.
    pub fn with_preset(mut self, preset: impl Into<PresetSource>) -> Self {
        self.preset = preset.into();
        self
    }

    /// Set the HTML-link preset used with inline presets.
    pub fn with_favicon_preset(mut self, preset: HtmlLinkPreset) -> Self {
        self.favicon_preset = Some(preset);
        self
    }

    /// Set the output URL prefix.
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    /// Set the serialized link flags.
    pub fn with_html_links(mut self, html_links: HtmlLinkOptions) -> Self {
        self.html_links = html_links;
        self
    }
}

/// A resolved, not-yet-rendered description of one output asset.
pub struct IconAsset {
    pub name: String,
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub mime_type: &'static str,
    /// Serialized head link, for assets that get one.
    pub link: Option<String>,
    /// Structured form of the same link.
    pub link_object: Option<HtmlLink>,
    buffer: RenderFn,
}

impl IconAsset {
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        width: u32,
        height: u32,
        mime_type: &'static str,
        buffer: RenderFn,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            width,
            height,
            mime_type,
            link: None,
            link_object: None,
            buffer,
        }
    }

    /// Attach a head link; the serialized and structured forms are derived
    /// from the same [`HtmlLink`] value.
    pub fn with_link(mut self, link: &HtmlLink, options: HtmlLinkOptions) -> Self {
        self.link = Some(link.to_html(options.include_id, options.xhtml));
        self.link_object = Some(link.clone());
        self
    }

    /// Render the asset bytes.
    pub fn buffer(&self) -> Result<Vec<u8>> {
        (self.buffer)()
    }
}

impl fmt::Debug for IconAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IconAsset")
            .field("name", &self.name)
            .field("url", &self.url)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("mime_type", &self.mime_type)
            .field("link", &self.link)
            .finish_non_exhaustive()
    }
}

impl Serialize for IconAsset {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("IconAsset", 7)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("url", &self.url)?;
        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;
        state.serialize_field("mime_type", &self.mime_type)?;
        state.serialize_field("link", &self.link)?;
        state.serialize_field("link_object", &self.link_object)?;
        state.end()
    }
}

/// The full set of generation instructions for one source image.
///
/// Keyed by output URL. `BTreeMap` keeps iteration deterministic for
/// snapshot comparisons.
#[derive(Debug, Serialize)]
pub struct InstructionSet {
    pub image: String,
    pub original_name: Option<String>,
    pub favicon: BTreeMap<String, IconAsset>,
    pub transparent: BTreeMap<String, IconAsset>,
    pub maskable: BTreeMap<String, IconAsset>,
    pub apple: BTreeMap<String, IconAsset>,
    pub apple_splash_screen: BTreeMap<String, IconAsset>,
}

impl InstructionSet {
    pub(crate) fn new(image: String, original_name: Option<String>) -> Self {
        Self {
            image,
            original_name,
            favicon: BTreeMap::new(),
            transparent: BTreeMap::new(),
            maskable: BTreeMap::new(),
            apple: BTreeMap::new(),
            apple_splash_screen: BTreeMap::new(),
        }
    }

    /// Total number of instructions across all asset maps.
    pub fn len(&self) -> usize {
        self.favicon.len()
            + self.transparent.len()
            + self.maskable.len()
            + self.apple.len()
            + self.apple_splash_screen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
