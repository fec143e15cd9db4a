//! HTML head markup collection.

use crate::html::HtmlLink;
use crate::instructions::InstructionSet;

/// Collect the serialized head links of an instruction set, in favicon,
/// apple-touch-icon, splash-screen order.
pub fn generate_html_markup(instructions: &InstructionSet) -> Vec<String> {
    let mut links = Vec::new();

    for icon in instructions.favicon.values() {
        links.extend(icon.link.clone());
    }
    for icon in instructions.apple.values() {
        links.extend(icon.link.clone());
    }
    for icon in instructions.apple_splash_screen.values() {
        links.extend(icon.link.clone());
    }

    links
}

/// Collect the structured head links of an instruction set, in the same
/// order as [`generate_html_markup`].
pub fn generate_html_links(instructions: &InstructionSet) -> Vec<HtmlLink> {
    let mut links = Vec::new();

    for icon in instructions.favicon.values() {
        links.extend(icon.link_object.clone());
    }
    for icon in instructions.apple.values() {
        links.extend(icon.link_object.clone());
    }
    for icon in instructions.apple_splash_screen.values() {
        links.extend(icon.link_object.clone());
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instructions::{resolve_instructions, ImageAssetsRequest, ImageResolverFn};

    #[test]
    fn test_markup_order_and_content() {
        let resolver: ImageResolverFn = Box::new(|| Ok(vec![]));
        let instructions = resolve_instructions(
            ImageAssetsRequest::new("favicon.svg", resolver).with_preset("minimal-2023"),
        )
        .unwrap();

        let links = generate_html_markup(&instructions);
        assert_eq!(
            links,
            vec![
                "<link rel=\"icon\" sizes=\"48x48\" href=\"/favicon.ico\">".to_string(),
                "<link rel=\"icon\" type=\"image/svg+xml\" sizes=\"any\" href=\"/favicon.svg\">"
                    .to_string(),
                "<link rel=\"apple-touch-icon\" href=\"/apple-touch-icon-180x180.png\">"
                    .to_string(),
            ]
        );

        // The structured form mirrors the strings one-for-one.
        let objects = generate_html_links(&instructions);
        assert_eq!(objects.len(), links.len());
        assert_eq!(objects[0].href, "/favicon.ico");
    }

    #[test]
    fn test_maskable_and_transparent_icons_emit_no_links() {
        let resolver: ImageResolverFn = Box::new(|| Ok(vec![]));
        let instructions = resolve_instructions(
            ImageAssetsRequest::new("logo.png", resolver).with_preset("minimal-2023"),
        )
        .unwrap();

        let links = generate_html_markup(&instructions);
        // One ICO favicon link and one apple-touch-icon link; nothing from
        // the transparent or maskable maps.
        assert_eq!(links.len(), 2);
    }
}
