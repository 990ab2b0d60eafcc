//! Image and icon classification: icon delivery mechanism, image
//! decoration, and logo discovery.

use crate::markup;
use crate::schema::image::{ImageStyle, Images};
use crate::signals::{RawStyleSignals, StyleSample};
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

/// Class prefixes of the icon-font families worth recognizing.
pub const ICON_FONT_PREFIXES: &[&str] = &[
    "fa-",
    "fas",
    "far",
    "fal",
    "fab",
    "glyphicon",
    "material-icons",
    "icon-",
    "icofont-",
    "bi-",
    "feather",
    "mdi-",
];

const MAX_ICON_CLASSES: usize = 10;

/// CSS initial values an image decoration must differ from to count.
const RADIUS_INITIAL: &str = "0px";
const SHADOW_INITIAL: &str = "none";
const BORDER_INITIAL: &str = "0px none rgb(0, 0, 0)";
const FILTER_INITIAL: &str = "none";

/// Resolves the images section from the signal bundle.
pub fn resolve(signals: &RawStyleSignals) -> Images {
    let icon_classes = icon_font_classes(&signals.markup);
    let (logo_detected, logo_url) = match detect_logo(&signals.markup) {
        Some(url) => (
            true,
            url.map(|u| absolutize(&u, &signals.source_url)),
        ),
        None => (false, None),
    };

    Images {
        has_svg_icons: has_vector_icons(&signals.markup),
        has_icon_font: !icon_classes.is_empty(),
        icon_classes_found: icon_classes,
        image_style: image_style(signals.image_sample.as_ref()),
        logo_detected,
        logo_url,
    }
}

/// Inline `<svg>` or an `<img>` with a vector source.
fn has_vector_icons(markup: &str) -> bool {
    static SVG_TAG: OnceLock<Regex> = OnceLock::new();
    static SVG_IMG: OnceLock<Regex> = OnceLock::new();
    let svg_tag = markup::cached(&SVG_TAG, r"(?i)<svg[\s>/]");
    let svg_img = markup::cached(&SVG_IMG, r#"(?i)<img\b[^>]*\bsrc\s*=\s*["'][^"']*\.svg["']"#);
    svg_tag.is_match(markup) || svg_img.is_match(markup)
}

/// Icon-font class tokens carried by small inline elements (`<i>`,
/// `<span>`), deduplicated first-seen and capped.
fn icon_font_classes(markup_text: &str) -> Vec<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = markup::cached(
        &RE,
        r#"(?i)<(?:i|span)\b[^>]*\bclass\s*=\s*["']([^"']*)["']"#,
    );

    let mut tokens: Vec<String> = Vec::new();
    for capture in re.captures_iter(markup_text) {
        let Some(class_list) = capture.get(1) else {
            continue;
        };
        for token in class_list.as_str().split_whitespace() {
            let matches = ICON_FONT_PREFIXES
                .iter()
                .any(|prefix| token.contains(prefix));
            if matches && !tokens.iter().any(|t| t == token) {
                tokens.push(token.to_string());
                if tokens.len() == MAX_ICON_CLASSES {
                    return tokens;
                }
            }
        }
    }
    tokens
}

fn image_style(sample: Option<&StyleSample>) -> ImageStyle {
    let Some(sample) = sample else {
        return ImageStyle::default();
    };
    let keep = |property: &str, initial: &str| {
        sample
            .get(property)
            .filter(|value| *value != initial)
            .map(str::to_string)
    };
    ImageStyle {
        border_radius: keep("border-radius", RADIUS_INITIAL),
        box_shadow: keep("box-shadow", SHADOW_INITIAL),
        border: keep("border", BORDER_INITIAL),
        filter: keep("filter", FILTER_INITIAL),
    }
}

/// Runs the ordered logo probes. `Some(None)` means a logo element was
/// found but no URL could be read from it (an inline SVG logo, say).
fn detect_logo(markup_text: &str) -> Option<Option<String>> {
    static CLASS_LOGO: OnceLock<Regex> = OnceLock::new();
    static ID_LOGO: OnceLock<Regex> = OnceLock::new();
    static ALT_LOGO: OnceLock<Regex> = OnceLock::new();
    static SRC_LOGO: OnceLock<Regex> = OnceLock::new();

    let probes = [
        markup::cached(
            &CLASS_LOGO,
            r#"(?i)<([a-z][a-z0-9]*)\b[^>]*\bclass\s*=\s*["'][^"']*logo[^"']*["'][^>]*>"#,
        ),
        markup::cached(
            &ID_LOGO,
            r#"(?i)<([a-z][a-z0-9]*)\b[^>]*\bid\s*=\s*["'][^"']*logo[^"']*["'][^>]*>"#,
        ),
        markup::cached(
            &ALT_LOGO,
            r#"(?i)<(img)\b[^>]*\balt\s*=\s*["'][^"']*logo[^"']*["'][^>]*>"#,
        ),
        markup::cached(
            &SRC_LOGO,
            r#"(?i)<(img)\b[^>]*\bsrc\s*=\s*["'][^"']*logo[^"']*["'][^>]*>"#,
        ),
    ];

    for probe in probes {
        if let Some(capture) = probe.captures(markup_text) {
            let whole = capture.get(0)?;
            let tag_name = capture.get(1)?.as_str().to_ascii_lowercase();
            return Some(logo_url_from_match(
                markup_text,
                whole.as_str(),
                whole.end(),
                &tag_name,
            ));
        }
    }
    None
}

/// URL precedence for a matched logo element: its own `src`, the first
/// image nested inside it, then an inline-style background image.
fn logo_url_from_match(
    markup_text: &str,
    tag: &str,
    tag_end: usize,
    tag_name: &str,
) -> Option<String> {
    if tag_name == "img" {
        return markup::attr_value(tag, "src").map(str::to_string);
    }
    if tag_name == "svg" {
        return None;
    }

    // Nested image: scan from the open tag to the element's closing tag
    // (best effort; nesting of the same tag is not tracked).
    static NESTED_IMG: OnceLock<Regex> = OnceLock::new();
    let nested_img = markup::cached(
        &NESTED_IMG,
        r#"(?i)<img\b[^>]*\bsrc\s*=\s*["']([^"']+)["']"#,
    );
    let rest = &markup_text[tag_end..];
    let close = format!("</{}", tag_name);
    let scope_end = rest.to_ascii_lowercase().find(&close).unwrap_or(rest.len());
    if let Some(capture) = nested_img.captures(&rest[..scope_end]) {
        return capture.get(1).map(|m| m.as_str().to_string());
    }

    // Background image declared inline on the element itself.
    static BG_URL: OnceLock<Regex> = OnceLock::new();
    let bg_url = markup::cached(
        &BG_URL,
        r#"(?i)background(?:-image)?\s*:[^;"']*url\(["']?([^"')]+)["']?\)"#,
    );
    markup::attr_value(tag, "style")
        .and_then(|style| bg_url.captures(style))
        .and_then(|capture| capture.get(1).map(|m| m.as_str().to_string()))
}

/// Resolves a possibly relative URL against the page URL. Absolute and
/// `data:` URLs pass through; an unusable base leaves the value as-is.
fn absolutize(candidate: &str, base: &str) -> String {
    if candidate.starts_with("http:")
        || candidate.starts_with("https:")
        || candidate.starts_with("data:")
    {
        return candidate.to_string();
    }
    match Url::parse(base).and_then(|b| b.join(candidate)) {
        Ok(absolute) => absolute.to_string(),
        Err(_) => candidate.to_string(),
    }
}
