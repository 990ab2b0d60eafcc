//! Typography resolution: text styles per role and font-import discovery.

use crate::markup;
use crate::schema::typography::{BodyTypography, HeadingTypography, Typography};
use crate::signals::RawStyleSignals;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Resolves the typography section from the signal bundle.
///
/// The body descriptor always exists, each missing field defaulting
/// independently. A heading level is kept only when family, size, and
/// weight were all sampled for it.
pub fn resolve(signals: &RawStyleSignals) -> Typography {
    let body_sample = &signals.text_samples.body;
    let body = BodyTypography {
        font_family: body_sample
            .get("font-family")
            .map(strip_quotes)
            .unwrap_or_else(|| "sans-serif".to_string()),
        font_size: body_sample.get("font-size").unwrap_or("16px").to_string(),
        font_weight: body_sample.get("font-weight").unwrap_or("400").to_string(),
        line_height: body_sample
            .get("line-height")
            .unwrap_or("normal")
            .to_string(),
    };

    let mut headings = BTreeMap::new();
    for (level, sample) in &signals.text_samples.headings {
        let family = sample.get("font-family");
        let size = sample.get("font-size");
        let weight = sample.get("font-weight");
        if let (Some(family), Some(size), Some(weight)) = (family, size, weight) {
            headings.insert(
                level.clone(),
                HeadingTypography {
                    font_family: strip_quotes(family),
                    font_size: size.to_string(),
                    font_weight: weight.to_string(),
                },
            );
        }
    }

    let (font_imports, custom_fonts_detected) = discover_font_imports(signals);

    Typography {
        headings,
        body,
        font_imports,
        custom_fonts_detected,
    }
}

fn strip_quotes(value: &str) -> String {
    value.trim_matches(|c| c == '"' || c == '\'').to_string()
}

/// Unions the three import sources: link hrefs naming fonts, `@import`
/// rules targeting font providers, and `@font-face` presence (which only
/// sets the flag). The first two deduplicate in first-seen order.
fn discover_font_imports(signals: &RawStyleSignals) -> (Vec<String>, bool) {
    static IMPORT_RE: OnceLock<Regex> = OnceLock::new();
    let import_re = markup::cached(&IMPORT_RE, r"(?i)@import\s+url\(([^)]+?fonts[^)]+)\);");

    let mut imports: Vec<String> = Vec::new();
    let mut push_unique = |value: &str| {
        if !imports.iter().any(|existing| existing == value) {
            imports.push(value.to_string());
        }
    };

    for href in markup::link_hrefs(&signals.markup) {
        let lower = href.to_ascii_lowercase();
        if lower.contains("font") || lower.contains("typeface") {
            push_unique(href);
        }
    }

    let mut custom_fonts_detected = false;
    for block in signals.style_blocks() {
        for capture in import_re.captures_iter(block) {
            if let Some(target) = capture.get(1) {
                push_unique(target.as_str());
            }
        }
        if block.contains("@font-face") {
            custom_fonts_detected = true;
        }
    }

    (imports, custom_fonts_detected)
}
