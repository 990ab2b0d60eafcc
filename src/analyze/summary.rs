//! Style-keyword derivation.
//!
//! Purely a function of the resolved sections; no new signal is
//! consulted. Each rule below is independently additive; the output set
//! is alphabetized. Four of the rules are exact either/or pairs, which
//! the tests pin down as mutual-exclusion properties.

use crate::schema::color::ColorScheme;
use crate::schema::component::Components;
use crate::schema::image::Images;
use crate::schema::layout::Layout;
use crate::schema::typography::Typography;
use crate::schema::DesignSummary;
use std::collections::BTreeSet;

/// Palette sizes strictly above this read as high-contrast.
const HIGH_CONTRAST_THRESHOLD: usize = 6;
/// Palette sizes at or below this read as a deliberately limited palette.
const LIMITED_PALETTE_THRESHOLD: usize = 4;

/// Family-name fragments that mark a typeface as a serif.
const SERIF_INDICATORS: &[&str] = &["serif", "georgia", "times", "palatino", "bookman", "charter"];

pub fn derive(
    colors: &ColorScheme,
    typography: &Typography,
    layout: &Layout,
    components: &Components,
    images: &Images,
) -> DesignSummary {
    let mut keywords: BTreeSet<&'static str> = BTreeSet::new();

    // Palette breadth. Sizes 5 and 6 fire neither keyword.
    if colors.palette.len() > HIGH_CONTRAST_THRESHOLD {
        keywords.insert("high-contrast");
    } else if colors.palette.len() <= LIMITED_PALETTE_THRESHOLD {
        keywords.insert("limited-palette");
    }

    // Corner treatment: exactly one of the pair fires.
    let radii = [
        components.buttons.border_radius.as_deref(),
        components.cards.border_radius.as_deref(),
        images.image_style.border_radius.as_deref(),
    ];
    let rounded = radii
        .iter()
        .flatten()
        .any(|radius| *radius != "0px" && *radius != "0%");
    keywords.insert(if rounded {
        "rounded-corners"
    } else {
        "sharp-corners"
    });

    // Shadow usage: exactly one of the pair fires.
    let shadowed = components.cards.box_shadow.is_some()
        || images.image_style.box_shadow.is_some()
        || components.navigation.box_shadow.is_some();
    keywords.insert(if shadowed { "uses-shadows" } else { "flat-design" });

    // Typeface classification: exactly one of the pair fires.
    let heading_family = typography.heading_family().to_ascii_lowercase();
    let serif = SERIF_INDICATORS
        .iter()
        .any(|indicator| heading_family.contains(indicator));
    keywords.insert(if serif {
        "serif-typography"
    } else {
        "sans-serif-typography"
    });

    // Layout keywords.
    if layout.has_grid_system {
        keywords.insert("grid-layout");
    }
    keywords.insert(if layout.container_width.is_some() {
        "contained-width"
    } else {
        "full-width-layout"
    });

    // Icon delivery: vector icons take precedence, at most one fires.
    if images.has_svg_icons {
        keywords.insert("svg-icons");
    } else if images.has_icon_font {
        keywords.insert("icon-font");
    }

    DesignSummary {
        style_keywords: keywords.into_iter().map(str::to_string).collect(),
    }
}
