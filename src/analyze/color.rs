//! Color resolution: palette discovery and semantic role assignment.

use crate::schema::color::{Color, ColorScheme, Palette};
use crate::signals::RawStyleSignals;

const FALLBACK_BACKGROUND: Color = Color { r: 255, g: 255, b: 255 };
const FALLBACK_TEXT: Color = Color { r: 0, g: 0, b: 0 };

const DEFAULT_PRIMARY: Color = Color { r: 0, g: 0, b: 255 };
const DEFAULT_SECONDARY: Color = Color { r: 211, g: 211, b: 211 };
const DEFAULT_ACCENT: Color = Color { r: 255, g: 165, b: 0 };

/// Property-name markers identifying a declaration as color-valued.
const COLOR_PROPERTY_MARKERS: &[&str] = &["color", "background", "border", "fill", "stroke"];

/// Declaration values that name no concrete color.
const NON_COLOR_KEYWORDS: &[&str] = &["inherit", "transparent", "none", "initial", "unset"];

/// Resolves the full color section from the signal bundle.
pub fn resolve(signals: &RawStyleSignals) -> ColorScheme {
    let palette = discover_palette(signals);

    let background = signals
        .root_background
        .as_deref()
        .and_then(Color::normalize)
        .unwrap_or(FALLBACK_BACKGROUND);
    let text = signals
        .root_text_color
        .as_deref()
        .and_then(Color::normalize)
        .unwrap_or(FALLBACK_TEXT);

    let (primary, secondary, accent) = assign_roles(&palette, background, text);

    ColorScheme {
        primary_color: primary,
        secondary_color: secondary,
        accent_color: accent,
        background_color: background,
        text_color: text,
        palette: palette.into_vec(),
    }
}

/// Builds the palette in first-discovery order: dominant screenshot
/// colors, then sampled computed colors, then stylesheet declarations.
fn discover_palette(signals: &RawStyleSignals) -> Palette {
    let mut palette = Palette::new();

    for &(r, g, b) in &signals.dominant_colors {
        palette.insert(Color::new(r, g, b));
    }

    for raw in &signals.computed_colors {
        if raw.contains("rgba(0, 0, 0, 0)") || raw.to_ascii_lowercase().contains("transparent") {
            continue;
        }
        if let Some(color) = Color::normalize(raw) {
            palette.insert(color);
        }
    }

    for declaration in &signals.declaration_values {
        if !is_color_property(&declaration.property) {
            continue;
        }
        if NON_COLOR_KEYWORDS.contains(&declaration.value.trim().to_ascii_lowercase().as_str()) {
            continue;
        }
        if let Some(color) = Color::normalize(&declaration.value) {
            palette.insert(color);
        }
    }

    palette
}

fn is_color_property(property: &str) -> bool {
    let property = property.to_ascii_lowercase();
    COLOR_PROPERTY_MARKERS
        .iter()
        .any(|marker| property.contains(marker))
}

/// The primary/secondary/accent decision table.
///
/// Tier order is load-bearing for reproducibility; the asymmetry between
/// the tiers (two palette entries always alias accent to primary, for
/// example) is kept as documented behavior. Within any candidate set the
/// selection order is the palette's insertion order.
///
/// | tier | condition                  | primary / secondary / accent        |
/// |------|----------------------------|-------------------------------------|
/// | 1    | >= 3 chromatic candidates  | first three chromatic               |
/// | 2    | >= 3 palette entries       | progressive not-yet-used filtering  |
/// | 3    | exactly 2 entries          | [0] / [1] / primary                 |
/// | 4    | exactly 1 entry            | [0] / text-or-background / primary  |
/// | 5    | empty palette              | blue / light gray / orange          |
fn assign_roles(palette: &Palette, background: Color, text: Color) -> (Color, Color, Color) {
    // Tier 1: candidates that are neither base color nor grayscale.
    let chromatic: Vec<Color> = palette
        .iter()
        .copied()
        .filter(|c| *c != background && *c != text && !c.is_grayscale())
        .collect();
    if chromatic.len() >= 3 {
        return (chromatic[0], chromatic[1], chromatic[2]);
    }

    let colors: Vec<Color> = palette.iter().copied().collect();
    match colors.len() {
        n if n >= 3 => {
            let primary = colors
                .iter()
                .copied()
                .find(|c| *c != background && *c != text)
                .unwrap_or(colors[0]);
            let secondary = colors
                .iter()
                .copied()
                .find(|c| *c != background && *c != text && *c != primary)
                .unwrap_or(colors[1]);
            let accent = colors
                .iter()
                .copied()
                .find(|c| *c != background && *c != text && *c != primary && *c != secondary)
                .unwrap_or(colors[2]);
            (primary, secondary, accent)
        }
        2 => (colors[0], colors[1], colors[0]),
        1 => {
            let primary = colors[0];
            let secondary = if primary != text { text } else { background };
            (primary, secondary, primary)
        }
        _ => (DEFAULT_PRIMARY, DEFAULT_SECONDARY, DEFAULT_ACCENT),
    }
}
