//! Markdown documentation rendering.
//!
//! Mirrors every schema section in a human-readable report. When the AI
//! view was derived for the same run its sentences lead each section;
//! otherwise the report falls back to plain field dumps.

use super::ai::AiConsumption;
use crate::schema::color::ColorRole;
use crate::schema::DesignSchema;
use itertools::Itertools;

/// Renders the report for a finalized schema.
pub fn render(schema: &DesignSchema, ai: Option<&AiConsumption>) -> String {
    let mut doc: Vec<String> = Vec::new();
    let descriptions = ai.map(|a| &a.natural_language_descriptions);

    // Header
    doc.push("# Design Scheme Documentation".to_string());
    doc.push(format!("*Source URL: {}*", schema.metadata.source_url));
    doc.push(format!(
        "*Extraction Date: {}*",
        schema.metadata.extraction_date
    ));
    doc.push(format!(
        "*Schema Version: {}*",
        schema.metadata.schema_version
    ));
    if let Some(cms) = &schema.metadata.cms {
        match &cms.theme {
            Some(theme) => doc.push(format!("*CMS: {} (theme: {})*", cms.kind, theme)),
            None => doc.push(format!("*CMS: {}*", cms.kind)),
        }
    }

    doc.push("\n## Overall Style Summary".to_string());
    doc.push(match descriptions {
        Some(d) => d.overall_style.clone(),
        None => schema.design_summary.style_keywords.join(" "),
    });

    render_colors(schema, descriptions.map(|d| d.color_scheme.as_str()), &mut doc);
    render_typography(schema, descriptions.map(|d| d.typography.as_str()), &mut doc);
    render_layout(schema, descriptions.map(|d| d.layout_spacing.as_str()), &mut doc);
    render_components(
        schema,
        descriptions.map(|d| d.component_styles.as_str()),
        &mut doc,
    );
    render_images(schema, &mut doc);

    if let Some(ai) = ai {
        if !ai.suggested_prompt_elements.is_empty() {
            doc.push("\n## AI Integration Guide".to_string());
            doc.push("Key elements for AI prompts:".to_string());
            for (i, element) in ai.suggested_prompt_elements.iter().enumerate() {
                doc.push(format!("{}. {}", i + 1, element));
            }
        }
    }

    doc.retain(|part| !part.is_empty());
    doc.join("\n")
}

fn swatch(hex: &str, size: u32) -> String {
    format!(
        r#"<div style="background-color: {hex}; width: {size}px; height: {size}px; display: inline-block; border: 1px solid #ccc; vertical-align: middle;" title="{hex}"></div>"#
    )
}

fn render_colors(schema: &DesignSchema, summary: Option<&str>, doc: &mut Vec<String>) {
    doc.push("\n## Color Palette".to_string());
    doc.push(summary.unwrap_or("See details below.").to_string());
    doc.push("\n| Role             | Color Preview | Hex Code  |".to_string());
    doc.push("|------------------|---------------|-----------|".to_string());
    for role in ColorRole::ALL {
        let hex = schema.colors.role(role).hex();
        doc.push(format!(
            "| {:<16} | {} | `{}` |",
            role.label(),
            swatch(&hex, 20),
            hex
        ));
    }

    if !schema.colors.palette.is_empty() {
        doc.push("\n### Full Palette Detected".to_string());
        doc.push(
            schema
                .colors
                .palette
                .iter()
                .map(|color| swatch(&color.hex(), 30))
                .join(" "),
        );
    }
}

fn render_typography(schema: &DesignSchema, summary: Option<&str>, doc: &mut Vec<String>) {
    let typography = &schema.typography;
    doc.push("\n## Typography".to_string());
    doc.push(summary.unwrap_or("See details below.").to_string());

    doc.push("\n### Body Text".to_string());
    doc.push(format!("- **Font Family:** `{}`", typography.body.font_family));
    doc.push(format!("- **Font Size:** `{}`", typography.body.font_size));
    doc.push(format!("- **Font Weight:** `{}`", typography.body.font_weight));
    doc.push(format!("- **Line Height:** `{}`", typography.body.line_height));

    if !typography.headings.is_empty() {
        doc.push("\n### Headings".to_string());
        for (level, heading) in &typography.headings {
            doc.push(format!("#### `<{}>` Style", level));
            doc.push(format!("  - **Font Family:** `{}`", heading.font_family));
            doc.push(format!("  - **Font Size:** `{}`", heading.font_size));
            doc.push(format!("  - **Font Weight:** `{}`", heading.font_weight));
        }
    }

    if !typography.font_imports.is_empty() {
        doc.push("\n### Font Imports Detected".to_string());
        for import in &typography.font_imports {
            doc.push(format!("- `{}`", import));
        }
    }
    if typography.custom_fonts_detected {
        doc.push("- Custom fonts (`@font-face`) detected in CSS.".to_string());
    }
}

fn render_layout(schema: &DesignSchema, summary: Option<&str>, doc: &mut Vec<String>) {
    let layout = &schema.layout;
    doc.push("\n## Layout & Spacing".to_string());
    doc.push(summary.unwrap_or("See details below.").to_string());

    let width = dimension(layout.page_dimensions.width);
    let height = dimension(layout.page_dimensions.height);
    doc.push(format!(
        "- **Page Dimensions (Approx):** Width: `{}`, Height: `{}`",
        width, height
    ));
    doc.push(format!(
        "- **Container Width (Detected):** `{}`",
        layout
            .container_width
            .map(|w| format!("{}px", w))
            .unwrap_or_else(|| "Full Width".to_string())
    ));
    doc.push(format!(
        "- **Grid System Likely:** `{}`",
        if layout.has_grid_system { "Yes" } else { "No" }
    ));
    if !layout.common_spacing_units.is_empty() {
        doc.push(format!(
            "- **Common Spacing Units:** `{}`",
            layout.common_spacing_units.join(", ")
        ));
    }
}

fn dimension(value: Option<f64>) -> String {
    value
        .map(|v| format!("{}px", v))
        .unwrap_or_else(|| "N/A".to_string())
}

fn push_field(doc: &mut Vec<String>, label: &str, value: Option<&str>) {
    if let Some(value) = value {
        doc.push(format!("- **{}:** `{}`", label, value));
    }
}

fn render_components(schema: &DesignSchema, summary: Option<&str>, doc: &mut Vec<String>) {
    let components = &schema.components;
    doc.push("\n## Component Styles (Sampled)".to_string());
    doc.push(summary.unwrap_or("See details below.").to_string());

    if !components.buttons.is_empty() {
        let buttons = &components.buttons;
        doc.push("\n### Buttons".to_string());
        push_field(doc, "Background Color", buttons.background_color.map(|c| c.hex()).as_deref());
        push_field(doc, "Text Color", buttons.text_color.map(|c| c.hex()).as_deref());
        push_field(doc, "Padding", buttons.padding.as_deref());
        push_field(doc, "Border", buttons.border.as_deref());
        push_field(doc, "Border Radius", buttons.border_radius.as_deref());
        push_field(doc, "Font Size", buttons.font_size.as_deref());
        push_field(doc, "Font Weight", buttons.font_weight.as_deref());
        push_field(doc, "Text Transform", buttons.text_transform.as_deref());
    }
    if !components.cards.is_empty() {
        let cards = &components.cards;
        doc.push("\n### Cards / Panels".to_string());
        push_field(doc, "Background Color", cards.background_color.map(|c| c.hex()).as_deref());
        push_field(doc, "Box Shadow", cards.box_shadow.as_deref());
        push_field(doc, "Border Radius", cards.border_radius.as_deref());
        push_field(doc, "Padding", cards.padding.as_deref());
        push_field(doc, "Border", cards.border.as_deref());
    }
    if !components.forms.inputs.is_empty() {
        let inputs = &components.forms.inputs;
        doc.push("\n### Form Inputs".to_string());
        push_field(doc, "Border", inputs.border.as_deref());
        push_field(doc, "Border Radius", inputs.border_radius.as_deref());
        push_field(doc, "Padding", inputs.padding.as_deref());
        push_field(doc, "Background Color", inputs.background_color.map(|c| c.hex()).as_deref());
        push_field(doc, "Font Size", inputs.font_size.as_deref());
    }
    if !components.navigation.is_empty() {
        let navigation = &components.navigation;
        doc.push("\n### Navigation / Header".to_string());
        push_field(doc, "Background Color", navigation.background_color.map(|c| c.hex()).as_deref());
        push_field(doc, "Height", navigation.height.as_deref());
        push_field(doc, "Box Shadow", navigation.box_shadow.as_deref());
        push_field(doc, "Link Color", navigation.link_color.map(|c| c.hex()).as_deref());
    }
    if let Some(sidebar) = &components.sidebar {
        doc.push("\n### Sidebar".to_string());
        doc.push(format!(
            "- **Present:** `{}`",
            if sidebar.present { "Yes" } else { "No" }
        ));
        push_field(
            doc,
            "Width",
            sidebar.width.map(|w| format!("{}px", w)).as_deref(),
        );
    }

    if !components.detected_css_patterns.is_empty() {
        doc.push("\n### Detected CSS Class Patterns".to_string());
        doc.push(format!("`{}`", components.detected_css_patterns.join(", ")));
    }
}

fn render_images(schema: &DesignSchema, doc: &mut Vec<String>) {
    let images = &schema.images;
    doc.push("\n## Images & Icons".to_string());
    doc.push(format!(
        "- **SVG Icons Used:** `{}`",
        if images.has_svg_icons { "Yes" } else { "No" }
    ));
    doc.push(format!(
        "- **Icon Font Used:** `{}`",
        if images.has_icon_font { "Yes" } else { "No" }
    ));
    if !images.icon_classes_found.is_empty() {
        doc.push(format!(
            "- **Detected Icon Classes:** `{}`",
            images.icon_classes_found.join(", ")
        ));
    }

    if !images.image_style.is_empty() {
        doc.push("\n### Image Styling (Sampled)".to_string());
        push_field(doc, "Border Radius", images.image_style.border_radius.as_deref());
        push_field(doc, "Box Shadow", images.image_style.box_shadow.as_deref());
        push_field(doc, "Border", images.image_style.border.as_deref());
        push_field(doc, "Filter", images.image_style.filter.as_deref());
    }

    doc.push(format!(
        "\n- **Logo Detected:** `{}`",
        if images.logo_detected { "Yes" } else { "No" }
    ));
    if let Some(url) = &images.logo_url {
        doc.push(format!("- **Logo URL:** `{}`", url));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::ai;
    use crate::{analyze, assembler, signals::RawStyleSignals, signals::StyleSample};
    use chrono::TimeZone;

    fn schema_from(signals: &RawStyleSignals) -> DesignSchema {
        assembler::assemble(
            &signals.source_url,
            chrono::Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            analyze::color::resolve(signals),
            analyze::typography::resolve(signals),
            analyze::layout::resolve(signals),
            analyze::component::resolve(signals),
            analyze::image::resolve(signals),
        )
    }

    #[test]
    fn report_mirrors_all_sections() {
        let schema = schema_from(&RawStyleSignals::for_url("https://example.com/"));
        let report = render(&schema, None);
        for heading in [
            "# Design Scheme Documentation",
            "## Overall Style Summary",
            "## Color Palette",
            "## Typography",
            "## Layout & Spacing",
            "## Component Styles (Sampled)",
            "## Images & Icons",
        ] {
            assert!(report.contains(heading), "missing section: {}", heading);
        }
        // Role colors render as table rows with swatches.
        assert!(report.contains("`#0000ff`"));
        assert!(report.contains("background-color: #0000ff"));
        // No AI guide without an AI view.
        assert!(!report.contains("## AI Integration Guide"));
    }

    #[test]
    fn ai_sentences_lead_sections_when_present() {
        let schema = schema_from(&RawStyleSignals::for_url("https://example.com/"));
        let view = ai::derive(&schema);
        let report = render(&schema, Some(&view.ai_consumption));
        assert!(report.contains("Key colors are Primary: #0000ff"));
        assert!(report.contains("## AI Integration Guide"));
        assert!(report.contains("1. Design Style:"));
    }

    #[test]
    fn sampled_components_render_their_fields() {
        let mut signals = RawStyleSignals::for_url("https://example.com/");
        signals.component_samples.buttons = Some(StyleSample::from_pairs(&[
            ("background-color", "rgb(0, 123, 255)"),
            ("padding", "8px 16px"),
        ]));
        let schema = schema_from(&signals);
        let report = render(&schema, None);
        assert!(report.contains("### Buttons"));
        assert!(report.contains("- **Background Color:** `#007bff`"));
        assert!(report.contains("- **Padding:** `8px 16px`"));
        assert!(!report.contains("### Cards / Panels"));
    }
}
