//! The AI-consumption view: the schema plus natural-language section
//! descriptions and suggested prompt fragments.

use crate::schema::color::Color;
use crate::schema::DesignSchema;
use serde::{Deserialize, Serialize};

/// A deep copy of the schema extended with an `ai_consumption` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiView {
    #[serde(flatten)]
    pub schema: DesignSchema,
    pub ai_consumption: AiConsumption,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiConsumption {
    pub natural_language_descriptions: Descriptions,
    pub suggested_prompt_elements: Vec<String>,
    pub full_palette_hex: Vec<Color>,
}

/// One sentence per schema section, built from available fields only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Descriptions {
    pub overall_style: String,
    pub color_scheme: String,
    pub typography: String,
    pub layout_spacing: String,
    pub component_styles: String,
}

/// Derives the AI view. The input schema is cloned, never modified.
pub fn derive(schema: &DesignSchema) -> AiView {
    let mut prompt_elements = Vec::new();

    let overall_style = describe_overall_style(schema, &mut prompt_elements);
    let color_scheme = describe_color_scheme(schema, &mut prompt_elements);
    let typography = describe_typography(schema, &mut prompt_elements);
    let layout_spacing = describe_layout(schema, &mut prompt_elements);
    let component_styles = describe_components(schema);

    AiView {
        schema: schema.clone(),
        ai_consumption: AiConsumption {
            natural_language_descriptions: Descriptions {
                overall_style,
                color_scheme,
                typography,
                layout_spacing,
                component_styles,
            },
            suggested_prompt_elements: prompt_elements,
            full_palette_hex: schema.colors.palette.clone(),
        },
    }
}

fn describe_overall_style(schema: &DesignSchema, prompts: &mut Vec<String>) -> String {
    let keywords = &schema.design_summary.style_keywords;
    if !keywords.is_empty() {
        prompts.push(format!("Design Style: {}", keywords.join(", ")));
    }
    match keywords.len() {
        0 => "The website's overall design style is neutral or couldn't be easily categorized."
            .to_string(),
        1 => format!("The website features a {} design style.", keywords[0]),
        n => format!(
            "The website features a {} and {} design style.",
            keywords[..n - 1].join(", "),
            keywords[n - 1]
        ),
    }
}

fn describe_color_scheme(schema: &DesignSchema, prompts: &mut Vec<String>) -> String {
    let colors = &schema.colors;
    prompts.push(format!(
        "Color Palette: Primary({}), Secondary({}), Accent({}), Background({}), Text({})",
        colors.primary_color,
        colors.secondary_color,
        colors.accent_color,
        colors.background_color,
        colors.text_color
    ));
    format!(
        "Key colors are Primary: {}, Secondary: {}, Accent: {}, Background: {}, Text: {}.",
        colors.primary_color,
        colors.secondary_color,
        colors.accent_color,
        colors.background_color,
        colors.text_color
    )
}

fn describe_typography(schema: &DesignSchema, prompts: &mut Vec<String>) -> String {
    let body_font = &schema.typography.body.font_family;
    let heading_font = schema.typography.heading_family();
    if heading_font.eq_ignore_ascii_case(body_font) {
        prompts.push(format!("Typography: Use '{}' font.", body_font));
        format!("Typography primarily uses the '{}' font family.", body_font)
    } else {
        prompts.push(format!(
            "Typography: Headings '{}', Body '{}'.",
            heading_font, body_font
        ));
        format!(
            "Typography uses '{}' for headings and '{}' for body text.",
            heading_font, body_font
        )
    }
}

fn describe_layout(schema: &DesignSchema, prompts: &mut Vec<String>) -> String {
    let layout = &schema.layout;
    let mut parts = Vec::new();
    if layout.has_grid_system {
        parts.push("grid-based layout".to_string());
    }
    match layout.container_width {
        Some(width) => parts.push(format!("contained width (around {}px)", width)),
        None => parts.push("full-width layout".to_string()),
    }
    if let Some(first) = layout.common_spacing_units.first() {
        parts.push(format!("common spacing unit around {}", first));
        prompts.push(format!("Spacing: Base unit ~{}.", first));
    }
    format!("Layout is generally {}.", parts.join(", "))
}

fn describe_components(schema: &DesignSchema) -> String {
    let components = &schema.components;
    let mut parts: Vec<String> = Vec::new();

    if !components.buttons.is_empty() {
        let rounded = components
            .buttons
            .border_radius
            .as_deref()
            .is_some_and(|radius| radius != "0px");
        parts.push(format!(
            "{} buttons",
            if rounded { "rounded" } else { "sharp-edged" }
        ));
    }
    if !components.cards.is_empty() {
        parts.push(format!(
            "{} cards/panels",
            if components.cards.box_shadow.is_some() {
                "shadowed"
            } else {
                "flat"
            }
        ));
    }
    if schema.images.has_svg_icons {
        parts.push("uses SVG icons".to_string());
    } else if schema.images.has_icon_font {
        parts.push("uses icon fonts".to_string());
    }

    if parts.is_empty() {
        "Specific component styles were not prominently detected.".to_string()
    } else {
        format!("Key component styles include: {}.", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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
    fn empty_components_fall_back_to_not_detected() {
        let schema = schema_from(&RawStyleSignals::for_url("https://example.com/"));
        let view = derive(&schema);
        assert_eq!(
            view.ai_consumption
                .natural_language_descriptions
                .component_styles,
            "Specific component styles were not prominently detected."
        );
    }

    #[test]
    fn sentences_and_prompts_reflect_sampled_data() {
        let mut signals = RawStyleSignals::for_url("https://example.com/");
        signals.component_samples.buttons = Some(StyleSample::from_pairs(&[
            ("background-color", "rgb(0, 123, 255)"),
            ("border-radius", "6px"),
        ]));
        signals.spacing_samples = vec!["24px".to_string(), "24px".to_string()];
        let schema = schema_from(&signals);
        let view = derive(&schema);
        let descriptions = &view.ai_consumption.natural_language_descriptions;

        assert!(descriptions.component_styles.contains("rounded buttons"));
        assert!(descriptions.layout_spacing.contains("full-width layout"));
        assert!(descriptions
            .layout_spacing
            .contains("common spacing unit around 24px"));
        assert!(view
            .ai_consumption
            .suggested_prompt_elements
            .iter()
            .any(|p| p == "Spacing: Base unit ~24px."));
    }

    #[test]
    fn view_does_not_mutate_schema() {
        let schema = schema_from(&RawStyleSignals::for_url("https://example.com/"));
        let before = schema.clone();
        let view = derive(&schema);
        assert_eq!(schema, before);
        assert_eq!(view.schema, before);
        assert_eq!(view.ai_consumption.full_palette_hex, schema.colors.palette);
    }

    #[test]
    fn keyword_sentence_joins_with_and() {
        let schema = schema_from(&RawStyleSignals::for_url("https://example.com/"));
        let view = derive(&schema);
        let sentence = &view
            .ai_consumption
            .natural_language_descriptions
            .overall_style;
        assert!(sentence.starts_with("The website features a "));
        assert!(sentence.contains(" and "));
        assert!(sentence.ends_with(" design style."));
    }
}
