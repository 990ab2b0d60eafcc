mod common;

use common::{bare_signals, rich_signals, run_pipeline, TestResult};
use regex::Regex;
use serde_json::Value;
use styleprint::schema::DesignSchema;
use styleprint::SiteType;

fn hex_re() -> Regex {
    Regex::new(r"^#[0-9a-f]{6}$").unwrap()
}

/// Walks a serialized schema and collects every value sitting in a
/// color-named field.
fn collect_color_fields(value: &Value, path: &str, out: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let child_path = format!("{}.{}", path, key);
                if key.ends_with("_color") || key == "palette" || key == "full_palette_hex" {
                    match child {
                        Value::String(s) => out.push((child_path.clone(), s.clone())),
                        Value::Array(entries) => {
                            for entry in entries {
                                if let Value::String(s) = entry {
                                    out.push((child_path.clone(), s.clone()));
                                }
                            }
                        }
                        _ => {}
                    }
                } else {
                    collect_color_fields(child, &child_path, out);
                }
            }
        }
        Value::Array(entries) => {
            for entry in entries {
                collect_color_fields(entry, path, out);
            }
        }
        _ => {}
    }
}

#[test]
fn every_color_field_is_canonical_hex() -> TestResult {
    let results = run_pipeline(&rich_signals());
    let value = serde_json::to_value(&results.schema)?;
    let mut fields = Vec::new();
    collect_color_fields(&value, "$", &mut fields);
    assert!(!fields.is_empty());
    let re = hex_re();
    for (path, color) in fields {
        assert!(re.is_match(&color), "{} = '{}' is not canonical", path, color);
    }
    Ok(())
}

#[test]
fn identical_signals_yield_identical_schemas() -> TestResult {
    let signals = rich_signals();
    let first = run_pipeline(&signals);
    let second = run_pipeline(&signals.clone());
    assert_eq!(
        serde_json::to_string(&first.schema)?,
        serde_json::to_string(&second.schema)?
    );
    Ok(())
}

#[test]
fn palette_is_capped_and_deduplicated() -> TestResult {
    let mut signals = bare_signals();
    for i in 1..=20u8 {
        signals
            .computed_colors
            .push(format!("rgb({}, 0, 0)", i));
        // Same color, different spelling: must collapse.
        signals
            .computed_colors
            .push(format!("RGB({} , 0 , 0)", i));
    }
    let results = run_pipeline(&signals);
    let palette = &results.schema.colors.palette;
    assert_eq!(palette.len(), 15);
    let mut seen = std::collections::HashSet::new();
    for color in palette {
        assert!(seen.insert(color.hex()), "duplicate {}", color);
    }
    Ok(())
}

#[test]
fn keyword_pairs_are_mutually_exclusive() -> TestResult {
    for signals in [bare_signals(), rich_signals()] {
        let results = run_pipeline(&signals);
        let keywords = &results.schema.design_summary.style_keywords;
        for pair in [
            ["rounded-corners", "sharp-corners"],
            ["uses-shadows", "flat-design"],
            ["serif-typography", "sans-serif-typography"],
            ["contained-width", "full-width-layout"],
        ] {
            let hits = pair
                .iter()
                .filter(|k| keywords.contains(&k.to_string()))
                .count();
            assert_eq!(hits, 1, "pair {:?} in {:?}", pair, keywords);
        }
        // Alphabetical ordering is part of the contract.
        let mut sorted = keywords.clone();
        sorted.sort();
        assert_eq!(keywords, &sorted);
    }
    Ok(())
}

#[test]
fn schema_round_trips_through_json() -> TestResult {
    let results = run_pipeline(&rich_signals());
    let json = serde_json::to_string(&results.schema)?;
    let back: DesignSchema = serde_json::from_str(&json)?;
    assert_eq!(back, results.schema);
    Ok(())
}

#[test]
fn zero_colors_scenario() -> TestResult {
    let results = run_pipeline(&bare_signals());
    let colors = &results.schema.colors;
    assert_eq!(colors.primary_color.hex(), "#0000ff");
    assert_eq!(colors.secondary_color.hex(), "#d3d3d3");
    assert_eq!(colors.accent_color.hex(), "#ffa500");
    assert!(colors.palette.is_empty());
    assert!(results
        .schema
        .design_summary
        .style_keywords
        .contains(&"limited-palette".to_string()));
    Ok(())
}

#[test]
fn eight_distinct_colors_scenario() -> TestResult {
    let mut signals = bare_signals();
    signals.computed_colors = (1..=8u8)
        .map(|i| format!("rgb({}, {}, {})", 10 * i, 5 * i, i))
        .collect();
    let results = run_pipeline(&signals);
    let colors = &results.schema.colors;
    assert_eq!(colors.palette.len(), 8);
    assert!(results
        .schema
        .design_summary
        .style_keywords
        .contains(&"high-contrast".to_string()));
    assert_eq!(colors.primary_color, colors.palette[0]);
    assert_eq!(colors.secondary_color, colors.palette[1]);
    assert_eq!(colors.accent_color, colors.palette[2]);
    Ok(())
}

#[test]
fn no_spacing_samples_scenario() -> TestResult {
    let results = run_pipeline(&bare_signals());
    assert!(results.schema.layout.common_spacing_units.is_empty());
    let snippets = results.code_snippets.expect("snippets enabled by default");
    assert!(snippets.css_variables.contains("--spacing-unit: 8px;"));
    Ok(())
}

#[test]
fn wordpress_plugin_skipped_for_general_site() -> TestResult {
    let results = run_pipeline(&bare_signals());
    assert_eq!(results.site_type, SiteType::General);
    assert!(results.applied_plugins.is_empty());
    assert!(results.schema.metadata.cms.is_none());
    assert!(results.schema.components.sidebar.is_none());
    Ok(())
}

#[test]
fn wordpress_plugin_applied_for_wordpress_site() -> TestResult {
    let mut signals = bare_signals();
    signals.markup = concat!(
        r#"<link rel="stylesheet" href="/wp-content/themes/astra/style.css">"#,
        r#"<aside id="secondary" class="widget-area"></aside>"#,
    )
    .to_string();
    let results = run_pipeline(&signals);
    assert_eq!(results.site_type, SiteType::WordPress);
    assert_eq!(results.applied_plugins, vec!["wordpress_enhancer".to_string()]);
    let cms = results.schema.metadata.cms.as_ref().expect("cms info");
    assert_eq!(cms.kind, "wordpress");
    assert_eq!(cms.theme.as_deref(), Some("astra"));
    assert!(results.schema.components.sidebar.is_some());
    Ok(())
}

#[test]
fn validation_is_clean_for_both_fixtures() -> TestResult {
    for signals in [bare_signals(), rich_signals()] {
        let results = run_pipeline(&signals);
        assert!(
            results.validation_issues.is_empty(),
            "unexpected issues: {:?}",
            results.validation_issues
        );
    }
    Ok(())
}

#[test]
fn rich_fixture_resolves_expected_sections() -> TestResult {
    let results = run_pipeline(&rich_signals());
    let schema = &results.schema;

    assert_eq!(schema.colors.background_color.hex(), "#ffffff");
    assert_eq!(schema.colors.text_color.hex(), "#212529");
    // First discovery order: dominant colors lead the palette.
    assert_eq!(schema.colors.primary_color.hex(), "#123456");

    assert_eq!(schema.typography.body.font_family, "Inter, sans-serif");
    assert_eq!(
        schema.typography.headings["h1"].font_family,
        "Merriweather, serif"
    );
    assert!(schema.typography.custom_fonts_detected);
    assert_eq!(
        schema.typography.font_imports,
        vec!["https://fonts.googleapis.com/css2?family=Merriweather".to_string()]
    );

    assert_eq!(schema.layout.container_width, Some(1140.0));
    assert!(schema.layout.has_grid_system);
    assert_eq!(
        schema.layout.common_spacing_units,
        vec!["16px", "24px", "8px"]
    );

    assert!(schema.images.has_svg_icons);
    assert!(schema.images.has_icon_font);
    assert_eq!(
        schema.images.logo_url.as_deref(),
        Some("https://example.com/img/logo.png")
    );

    let keywords = &schema.design_summary.style_keywords;
    for expected in [
        "contained-width",
        "grid-layout",
        "rounded-corners",
        "serif-typography",
        "svg-icons",
        "uses-shadows",
    ] {
        assert!(
            keywords.contains(&expected.to_string()),
            "missing '{}' in {:?}",
            expected,
            keywords
        );
    }
    Ok(())
}
