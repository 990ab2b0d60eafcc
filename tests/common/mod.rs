use chrono::TimeZone;
use styleprint::signals::{Declaration, RawStyleSignals, StyleSample};
use styleprint::{DesignPipeline, ExtractionResults, PipelineConfig};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Runs the pipeline with a pinned timestamp so outputs are comparable.
pub fn run_pipeline(signals: &RawStyleSignals) -> ExtractionResults {
    let config = PipelineConfig::default().with_extraction_time(
        chrono::Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
    );
    DesignPipeline::with_config(config)
        .run(signals)
        .expect("pipeline run")
}

/// An empty bundle: every resolver falls back to its defaults.
pub fn bare_signals() -> RawStyleSignals {
    RawStyleSignals::for_url("https://example.com/")
}

/// A fully populated bundle resembling a small marketing page.
pub fn rich_signals() -> RawStyleSignals {
    let mut signals = RawStyleSignals::for_url("https://example.com/landing");
    signals.markup = concat!(
        r#"<link rel="stylesheet" href="https://fonts.googleapis.com/css2?family=Merriweather">"#,
        r#"<header class="navbar flex"><a class="logo" href="/"><img src="/img/logo.png"></a></header>"#,
        r#"<main class="container">"#,
        r#"<svg viewBox="0 0 24 24"></svg>"#,
        r#"<i class="fa-solid fa-star"></i>"#,
        r#"<div class="card shadow"><p>Card one</p></div>"#,
        r#"<div class="card shadow"><p>Card two</p></div>"#,
        r#"<button class="btn-primary">Try it</button>"#,
        r#"</main>"#,
        "<style>@font-face { font-family: Brand; src: url(/brand.woff2); }</style>",
    )
    .to_string();
    signals.css_blocks = vec![".hero { background-color: rgb(18, 52, 86); }".to_string()];
    signals.dominant_colors = vec![(18, 52, 86), (230, 57, 70), (244, 162, 97)];
    signals.declaration_values = vec![
        Declaration::new("background-color", "rgb(18, 52, 86)"),
        Declaration::new("color", "rgb(42, 157, 143)"),
    ];
    signals.computed_colors = vec![
        "rgb(38, 70, 83)".to_string(),
        "rgb(233, 196, 106)".to_string(),
    ];
    signals.root_background = Some("rgb(255, 255, 255)".to_string());
    signals.root_text_color = Some("rgb(33, 37, 41)".to_string());
    signals.text_samples.body = StyleSample::from_pairs(&[
        ("font-family", "Inter, sans-serif"),
        ("font-size", "16px"),
        ("font-weight", "400"),
        ("line-height", "1.5"),
    ]);
    signals.text_samples.headings.insert(
        "h1".to_string(),
        StyleSample::from_pairs(&[
            ("font-family", "Merriweather, serif"),
            ("font-size", "48px"),
            ("font-weight", "700"),
        ]),
    );
    signals.page_width = Some(1920.0);
    signals.page_height = Some(4200.0);
    signals.container_widths = vec![1140.0, 960.0];
    signals.grid_element_count = 9;
    signals.spacing_samples = ["16px", "16px", "24px", "16px", "24px", "8px"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    signals.component_samples.buttons = Some(StyleSample::from_pairs(&[
        ("background-color", "rgb(230, 57, 70)"),
        ("color", "rgb(255, 255, 255)"),
        ("padding", "12px 24px"),
        ("border-radius", "6px"),
        ("font-weight", "600"),
    ]));
    signals.component_samples.cards = Some(StyleSample::from_pairs(&[
        ("background-color", "rgb(255, 255, 255)"),
        ("box-shadow", "rgba(0, 0, 0, 0.1) 0px 4px 12px"),
        ("border-radius", "8px"),
        ("padding", "24px"),
    ]));
    signals.component_samples.inputs = Some(StyleSample::from_pairs(&[
        ("border", "1px solid rgb(206, 212, 218)"),
        ("border-radius", "4px"),
        ("padding", "8px 12px"),
    ]));
    signals.component_samples.navigation = Some(StyleSample::from_pairs(&[
        ("background-color", "rgb(38, 70, 83)"),
        ("height", "64px"),
        ("link-color", "rgb(255, 255, 255)"),
    ]));
    signals.image_sample = Some(StyleSample::from_pairs(&[
        ("border-radius", "8px"),
        ("box-shadow", "none"),
        ("border", "0px none rgb(0, 0, 0)"),
        ("filter", "none"),
    ]));
    signals
}
