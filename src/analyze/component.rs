//! Component style sampling and recurring class-pattern detection.

use crate::schema::color::Color;
use crate::schema::component::{
    ButtonStyle, CardStyle, Components, Forms, InputStyle, NavigationStyle,
};
use crate::signals::{RawStyleSignals, StyleSample};

/// Substrings marking a class token as a utility or framework pattern.
const UTILITY_INDICATORS: &[&str] = &[
    "text-",
    "bg-",
    "p-",
    "m-",
    "flex",
    "grid",
    "border",
    "rounded",
    "w-",
    "h-",
    "font-",
    "shadow",
    "item",
    "container",
    "row",
    "col-",
    "nav-",
    "btn-",
    "card-",
    "form-",
];

/// Only the most frequent distinct tokens are considered at all.
const CLASS_FREQUENCY_WINDOW: usize = 50;
const MIN_CLASS_OCCURRENCES: u32 = 5;
const MIN_CLASS_LENGTH: usize = 2;
const MAX_CLASS_PATTERNS: usize = 15;

/// Resolves the components section from the signal bundle. A kind with no
/// sampled element keeps an empty descriptor.
pub fn resolve(signals: &RawStyleSignals) -> Components {
    let samples = &signals.component_samples;
    Components {
        buttons: button_style(samples.buttons.as_ref()),
        cards: card_style(samples.cards.as_ref()),
        forms: Forms {
            inputs: input_style(samples.inputs.as_ref()),
        },
        navigation: navigation_style(samples.navigation.as_ref()),
        detected_css_patterns: detect_class_patterns(signals.class_frequencies()),
        sidebar: None,
    }
}

fn owned(sample: &StyleSample, property: &str) -> Option<String> {
    sample.get(property).map(str::to_string)
}

fn shadow(sample: &StyleSample) -> Option<String> {
    sample
        .get("box-shadow")
        .filter(|value| *value != "none")
        .map(str::to_string)
}

fn button_style(sample: Option<&StyleSample>) -> ButtonStyle {
    let Some(sample) = sample else {
        return ButtonStyle::default();
    };
    ButtonStyle {
        background_color: sample.get("background-color").and_then(Color::normalize),
        text_color: sample.get("color").and_then(Color::normalize),
        padding: owned(sample, "padding"),
        border: owned(sample, "border"),
        border_radius: owned(sample, "border-radius"),
        font_size: owned(sample, "font-size"),
        font_weight: owned(sample, "font-weight"),
        text_transform: owned(sample, "text-transform"),
    }
}

fn card_style(sample: Option<&StyleSample>) -> CardStyle {
    let Some(sample) = sample else {
        return CardStyle::default();
    };
    CardStyle {
        background_color: sample.get("background-color").and_then(Color::normalize),
        box_shadow: shadow(sample),
        border_radius: owned(sample, "border-radius"),
        padding: owned(sample, "padding"),
        border: owned(sample, "border"),
    }
}

fn input_style(sample: Option<&StyleSample>) -> InputStyle {
    let Some(sample) = sample else {
        return InputStyle::default();
    };
    InputStyle {
        border: owned(sample, "border"),
        border_radius: owned(sample, "border-radius"),
        padding: owned(sample, "padding"),
        background_color: sample.get("background-color").and_then(Color::normalize),
        font_size: owned(sample, "font-size"),
    }
}

fn navigation_style(sample: Option<&StyleSample>) -> NavigationStyle {
    let Some(sample) = sample else {
        return NavigationStyle::default();
    };
    NavigationStyle {
        background_color: sample.get("background-color").and_then(Color::normalize),
        height: owned(sample, "height"),
        box_shadow: shadow(sample),
        link_color: sample.get("link-color").and_then(Color::normalize),
    }
}

/// Filters the class counts down to recurring utility/framework tokens:
/// within the most frequent [`CLASS_FREQUENCY_WINDOW`] distinct tokens,
/// keep those appearing more than five times, longer than two characters,
/// and carrying a utility indicator; cap at fifteen, most frequent first.
fn detect_class_patterns(frequencies: Vec<(String, u32)>) -> Vec<String> {
    let mut ranked = frequencies;
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(CLASS_FREQUENCY_WINDOW);
    ranked
        .into_iter()
        .filter(|(token, count)| {
            *count > MIN_CLASS_OCCURRENCES
                && token.len() > MIN_CLASS_LENGTH
                && UTILITY_INDICATORS
                    .iter()
                    .any(|indicator| token.contains(indicator))
        })
        .map(|(token, _)| token)
        .take(MAX_CLASS_PATTERNS)
        .collect()
}
