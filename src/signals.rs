//! The raw signal bundle the pipeline consumes.
//!
//! A [`RawStyleSignals`] value is produced by external collaborators (a
//! rendering session, a pixel clusterer, per-element computed-style
//! queries) and handed to the pipeline as one serializable bundle. It is
//! created fresh per analysis run, read-only to every resolver, and
//! discarded afterwards. The sampling contracts the collaborators follow
//! (which elements to probe for each component, how many elements to
//! sample for spacing) are pinned down by the selector constants below.

use crate::markup;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Selector list a collector walks, in order, to find one representative
/// visible button.
pub const BUTTON_SELECTORS: &[&str] = &[
    "button",
    ".button",
    ".btn",
    "[class*='button']",
    "[class*='btn']",
    "input[type='button']",
    "input[type='submit']",
    "a[role='button']",
];

/// Selector list for one representative card-like element.
pub const CARD_SELECTORS: &[&str] = &[
    ".card",
    "[class*='card']",
    "article",
    ".panel",
    "[class*='panel']",
    ".box",
    "[class*='box']",
    ".widget",
    "[class*='widget']",
];

/// Selector list for one representative form input.
pub const INPUT_SELECTORS: &[&str] = &[
    "input[type='text']",
    "input[type='email']",
    "input[type='password']",
    "input[type='search']",
    "textarea",
    "select",
];

/// Selector list for the main navigation or header element.
pub const NAVIGATION_SELECTORS: &[&str] = &[
    "nav",
    "header",
    ".navigation",
    ".navbar",
    "#navbar",
    "#main-nav",
    ".main-navigation",
    ".header",
    "#header",
];

/// Selector list for container candidates whose widths feed
/// [`RawStyleSignals::container_widths`].
pub const CONTAINER_SELECTORS: &[&str] = &[
    "main", ".main", "#main", ".container", "#container", ".content", "#content", ".wrapper",
    "#wrapper",
];

/// Selector list whose total match count feeds
/// [`RawStyleSignals::grid_element_count`].
pub const GRID_SELECTORS: &[&str] = &[
    ".row",
    ".grid",
    ".columns",
    "[class*='grid-']",
    "[class*='col-']",
    "[class*='span-']",
    "[class*='uk-grid']",
    "[class*='container']",
];

/// Element kinds a collector samples (up to 100 of them) for the
/// margin/padding values in [`RawStyleSignals::spacing_samples`].
pub const SPACING_SAMPLE_SELECTORS: &[&str] = &[
    "p", "div", "section", "article", "h1", "h2", "h3", "button", "img", "li",
];

/// One sampled element's computed styles, keyed by CSS property name.
///
/// For navigation samples the collector may add the pseudo-property
/// `link-color`, taken from the first visible link inside the element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleSample(BTreeMap<String, String>);

impl StyleSample {
    pub fn get(&self, property: &str) -> Option<&str> {
        self.0.get(property).map(String::as_str)
    }

    pub fn set(&mut self, property: &str, value: &str) {
        self.0.insert(property.to_string(), value.to_string());
    }

    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let mut sample = Self::default();
        for (property, value) in pairs {
            sample.set(property, value);
        }
        sample
    }
}

/// One raw CSS declaration lifted from a stylesheet rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

impl Declaration {
    pub fn new(property: &str, value: &str) -> Self {
        Self {
            property: property.to_string(),
            value: value.to_string(),
        }
    }
}

/// Computed text styles for the body element and any sampled headings
/// (keyed `h1`..`h6`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextSamples {
    #[serde(default)]
    pub body: StyleSample,
    #[serde(default)]
    pub headings: BTreeMap<String, StyleSample>,
}

/// At most one sampled style bag per component kind: the first visible
/// match over the corresponding selector list, or `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentSamples {
    #[serde(default)]
    pub buttons: Option<StyleSample>,
    #[serde(default)]
    pub cards: Option<StyleSample>,
    #[serde(default)]
    pub inputs: Option<StyleSample>,
    #[serde(default)]
    pub navigation: Option<StyleSample>,
}

/// Everything the pipeline knows about one page, in one read-only bundle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawStyleSignals {
    pub source_url: String,
    /// The fully rendered page markup.
    #[serde(default)]
    pub markup: String,
    /// Raw CSS fetched from external stylesheets, if the collector
    /// retrieved any; inline `<style>` blocks are read from the markup.
    #[serde(default)]
    pub css_blocks: Vec<String>,
    /// Dominant screenshot colors from the pixel clusterer, most dominant
    /// first.
    #[serde(default)]
    pub dominant_colors: Vec<(u8, u8, u8)>,
    /// Color-valued declarations lifted from stylesheet rules.
    #[serde(default)]
    pub declaration_values: Vec<Declaration>,
    /// Raw computed color strings (background, text, border) sampled from
    /// representative elements, in sampling order. Fully transparent
    /// values are omitted by the collector.
    #[serde(default)]
    pub computed_colors: Vec<String>,
    /// The root element's computed background color, when obtainable.
    #[serde(default)]
    pub root_background: Option<String>,
    /// The root element's computed text color, when obtainable.
    #[serde(default)]
    pub root_text_color: Option<String>,
    #[serde(default)]
    pub text_samples: TextSamples,
    #[serde(default)]
    pub page_width: Option<f64>,
    #[serde(default)]
    pub page_height: Option<f64>,
    /// Visible container-candidate widths, in document order.
    #[serde(default)]
    pub container_widths: Vec<f64>,
    /// How many grid-pattern elements the page contains.
    #[serde(default)]
    pub grid_element_count: usize,
    /// Non-normalized margin/padding values in observation order.
    #[serde(default)]
    pub spacing_samples: Vec<String>,
    #[serde(default)]
    pub component_samples: ComponentSamples,
    /// One image of at least 20x20 px, when the page has one.
    #[serde(default)]
    pub image_sample: Option<StyleSample>,
}

impl RawStyleSignals {
    /// An empty bundle for the given page. Useful as a fixture base; a
    /// real collector fills in whatever it managed to observe.
    pub fn for_url(url: &str) -> Self {
        Self {
            source_url: url.to_string(),
            ..Self::default()
        }
    }

    /// Class-token occurrence counts derived from the markup, first-seen
    /// order.
    pub fn class_frequencies(&self) -> Vec<(String, u32)> {
        markup::class_frequencies(&self.markup)
    }

    /// Inline style blocks from the markup followed by any externally
    /// fetched CSS text.
    pub fn style_blocks(&self) -> Vec<&str> {
        let mut blocks = markup::style_blocks(&self.markup);
        blocks.extend(self.css_blocks.iter().map(String::as_str));
        blocks
    }
}
