use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The resolved typography section.
///
/// `body` is always present with per-field defaults; a heading level is
/// present only when family, size, and weight were all obtainable for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Typography {
    pub headings: BTreeMap<String, HeadingTypography>,
    pub body: BodyTypography,
    pub font_imports: Vec<String>,
    pub custom_fonts_detected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyTypography {
    /// The full font stack, quotes stripped.
    pub font_family: String,
    pub font_size: String,
    pub font_weight: String,
    pub line_height: String,
}

impl Default for BodyTypography {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            font_size: "16px".to_string(),
            font_weight: "400".to_string(),
            line_height: "normal".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadingTypography {
    pub font_family: String,
    pub font_size: String,
    pub font_weight: String,
}

impl Typography {
    /// The font family that best represents headings: the first of h1..h3
    /// with a descriptor, falling back to the body family.
    pub fn heading_family(&self) -> &str {
        for level in ["h1", "h2", "h3"] {
            if let Some(heading) = self.headings.get(level) {
                return &heading.font_family;
            }
        }
        &self.body.font_family
    }
}

/// The first entry of a font stack, trimmed and unquoted, for use in
/// generated theme code.
pub fn first_family(stack: &str) -> String {
    stack
        .split(',')
        .next()
        .unwrap_or(stack)
        .trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .to_string()
}
