use crate::parsers;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An opaque RGB color, canonically rendered as lowercase `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Canonicalizes a raw sampled color string.
    ///
    /// Only `rgb()`/`rgba()` forms are accepted: the string must carry an
    /// `rgb` marker (any case), and its first three numeric components are
    /// taken, clamped to bytes. Keyword and hex forms yield `None` here;
    /// hex is only produced by this crate, never consumed from samples.
    pub fn normalize(raw: &str) -> Option<Self> {
        if !raw.to_ascii_lowercase().contains("rgb") {
            return None;
        }
        parsers::parse_rgb_components(raw).ok().map(|(_, c)| c)
    }

    /// Parses the canonical `#rrggbb` form.
    pub fn from_hex(s: &str) -> Option<Self> {
        parsers::run_parser(parsers::parse_hex_color, s).ok()
    }

    /// A color is grayscale when its three byte pairs are pairwise equal.
    pub fn is_grayscale(&self) -> bool {
        self.r == self.g && self.g == self.b
    }

    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s)
            .or_else(|| Color::normalize(&s))
            .ok_or_else(|| de::Error::custom(format!("invalid color string: '{}'", s)))
    }
}

/// A semantic color slot in the resolved scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRole {
    Primary,
    Secondary,
    Accent,
    Background,
    Text,
}

impl ColorRole {
    pub const ALL: [ColorRole; 5] = [
        ColorRole::Primary,
        ColorRole::Secondary,
        ColorRole::Accent,
        ColorRole::Background,
        ColorRole::Text,
    ];

    /// The schema field name this role serializes under.
    pub fn field_name(&self) -> &'static str {
        match self {
            ColorRole::Primary => "primary_color",
            ColorRole::Secondary => "secondary_color",
            ColorRole::Accent => "accent_color",
            ColorRole::Background => "background_color",
            ColorRole::Text => "text_color",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ColorRole::Primary => "Primary",
            ColorRole::Secondary => "Secondary",
            ColorRole::Accent => "Accent",
            ColorRole::Background => "Background",
            ColorRole::Text => "Text",
        }
    }
}

/// The discovered palette: an ordered, deduplicated set of canonical
/// colors, capped at [`Palette::MAX_COLORS`]. Insertion order is first
/// discovery across the resolver passes and is what role assignment keys
/// off, so it must stay stable for identical inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub const MAX_COLORS: usize = 15;

    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a color unless it is already present or the cap is reached.
    pub fn insert(&mut self, color: Color) {
        if self.colors.len() >= Self::MAX_COLORS || self.colors.contains(&color) {
            return;
        }
        self.colors.push(color);
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Color> {
        self.colors.iter()
    }

    pub fn into_vec(self) -> Vec<Color> {
        self.colors
    }
}

/// The fully resolved color section of the schema. Every role is always
/// populated; downstream derivers rely on that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub primary_color: Color,
    pub secondary_color: Color,
    pub accent_color: Color,
    pub background_color: Color,
    pub text_color: Color,
    pub palette: Vec<Color>,
}

impl ColorScheme {
    pub fn role(&self, role: ColorRole) -> &Color {
        match role {
            ColorRole::Primary => &self.primary_color,
            ColorRole::Secondary => &self.secondary_color,
            ColorRole::Accent => &self.accent_color,
            ColorRole::Background => &self.background_color,
            ColorRole::Text => &self.text_color,
        }
    }
}
