use serde::{Deserialize, Serialize};

/// The resolved image and icon section.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Images {
    pub has_svg_icons: bool,
    pub has_icon_font: bool,
    /// Icon-font class tokens found in the markup, first-seen order,
    /// capped at ten.
    pub icon_classes_found: Vec<String>,
    pub image_style: ImageStyle,
    pub logo_detected: bool,
    pub logo_url: Option<String>,
}

/// Decoration sampled from one representative image. Each attribute is
/// recorded only when it differs from its CSS initial value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ImageStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub box_shadow: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

impl ImageStyle {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
