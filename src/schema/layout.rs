use serde::{Deserialize, Serialize};

/// The resolved layout section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub page_dimensions: PageDimensions,
    /// Absent means the content spans the full page width.
    pub container_width: Option<f64>,
    pub has_grid_system: bool,
    /// Up to five recurring spacing magnitudes, pixel-suffixed, ordered by
    /// descending observed frequency (ties by first observation).
    pub common_spacing_units: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageDimensions {
    pub width: Option<f64>,
    pub height: Option<f64>,
}
