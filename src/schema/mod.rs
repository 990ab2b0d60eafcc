//! The canonical design schema and its section types.
//!
//! This module is the "language" of the extraction pipeline: stable data
//! types describing a page's visual identity, with no knowledge of how
//! the values were obtained. Resolvers produce sections, the assembler
//! combines them, and every derived artifact is a pure function of the
//! resulting [`DesignSchema`].

pub mod color;
pub mod component;
pub mod image;
pub mod layout;
pub mod typography;

pub use color::{Color, ColorRole, ColorScheme, Palette};
pub use component::{
    ButtonStyle, CardStyle, Components, Forms, InputStyle, NavigationStyle, SidebarStyle,
};
pub use image::{ImageStyle, Images};
pub use layout::{Layout, PageDimensions};
pub use typography::{BodyTypography, HeadingTypography, Typography};

use serde::{Deserialize, Serialize};

/// The fixed version string stamped into every schema this crate emits.
pub const SCHEMA_VERSION: &str = "1.0";

/// The canonical structured description of a page's visual language.
///
/// Treated as immutable once returned from the pipeline; artifact
/// derivers clone it before adding anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignSchema {
    pub metadata: Metadata,
    pub colors: ColorScheme,
    pub typography: Typography,
    pub layout: Layout,
    pub components: Components,
    pub images: Images,
    pub design_summary: DesignSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub source_url: String,
    /// ISO-8601 extraction timestamp.
    pub extraction_date: String,
    pub schema_version: String,
    /// Populated by CMS-aware enhancement plugins only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cms: Option<CmsInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CmsInfo {
    #[serde(rename = "type")]
    pub kind: String,
    pub theme: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DesignSummary {
    /// Qualitative style tags, alphabetically ordered.
    pub style_keywords: Vec<String>,
}
