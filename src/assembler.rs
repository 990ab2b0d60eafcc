//! Combines resolver outputs into the canonical [`DesignSchema`].

use crate::analyze::summary;
use crate::schema::color::ColorScheme;
use crate::schema::component::Components;
use crate::schema::image::Images;
use crate::schema::layout::Layout;
use crate::schema::typography::Typography;
use crate::schema::{DesignSchema, Metadata, SCHEMA_VERSION};
use chrono::{DateTime, SecondsFormat, Utc};

/// Assembles the schema from the resolved sections. Deterministic: the
/// only run-dependent field is the supplied timestamp, so two calls with
/// equal inputs produce byte-identical serializations.
pub fn assemble(
    source_url: &str,
    extracted_at: DateTime<Utc>,
    colors: ColorScheme,
    typography: Typography,
    layout: Layout,
    components: Components,
    images: Images,
) -> DesignSchema {
    let design_summary = summary::derive(&colors, &typography, &layout, &components, &images);
    DesignSchema {
        metadata: Metadata {
            source_url: source_url.to_string(),
            extraction_date: extracted_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            schema_version: SCHEMA_VERSION.to_string(),
            cms: None,
        },
        colors,
        typography,
        layout,
        components,
        images,
        design_summary,
    }
}
