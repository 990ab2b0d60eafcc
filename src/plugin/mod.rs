//! Category-dispatched schema enhancement plugins.
//!
//! A plugin is one capability: given a mutable schema and the raw
//! markup, add whatever its platform knowledge allows. The registry is
//! process-wide, populated on first access, and never mutated at
//! runtime. A failing plugin is logged and skipped; the remaining
//! plugins still run.

pub mod wordpress;

pub use wordpress::WordPressEnhancer;

use crate::schema::DesignSchema;
use crate::site::SiteType;
use log::{debug, warn};
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnhanceError {
    #[error("enhancement failed: {0}")]
    Failed(String),
}

/// The single plugin capability: enhance a schema in place.
pub trait SchemaEnhancer: Send + Sync {
    fn name(&self) -> &'static str;

    /// The site categories this plugin knows something about.
    fn categories(&self) -> &'static [SiteType];

    fn applies_to(&self, site: SiteType) -> bool {
        self.categories().contains(&site)
    }

    fn enhance(&self, schema: &mut DesignSchema, markup: &str) -> Result<(), EnhanceError>;
}

/// The built-in plugin registry.
pub fn registry() -> &'static [Box<dyn SchemaEnhancer>] {
    static REGISTRY: OnceLock<Vec<Box<dyn SchemaEnhancer>>> = OnceLock::new();
    REGISTRY.get_or_init(|| vec![Box::new(WordPressEnhancer)])
}

/// Applies every registered plugin whose category set contains the
/// detected site type, returning the names of those that succeeded.
pub fn enhance(schema: &mut DesignSchema, site: SiteType, markup: &str) -> Vec<String> {
    enhance_with(registry(), schema, site, markup)
}

/// Same as [`enhance`], against an explicit plugin set.
pub fn enhance_with(
    plugins: &[Box<dyn SchemaEnhancer>],
    schema: &mut DesignSchema,
    site: SiteType,
    markup: &str,
) -> Vec<String> {
    let mut applied = Vec::new();
    for plugin in plugins {
        if !plugin.applies_to(site) {
            continue;
        }
        match plugin.enhance(schema, markup) {
            Ok(()) => {
                debug!("applied plugin {}", plugin.name());
                applied.push(plugin.name().to_string());
            }
            Err(e) => warn!("plugin {} failed: {}; continuing", plugin.name(), e),
        }
    }
    applied
}
