//! Extraction pipeline orchestration.
//!
//! One synchronous run over one immutable signal bundle:
//!
//! 1. site-type classification (markup/URL signatures)
//! 2. the five resolvers, mutually independent
//! 3. schema assembly and keyword derivation
//! 4. advisory structural validation
//! 5. category-dispatched plugin enhancement
//! 6. artifact derivation, each deriver independent
//!
//! # Example
//!
//! ```ignore
//! use styleprint::{DesignPipeline, RawStyleSignals};
//!
//! let signals: RawStyleSignals = serde_json::from_str(&bundle)?;
//! let results = DesignPipeline::new().run(&signals)?;
//! println!("{}", serde_json::to_string_pretty(&results.schema)?);
//! ```

pub mod config;

pub use config::PipelineConfig;

use crate::artifact::{ai, code, docs, AiView, CodeSnippets};
use crate::error::PipelineError;
use crate::schema::DesignSchema;
use crate::signals::RawStyleSignals;
use crate::site::{self, SiteType};
use crate::validate::{self, ValidationIssue};
use crate::{analyze, assembler, plugin};
use chrono::Utc;
use log::{debug, info, warn};

/// The main extraction pipeline.
#[derive(Debug, Clone, Default)]
pub struct DesignPipeline {
    config: PipelineConfig,
}

/// Everything one run produces. Artifacts not requested by the
/// configuration are `None`.
#[derive(Debug, Clone)]
pub struct ExtractionResults {
    pub schema: DesignSchema,
    pub site_type: SiteType,
    pub applied_plugins: Vec<String>,
    pub validation_issues: Vec<ValidationIssue>,
    pub ai_view: Option<AiView>,
    pub code_snippets: Option<CodeSnippets>,
    pub documentation: Option<String>,
}

impl DesignPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Runs the full pipeline over one signal bundle.
    pub fn run(&self, signals: &RawStyleSignals) -> Result<ExtractionResults, PipelineError> {
        info!("starting design scheme extraction for {}", signals.source_url);

        let site_type = site::classify(&signals.markup, &signals.source_url);
        debug!("detected site type: {}", site_type);

        let colors = analyze::color::resolve(signals);
        let typography = analyze::typography::resolve(signals);
        let layout = analyze::layout::resolve(signals);
        let components = analyze::component::resolve(signals);
        let images = analyze::image::resolve(signals);

        let extracted_at = self.config.extraction_time.unwrap_or_else(Utc::now);
        let mut schema = assembler::assemble(
            &signals.source_url,
            extracted_at,
            colors,
            typography,
            layout,
            components,
            images,
        );

        let validation_issues = validate::validate(&schema)?;
        for issue in &validation_issues {
            warn!("schema validation: {}", issue);
        }

        let applied_plugins = plugin::enhance(&mut schema, site_type, &signals.markup);
        if !applied_plugins.is_empty() {
            info!("applied plugins: {}", applied_plugins.join(", "));
        }

        let ai_view = self.config.ai_view.then(|| ai::derive(&schema));
        let code_snippets = self.config.code_snippets.then(|| code::derive(&schema));
        let documentation = self.config.documentation.then(|| {
            docs::render(&schema, ai_view.as_ref().map(|view| &view.ai_consumption))
        });

        info!("design scheme extraction finished");
        Ok(ExtractionResults {
            schema,
            site_type,
            applied_plugins,
            validation_issues,
            ai_view,
            code_snippets,
            documentation,
        })
    }
}
