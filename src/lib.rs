//! Design scheme extraction engine.
//!
//! Turns a bag of raw, noisy visual-style observations collected from a
//! single web page (sampled colors, computed CSS properties, class
//! frequencies, font declarations) into one canonical, internally
//! consistent [`DesignSchema`], then re-derives consistent artifacts
//! from it: an AI-consumption view, generator-ready theme code, and
//! human documentation.
//!
//! Page retrieval, DOM rendering, and pixel clustering are external
//! collaborators; they hand their observations over as one serializable
//! [`RawStyleSignals`] bundle and this crate does the rest.

pub mod analyze;
pub mod artifact;
pub mod assembler;
pub mod error;
pub mod markup;
pub mod output;
pub mod parsers;
pub mod pipeline;
pub mod plugin;
pub mod schema;
pub mod signals;
pub mod site;
pub mod validate;

pub use error::PipelineError;
pub use pipeline::{DesignPipeline, ExtractionResults, PipelineConfig};
pub use schema::DesignSchema;
pub use signals::RawStyleSignals;
pub use site::SiteType;
