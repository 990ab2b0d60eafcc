use thiserror::Error;

/// Top-level error type for the extraction pipeline.
///
/// The resolvers themselves never fail (unavailable signals degrade to
/// per-field fallbacks), so errors only arise at the serialization and
/// persistence boundaries.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
