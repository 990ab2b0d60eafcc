//! Filesystem persistence for extraction results.
//!
//! Layout next to the schema file `<prefix>.json`: an optional
//! `<prefix>_ai.json`, an optional `<prefix>_docs.md`, and an optional
//! `<prefix>_snippets/` directory holding one file per code snippet.

use crate::error::PipelineError;
use crate::pipeline::ExtractionResults;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes every produced artifact under the given schema path.
pub fn write_results(results: &ExtractionResults, schema_path: &Path) -> Result<(), PipelineError> {
    if let Some(parent) = schema_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(
        schema_path,
        serde_json::to_string_pretty(&results.schema)?,
    )?;
    info!("design schema saved to {}", schema_path.display());

    let base = base_path(schema_path);

    if let Some(ai_view) = &results.ai_view {
        let path = sibling(&base, "_ai.json");
        fs::write(&path, serde_json::to_string_pretty(ai_view)?)?;
        info!("AI view saved to {}", path.display());
    }

    if let Some(documentation) = &results.documentation {
        let path = sibling(&base, "_docs.md");
        fs::write(&path, documentation)?;
        info!("documentation saved to {}", path.display());
    }

    if let Some(snippets) = &results.code_snippets {
        let dir = sibling(&base, "_snippets");
        fs::create_dir_all(&dir)?;
        for (name, file_name, content) in snippets.entries() {
            let path = dir.join(file_name);
            fs::write(&path, content)?;
            info!("code snippet '{}' saved to {}", name, path.display());
        }
    }

    Ok(())
}

/// The schema path with its extension removed; related files derive
/// their names from it.
fn base_path(schema_path: &Path) -> PathBuf {
    match schema_path.file_stem() {
        Some(stem) => schema_path.with_file_name(stem),
        None => schema_path.to_path_buf(),
    }
}

fn sibling(base: &Path, suffix: &str) -> PathBuf {
    let mut name = base.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}
