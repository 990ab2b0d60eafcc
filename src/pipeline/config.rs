use chrono::{DateTime, Utc};

/// Configuration for a single extraction run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Derive the AI-consumption view.
    pub ai_view: bool,
    /// Derive the theme-code snippet set.
    pub code_snippets: bool,
    /// Derive the markdown documentation.
    pub documentation: bool,
    /// Fix the extraction timestamp instead of reading the clock; makes
    /// runs byte-for-byte reproducible.
    pub extraction_time: Option<DateTime<Utc>>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            ai_view: true,
            code_snippets: true,
            documentation: true,
            extraction_time: None,
        }
    }
}

impl PipelineConfig {
    pub fn without_ai_view(mut self) -> Self {
        self.ai_view = false;
        self
    }

    pub fn without_code_snippets(mut self) -> Self {
        self.code_snippets = false;
        self
    }

    pub fn without_documentation(mut self) -> Self {
        self.documentation = false;
        self
    }

    pub fn with_extraction_time(mut self, when: DateTime<Utc>) -> Self {
        self.extraction_time = Some(when);
        self
    }
}
