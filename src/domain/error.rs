//! Failure taxonomy for a generation run.
//!
//! Every variant is fatal: the pipeline stops at the first error and `main`
//! exits non-zero after printing the diagnostic. No error is recoverable
//! within a run.

use std::path::PathBuf;
use thiserror::Error;

/// A required variable that was found in neither the variables file nor the
/// environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingVar {
    /// Dotted path inside the variables mapping.
    pub path: &'static str,
    /// Name of the fallback environment variable.
    pub env_var: &'static str,
}

/// Errors raised by the generation pipeline, one variant per stage failure.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("variables file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("failed to parse variables file {path}: {detail}")]
    ConfigParse { path: PathBuf, detail: String },

    #[error("missing required variables:\n{}", format_missing(.missing))]
    Validation { missing: Vec<MissingVar> },

    #[error("template file not found: {path}")]
    TemplateNotFound { path: PathBuf },

    #[error("template rendering failed: {detail}")]
    Render { detail: String },

    #[error("rendered notebook is not valid JSON: {detail}")]
    OutputFormat { detail: String },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn format_missing(missing: &[MissingVar]) -> String {
    missing
        .iter()
        .map(|var| {
            format!(
                "  - '{}' not found in the variables file and environment variable '{}' not set",
                var.path, var.env_var
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
