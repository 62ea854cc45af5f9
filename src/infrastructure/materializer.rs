//! Parses rendered notebook text and writes the canonical JSON document.
//!
//! The rendered text must be valid JSON; parsing it before anything touches
//! the disk guarantees a failed render never leaves a broken notebook
//! behind. Serialization is stable and human-readable: two-space indent,
//! key insertion order preserved, non-ASCII characters written verbatim.

use std::path::Path;

use tracing::debug;

use crate::domain::error::GenerateError;

/// Parse the rendered text and write it to the output path, creating any
/// missing parent directories. Returns the parsed notebook tree.
pub fn materialize(rendered: &str, output_path: &Path) -> Result<serde_json::Value, GenerateError> {
    let notebook: serde_json::Value =
        serde_json::from_str(rendered).map_err(|err| GenerateError::OutputFormat {
            detail: err.to_string(),
        })?;

    let pretty = serde_json::to_string_pretty(&notebook).map_err(|err| {
        GenerateError::OutputFormat {
            detail: err.to_string(),
        }
    })?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|err| GenerateError::Write {
                path: output_path.to_path_buf(),
                source: err,
            })?;
        }
    }

    std::fs::write(output_path, pretty).map_err(|err| GenerateError::Write {
        path: output_path.to_path_buf(),
        source: err,
    })?;

    debug!(path = %output_path.display(), "wrote notebook");
    Ok(notebook)
}
