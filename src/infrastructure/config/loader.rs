//! Loads the notebook variables file into an in-memory YAML mapping.

use std::path::Path;

use serde_yaml::{Mapping, Value};
use tracing::debug;

use crate::domain::error::GenerateError;

/// Read and parse the variables file.
///
/// The root of the document must be a mapping; a scalar or sequence root is
/// rejected. The returned mapping is raw, i.e. `${...}` references inside
/// string values have not yet been expanded.
pub fn load_vars(path: &Path) -> Result<Mapping, GenerateError> {
    let content = std::fs::read_to_string(path).map_err(|err| {
        if err.kind() == std::io::ErrorKind::NotFound {
            GenerateError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            GenerateError::ConfigParse {
                path: path.to_path_buf(),
                detail: format!("failed to read: {err}"),
            }
        }
    })?;

    let value: Value = serde_yaml::from_str(&content).map_err(|err| GenerateError::ConfigParse {
        path: path.to_path_buf(),
        detail: err.to_string(),
    })?;

    match value {
        Value::Mapping(mapping) => {
            debug!(path = %path.display(), keys = mapping.len(), "loaded variables file");
            Ok(mapping)
        }
        other => Err(GenerateError::ConfigParse {
            path: path.to_path_buf(),
            detail: format!("root must be a mapping, got {}", kind_name(&other)),
        }),
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
