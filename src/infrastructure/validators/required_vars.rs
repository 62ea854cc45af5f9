//! Required-variable checks over the expanded mapping.
//!
//! The set of required variables is data, not code: a fixed table of
//! (dotted path, fallback environment variable) pairs. A variable counts as
//! present in the mapping only when every path segment resolves and the
//! final value is neither null nor an empty string; otherwise the paired
//! environment variable may satisfy it. The mapping itself is never
//! mutated by this check.

use serde::Serialize;
use serde_yaml::{Mapping, Value};
use tracing::debug;

use crate::domain::error::{GenerateError, MissingVar};
use crate::domain::ports::EnvLookup;

/// A required variable: where to look in the mapping, and which environment
/// variable may stand in for it.
#[derive(Debug, Clone, Copy)]
pub struct RequiredVar {
    /// Dotted path inside the variables mapping.
    pub path: &'static str,
    /// Fallback environment variable name.
    pub env_var: &'static str,
}

/// The variables every notebook run needs.
pub const REQUIRED_VARS: [RequiredVar; 5] = [
    RequiredVar {
        path: "work_dir",
        env_var: "WORK_DIR",
    },
    RequiredVar {
        path: "oc_api_url",
        env_var: "OC_API_URL",
    },
    RequiredVar {
        path: "oc_catalog_name",
        env_var: "OC_CATALOG_NAME",
    },
    RequiredVar {
        path: "demo_namespace",
        env_var: "DEMO_NAMESPACE",
    },
    RequiredVar {
        path: "demo_table_name",
        env_var: "DEMO_TABLE_NAME",
    },
];

/// Where a satisfied variable came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VarSource {
    /// Present in the variables file with a usable value.
    Config,
    /// Absent from the file but covered by its environment variable.
    Environment,
}

/// Disposition of one required variable after checking.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct VarCheck {
    /// Dotted path inside the variables mapping.
    pub path: &'static str,
    /// Fallback environment variable name.
    pub env_var: &'static str,
    /// How the variable was satisfied.
    pub source: VarSource,
}

/// Check every required variable against the mapping and the environment.
///
/// Returns one [`VarCheck`] per variable on success. If any variable is
/// satisfied by neither source, returns [`GenerateError::Validation`]
/// listing all of the missing ones.
pub fn check_required<E: EnvLookup>(
    vars: &Mapping,
    env: &E,
) -> Result<Vec<VarCheck>, GenerateError> {
    let mut checks = Vec::with_capacity(REQUIRED_VARS.len());
    let mut missing = Vec::new();

    for required in &REQUIRED_VARS {
        if resolve_path(vars, required.path).is_some_and(has_value) {
            debug!(path = required.path, "required variable found in variables file");
            checks.push(VarCheck {
                path: required.path,
                env_var: required.env_var,
                source: VarSource::Config,
            });
        } else if env.var(required.env_var).is_some_and(|v| !v.is_empty()) {
            debug!(
                path = required.path,
                env_var = required.env_var,
                "required variable satisfied via environment"
            );
            checks.push(VarCheck {
                path: required.path,
                env_var: required.env_var,
                source: VarSource::Environment,
            });
        } else {
            missing.push(MissingVar {
                path: required.path,
                env_var: required.env_var,
            });
        }
    }

    if missing.is_empty() {
        Ok(checks)
    } else {
        Err(GenerateError::Validation { missing })
    }
}

/// Walk a dotted path through nested mappings.
fn resolve_path<'a>(vars: &'a Mapping, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let first = segments.next()?;
    let mut current = vars.get(Value::String(first.to_string()))?;

    for segment in segments {
        current = current
            .as_mapping()?
            .get(Value::String(segment.to_string()))?;
    }
    Some(current)
}

/// Null and empty-string values do not count as present.
fn has_value(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}
