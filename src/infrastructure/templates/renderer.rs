//! Renders the notebook template with Jinja-style custom delimiters.
//!
//! The delimiters are `<< >>` for expressions, `<% %>` for control blocks
//! and `<# #>` for comments, so the template body can carry the notebook's
//! own `{ }` / `{{ }}` JSON text verbatim. Block-control lines are trimmed
//! (`trim_blocks` + `lstrip_blocks`) so loops and conditionals leave no
//! stray blank lines or indentation in the output.

use std::path::Path;

use minijinja::syntax::SyntaxConfig;
use minijinja::Environment;
use serde_yaml::Mapping;
use tracing::debug;

use crate::domain::error::GenerateError;

/// Load the template file and render it against the expanded variables
/// mapping, which becomes the top-level variable namespace.
pub fn render_template(path: &Path, vars: &Mapping) -> Result<String, GenerateError> {
    let source = std::fs::read_to_string(path).map_err(|err| {
        if err.kind() == std::io::ErrorKind::NotFound {
            GenerateError::TemplateNotFound {
                path: path.to_path_buf(),
            }
        } else {
            GenerateError::Render {
                detail: format!("failed to read {}: {err}", path.display()),
            }
        }
    })?;

    debug!(path = %path.display(), bytes = source.len(), "loaded template");
    render_str(&source, vars)
}

/// Render template source text against the variables mapping.
pub fn render_str(source: &str, vars: &Mapping) -> Result<String, GenerateError> {
    let mut env = Environment::new();

    let syntax = SyntaxConfig::builder()
        .block_delimiters("<%", "%>")
        .variable_delimiters("<<", ">>")
        .comment_delimiters("<#", "#>")
        .build()
        .map_err(|err| GenerateError::Render {
            detail: err.to_string(),
        })?;
    env.set_syntax(syntax);
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);

    let template = env
        .template_from_str(source)
        .map_err(|err| GenerateError::Render {
            detail: err.to_string(),
        })?;

    template.render(vars).map_err(|err| GenerateError::Render {
        detail: err.to_string(),
    })
}
