//! The linear generation pipeline.
//!
//! Stages run strictly in order: load variables, expand environment
//! references, check required variables, render the template, materialize
//! the notebook. The first failing stage aborts the run; no partial output
//! is ever written because materialization parses before it writes.

use std::path::Path;

use tracing::info;

use crate::cli::output;
use crate::domain::error::GenerateError;
use crate::domain::ports::{EnvLookup, ProcessEnv};
use crate::infrastructure::config::{expand_mapping, load_vars};
use crate::infrastructure::materializer::materialize;
use crate::infrastructure::templates::render_template;
use crate::infrastructure::validators::{check_required, VarSource};

/// Runs the five pipeline stages against one environment.
pub struct Pipeline<E: EnvLookup = ProcessEnv> {
    env: E,
    quiet: bool,
}

impl Pipeline<ProcessEnv> {
    /// Pipeline over the real process environment.
    pub fn new(quiet: bool) -> Self {
        Self::with_env(ProcessEnv, quiet)
    }
}

impl<E: EnvLookup> Pipeline<E> {
    /// Pipeline over an explicit environment, for tests and embedding.
    pub const fn with_env(env: E, quiet: bool) -> Self {
        Self { env, quiet }
    }

    /// Run the full pipeline. Any stage error aborts the rest of the run.
    pub fn run(
        &self,
        vars_path: &Path,
        template_path: &Path,
        output_path: &Path,
    ) -> Result<(), GenerateError> {
        self.stage(&format!("loading variables from {}", vars_path.display()));
        let raw = load_vars(vars_path)?;
        info!(keys = raw.len(), "variables file loaded");

        let vars = expand_mapping(raw, &self.env);

        self.stage("checking required variables");
        let checks = check_required(&vars, &self.env)?;
        if !self.quiet {
            for check in &checks {
                match check.source {
                    VarSource::Config => {
                        output::ok(&format!("'{}' found in variables file", check.path));
                    }
                    VarSource::Environment => {
                        output::note(&format!(
                            "'{}' taken from environment variable '{}'",
                            check.path, check.env_var
                        ));
                    }
                }
            }
        }

        self.stage(&format!("rendering template {}", template_path.display()));
        let rendered = render_template(template_path, &vars)?;
        info!(bytes = rendered.len(), "template rendered");

        self.stage(&format!("writing notebook to {}", output_path.display()));
        materialize(&rendered, output_path)?;

        if !self.quiet {
            output::done(&format!("notebook written to {}", output_path.display()));
        }
        Ok(())
    }

    fn stage(&self, msg: &str) {
        if !self.quiet {
            output::stage(msg);
        }
    }
}
