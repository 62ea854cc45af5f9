//! nbgen - Notebook template materializer
//!
//! nbgen renders a Jinja-style notebook template (with `<< >>` / `<% %>` /
//! `<# #>` delimiters, chosen so the template stays valid-looking JSON)
//! against a YAML variables file whose string values may embed `${VAR}` and
//! `${VAR:-default}` environment references, then writes the result as a
//! pretty-printed Jupyter notebook.
//!
//! # Architecture
//!
//! The crate is a single linear pipeline with no retained state:
//!
//! - **Domain Layer** (`domain`): error taxonomy and the environment port
//! - **Infrastructure Layer** (`infrastructure`): variables loading,
//!   environment expansion, required-variable checks, template rendering,
//!   notebook materialization
//! - **Service Layer** (`services`): pipeline orchestration
//! - **CLI Layer** (`cli`): command-line interface and progress output
//!
//! # Example
//!
//! ```ignore
//! use nbgen::{Pipeline, ProcessEnv};
//!
//! fn main() -> Result<(), nbgen::GenerateError> {
//!     let pipeline = Pipeline::with_env(ProcessEnv, false);
//!     pipeline.run(
//!         "notebook_vars.yml".as_ref(),
//!         "notebooks/verify_setup.ipynb.j2".as_ref(),
//!         "notebooks/verify_setup.ipynb".as_ref(),
//!     )
//! }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::error::{GenerateError, MissingVar};
pub use domain::ports::{EnvLookup, ProcessEnv};
pub use infrastructure::config::{expand_mapping, expand_str, expand_value, load_vars};
pub use infrastructure::validators::{check_required, RequiredVar, VarCheck, VarSource};
pub use services::Pipeline;
