//! CLI type definitions
//!
//! This module contains the clap structure that defines the CLI interface.
//! nbgen is single-purpose, so the interface is flags-only: three path
//! overrides plus a quiet switch.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the notebook generator.
#[derive(Parser, Debug)]
#[command(name = "nbgen")]
#[command(about = "Materialize the setup-verification notebook from its template", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the YAML variables file
    #[arg(long, env = "NBGEN_VARS", default_value = "notebook_vars.yml")]
    pub vars: PathBuf,

    /// Path to the notebook template
    #[arg(
        long,
        env = "NBGEN_TEMPLATE",
        default_value = "notebooks/verify_setup.ipynb.j2"
    )]
    pub template: PathBuf,

    /// Where the generated notebook is written
    #[arg(
        short,
        long,
        env = "NBGEN_OUTPUT",
        default_value = "notebooks/verify_setup.ipynb"
    )]
    pub output: PathBuf,

    /// Suppress progress output (errors still go to stderr)
    #[arg(short, long)]
    pub quiet: bool,
}
