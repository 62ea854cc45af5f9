//! Command-line interface.

pub mod output;
pub mod types;

pub use types::Cli;
