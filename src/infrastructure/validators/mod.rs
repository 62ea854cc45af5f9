//! Validation of the expanded variables mapping.

pub mod required_vars;

pub use required_vars::{check_required, RequiredVar, VarCheck, VarSource, REQUIRED_VARS};
