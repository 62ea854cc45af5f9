//! Variables file loading and environment expansion.

pub mod expander;
pub mod loader;

pub use expander::{expand_mapping, expand_str, expand_value};
pub use loader::load_vars;
