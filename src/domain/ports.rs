//! Ports: seams between the pipeline and the outside world.

use std::collections::HashMap;

/// Read-only access to an environment-variable namespace.
///
/// The expander and the required-variable check both consult the
/// environment; taking it through this trait lets tests substitute a fixed
/// map for the real process environment.
pub trait EnvLookup {
    /// Look up a variable by name. `None` means unset; an empty string is a
    /// set-but-empty variable and is returned as such.
    fn var(&self, name: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Fixed environment backed by a map, for tests and embedding.
impl EnvLookup for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}
