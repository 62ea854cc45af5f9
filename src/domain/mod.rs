//! Domain layer: error taxonomy and the environment port.

pub mod error;
pub mod ports;

pub use error::{GenerateError, MissingVar};
pub use ports::{EnvLookup, ProcessEnv};
