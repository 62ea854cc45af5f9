//! Infrastructure layer: file loading, environment expansion, validation,
//! template rendering, and notebook output.

pub mod config;
pub mod materializer;
pub mod templates;
pub mod validators;
