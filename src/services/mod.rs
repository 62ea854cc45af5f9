//! Service layer: pipeline orchestration.

pub mod pipeline;

pub use pipeline::Pipeline;
