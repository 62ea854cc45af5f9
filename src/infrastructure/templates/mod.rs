//! Notebook template rendering.

pub mod renderer;

pub use renderer::render_template;
