//! Application layer: services and renderers
//!
//! This layer orchestrates domain logic and depends on I/O boundary traits.

pub mod error;
pub mod render;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use render::{
    render, render_json, render_tree, render_yaml, OutputFormat, RenderError, RenderResult,
    ToTermTree,
};
