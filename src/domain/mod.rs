//! Domain layer: entities and forest construction
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod builder;
pub mod entities;

pub use builder::{build_forest, ForestBuilder};
pub use entities::{Node, Resource};
