//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (NamespaceSource) but are
//! themselves concrete structs, not traits.

mod namespace_tree;

pub use namespace_tree::NamespaceTreeService;
