//! Infrastructure layer: namespace sources and DI container
//!
//! This layer implements the I/O boundary traits and wires up services.

pub mod cluster;
pub mod di;
pub mod error;
pub mod manifest;
pub mod namespace;
pub mod traits;

pub use cluster::ClusterSource;
pub use error::{InfraError, InfraResult};
pub use manifest::ManifestSource;
pub use namespace::SUBNAMESPACE_OF_ANNOTATION;
pub use traits::{NamespaceSource, StaticSource};
