//! I/O boundary traits for testability
//!
//! The services only see [`NamespaceSource`], so they can be tested with an
//! in-memory list instead of a cluster.

use crate::domain::Resource;
use crate::infrastructure::InfraResult;

/// Supplies the flat namespace list a forest is built from.
pub trait NamespaceSource: Send + Sync {
    /// List every namespace, in any order.
    fn fetch(&self) -> InfraResult<Vec<Resource>>;
}

/// Fixed, in-memory namespace list.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    resources: Vec<Resource>,
}

impl StaticSource {
    pub fn new(resources: Vec<Resource>) -> Self {
        Self { resources }
    }
}

impl NamespaceSource for StaticSource {
    fn fetch(&self) -> InfraResult<Vec<Resource>> {
        Ok(self.resources.clone())
    }
}
