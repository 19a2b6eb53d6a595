//! Namespace tree service
//!
//! Lists namespaces from a source, builds the forest and renders it.

use std::io::Write;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::render::{render, OutputFormat};
use crate::application::ApplicationResult;
use crate::domain::{build_forest, Node};
use crate::infrastructure::traits::NamespaceSource;

/// Service for showing the namespace hierarchy.
pub struct NamespaceTreeService {
    source: Arc<dyn NamespaceSource>,
}

impl NamespaceTreeService {
    /// Create a new namespace tree service.
    pub fn new(source: Arc<dyn NamespaceSource>) -> Self {
        Self { source }
    }

    /// Fetch all namespaces and build the ordered forest.
    #[instrument(level = "debug", skip(self))]
    pub fn forest(&self) -> ApplicationResult<Vec<Node>> {
        let resources = self.source.fetch()?;
        debug!("forest: fetched {} namespaces", resources.len());
        Ok(build_forest(&resources))
    }

    /// Fetch, build and write the forest in `format`.
    #[instrument(level = "debug", skip(self, out))]
    pub fn show<W: Write + ?Sized>(
        &self,
        format: OutputFormat,
        out: &mut W,
    ) -> ApplicationResult<()> {
        let roots = self.forest()?;
        render(format, &roots, out)?;
        Ok(())
    }
}
