//! Service container for dependency injection
//!
//! Wires up the namespace source selected by the settings.

use std::sync::Arc;

use crate::application::services::NamespaceTreeService;
use crate::config::Settings;
use crate::infrastructure::traits::NamespaceSource;
use crate::infrastructure::{ClusterSource, ManifestSource};

/// Container holding the settings and the namespace source for one run.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Where namespaces come from
    pub source: Arc<dyn NamespaceSource>,
}

impl ServiceContainer {
    /// Create a container with the real source: the manifest file if one is
    /// configured, the cluster otherwise.
    pub fn new(settings: Settings) -> Self {
        let source: Arc<dyn NamespaceSource> = match &settings.file {
            Some(path) => Arc::new(ManifestSource::new(path.clone(), settings.annotation.clone())),
            None => Arc::new(ClusterSource::new(
                settings.kubeconfig.clone(),
                settings.context.clone(),
                settings.annotation.clone(),
            )),
        };
        Self::with_deps(settings, source)
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, source: Arc<dyn NamespaceSource>) -> Self {
        let settings = Arc::new(settings);

        Self { settings, source }
    }

    pub fn namespace_tree(&self) -> NamespaceTreeService {
        NamespaceTreeService::new(Arc::clone(&self.source))
    }
}
