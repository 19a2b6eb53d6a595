//! Namespace source reading a manifest file
//!
//! Accepts the output of `kubectl get namespaces -o yaml` (or `-o json`):
//! a `NamespaceList`/`List` object with `items`, a bare sequence of
//! namespace objects, or a single namespace object.

use std::io::Read;
use std::path::PathBuf;

use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::domain::Resource;
use crate::infrastructure::namespace::resource_from_meta;
use crate::infrastructure::traits::NamespaceSource;
use crate::infrastructure::{InfraError, InfraResult};

/// Path that selects stdin instead of a file.
pub const STDIN_PATH: &str = "-";

#[derive(Debug, Deserialize)]
struct NamespaceObject {
    #[serde(default)]
    metadata: ObjectMeta,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Manifest {
    List { items: Vec<NamespaceObject> },
    Sequence(Vec<NamespaceObject>),
    Single(NamespaceObject),
}

impl Manifest {
    fn into_items(self) -> Vec<NamespaceObject> {
        match self {
            Manifest::List { items } | Manifest::Sequence(items) => items,
            Manifest::Single(ns) => vec![ns],
        }
    }
}

/// Parse manifest text (YAML or JSON) into resources.
pub fn parse_manifest(content: &str, annotation: &str) -> Result<Vec<Resource>, String> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    let manifest: Manifest = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
    Ok(manifest
        .into_items()
        .iter()
        .filter_map(|ns| resource_from_meta(&ns.metadata, annotation))
        .collect())
}

/// Reads namespaces from a manifest file, or stdin for `-`.
#[derive(Debug, Clone)]
pub struct ManifestSource {
    path: PathBuf,
    annotation: String,
}

impl ManifestSource {
    pub fn new(path: impl Into<PathBuf>, annotation: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            annotation: annotation.into(),
        }
    }

    /// Read the manifest text; `stdin` is only consumed for the `-` path.
    fn read<R: Read>(&self, mut stdin: R) -> InfraResult<String> {
        if self.path.as_os_str() == STDIN_PATH {
            let mut content = String::new();
            stdin
                .read_to_string(&mut content)
                .map_err(|e| InfraError::io("read manifest from stdin", e))?;
            return Ok(content);
        }
        std::fs::read_to_string(&self.path)
            .map_err(|e| InfraError::io(format!("read {}", self.path.display()), e))
    }
}

impl NamespaceSource for ManifestSource {
    #[instrument(level = "debug", skip(self), fields(path = %self.path.display()))]
    fn fetch(&self) -> InfraResult<Vec<Resource>> {
        let content = self.read(std::io::stdin().lock())?;
        let resources =
            parse_manifest(&content, &self.annotation).map_err(|message| InfraError::Manifest {
                path: self.path.clone(),
                message,
            })?;
        debug!("fetch: {} namespaces", resources.len());
        Ok(resources)
    }
}
