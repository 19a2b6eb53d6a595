//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Config file: `$XDG_CONFIG_HOME/hns-tree/hns-tree.toml` (or `--config <PATH>`)
//! 3. Environment variables: `HNS_TREE_*` prefix
//! 4. Command line flags (applied by the CLI layer)

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::Deserialize;

use crate::application::{ApplicationError, OutputFormat};
use crate::infrastructure::SUBNAMESPACE_OF_ANNOTATION;

/// Prefix of the environment variables read as overrides.
pub const ENV_PREFIX: &str = "HNS_TREE";

/// Unified configuration for hns-tree.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Kubeconfig file (default: `$KUBECONFIG`, then `~/.kube/config`)
    pub kubeconfig: Option<PathBuf>,
    /// Kubeconfig context (default: current context)
    pub context: Option<String>,
    /// Read namespaces from this manifest instead of the cluster
    pub file: Option<PathBuf>,
    /// Output format
    pub output: OutputFormat,
    /// Annotation naming a namespace's parent
    pub annotation: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            kubeconfig: None,
            context: None,
            file: None,
            output: OutputFormat::default(),
            annotation: SUBNAMESPACE_OF_ANNOTATION.to_string(),
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub kubeconfig: Option<PathBuf>,
    pub context: Option<String>,
    pub file: Option<PathBuf>,
    pub output: Option<OutputFormat>,
    pub annotation: Option<String>,
}

/// Get the XDG config directory for hns-tree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "hns-tree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("hns-tree.toml"))
}

/// Environment source for `HNS_TREE_*` overrides, e.g. `HNS_TREE_OUTPUT=json`.
pub fn env_overrides() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
}

/// Expand shell variables and tilde in a path.
pub fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    shellexpand::full(raw.as_ref())
        .map(|s| PathBuf::from(s.into_owned()))
        .unwrap_or_else(|_| path.to_path_buf())
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Load settings from defaults, the global config file and `HNS_TREE_*` variables.
    pub fn load() -> Result<Self, ApplicationError> {
        let global = global_config_path().filter(|p| p.exists());
        Self::load_from(global.as_deref(), env_overrides())
    }

    /// Load settings from an optional config file and an environment source.
    ///
    /// A config file that is passed explicitly must exist.
    pub fn load_from(config_file: Option<&Path>, env: Environment) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(path) = config_file {
            let raw = load_raw_settings(path)?;
            current = current.merge_with(&raw);
        }

        current = current.apply_env_overrides(env)?;
        current.expand_paths();

        Ok(current)
    }

    /// Overlay wins for every field it specifies.
    pub fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            kubeconfig: overlay.kubeconfig.clone().or_else(|| self.kubeconfig.clone()),
            context: overlay.context.clone().or_else(|| self.context.clone()),
            file: overlay.file.clone().or_else(|| self.file.clone()),
            output: overlay.output.unwrap_or(self.output),
            annotation: overlay
                .annotation
                .clone()
                .unwrap_or_else(|| self.annotation.clone()),
        }
    }

    /// Apply environment variables as explicit overrides.
    fn apply_env_overrides(mut self, env: Environment) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(env)
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("kubeconfig") {
            self.kubeconfig = Some(PathBuf::from(val));
        }
        if let Ok(val) = config.get_string("context") {
            self.context = Some(val);
        }
        if let Ok(val) = config.get_string("file") {
            self.file = Some(PathBuf::from(val));
        }
        if let Ok(val) = config.get_string("annotation") {
            self.annotation = val;
        }
        // An unknown format is an error rather than silently ignored
        match config.get::<OutputFormat>("output") {
            Ok(val) => self.output = val,
            Err(ConfigError::NotFound(_)) => {}
            Err(e) => return Err(config_err(e)),
        }

        Ok(self)
    }

    /// Expand `~` and `$VAR` in path-like fields.
    pub fn expand_paths(&mut self) {
        self.kubeconfig = self.kubeconfig.as_deref().map(expand_path);
        self.file = self.file.as_deref().map(expand_path);
    }
}
