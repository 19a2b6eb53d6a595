//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, ValueHint};

use crate::application::OutputFormat;
use crate::config::Settings;

/// Show Kubernetes namespaces as a tree, following HNC subnamespace annotations
#[derive(Parser, Debug)]
#[command(name = "hns-tree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Path to the kubeconfig file (default: $KUBECONFIG, then ~/.kube/config)
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub kubeconfig: Option<PathBuf>,

    /// Kubeconfig context to use
    #[arg(long)]
    pub context: Option<String>,

    /// Read namespaces from a manifest (`kubectl get ns -o yaml`), `-` for stdin
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// Annotation that names a namespace's parent
    #[arg(long)]
    pub annotation: Option<String>,

    /// Config file (default: $XDG_CONFIG_HOME/hns-tree/hns-tree.toml)
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Print shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,
}

impl Cli {
    /// Apply flags on top of loaded settings; flags win.
    pub fn apply_to(&self, settings: Settings) -> Settings {
        let mut settings = Settings {
            kubeconfig: self.kubeconfig.clone().or(settings.kubeconfig),
            context: self.context.clone().or(settings.context),
            file: self.file.clone().or(settings.file),
            output: self.output.unwrap_or(settings.output),
            annotation: self.annotation.clone().unwrap_or(settings.annotation),
        };
        settings.expand_paths();
        settings
    }
}
