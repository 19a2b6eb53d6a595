//! hns-tree: show Kubernetes namespaces as a tree
//!
//! Namespaces are linked to their parent through an annotation
//! (`hnc.x-k8s.io/subnamespace-of` by default). The forest is built by
//! [`domain::build_forest`] and written by one of the renderers in
//! [`application::render`].

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use application::{render, render_json, render_tree, render_yaml, OutputFormat};
pub use domain::{build_forest, Node, Resource};
