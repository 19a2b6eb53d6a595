//! Forest renderers: indented tree text, JSON and YAML
//!
//! All renderers are stateless and write the same logical forest; only the
//! syntax differs. The CLI hands them stdout, tests hand them a `Vec<u8>`.

use std::fmt;
use std::io::Write;

use serde::Deserialize;
use termtree::Tree;
use thiserror::Error;

use crate::domain::Node;

/// Output format for the namespace forest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indented tree with branch connectors
    #[default]
    Tree,
    /// Pretty-printed JSON array
    Json,
    /// YAML block sequence
    Yaml,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OutputFormat::Tree => "tree",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        };
        f.write_str(s)
    }
}

/// Errors raised while writing a forest.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

pub type RenderResult<T> = Result<T, RenderError>;

/// Conversion into a printable `termtree::Tree`.
pub trait ToTermTree {
    fn to_term_tree(&self) -> Tree<String>;
}

impl ToTermTree for Node {
    fn to_term_tree(&self) -> Tree<String> {
        let leaves: Vec<_> = self.children.iter().map(|c| c.to_term_tree()).collect();
        Tree::new(self.name.clone()).with_leaves(leaves)
    }
}

/// Write each root as its own tree, one node per line, no blank line between roots.
pub fn render_tree<W: Write + ?Sized>(roots: &[Node], out: &mut W) -> RenderResult<()> {
    for root in roots {
        write!(out, "{}", root.to_term_tree())?;
    }
    Ok(())
}

/// Write the forest as a JSON array with 2-space indentation and a trailing newline.
pub fn render_json<W: Write + ?Sized>(roots: &[Node], out: &mut W) -> RenderResult<()> {
    // Serialize first so sink failures surface as `RenderError::Io`
    let json = serde_json::to_string_pretty(roots)?;
    writeln!(out, "{json}")?;
    Ok(())
}

/// Write the forest as a block-style YAML sequence.
pub fn render_yaml<W: Write + ?Sized>(roots: &[Node], out: &mut W) -> RenderResult<()> {
    let yaml = serde_yaml::to_string(roots)?;
    out.write_all(yaml.as_bytes())?;
    Ok(())
}

/// Dispatch to the renderer for `format`.
pub fn render<W: Write + ?Sized>(
    format: OutputFormat,
    roots: &[Node],
    out: &mut W,
) -> RenderResult<()> {
    match format {
        OutputFormat::Tree => render_tree(roots, out),
        OutputFormat::Json => render_json(roots, out),
        OutputFormat::Yaml => render_yaml(roots, out),
    }?;
    out.flush()?;
    Ok(())
}
