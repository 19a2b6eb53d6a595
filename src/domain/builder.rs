//! Forest builder: turns a flat resource list into ordered trees.

use std::collections::HashMap;

use tracing::{debug, instrument};

use crate::domain::entities::{Node, Resource};

/// Constructs a forest of [`Node`] trees from parent references.
///
/// Resources whose parent is missing from the input are dropped, as are
/// resources caught in (or hanging below) a parent cycle: neither kind is
/// reachable from a resource without a parent. Nothing here fails.
#[derive(Debug, Default)]
pub struct ForestBuilder<'a> {
    /// name -> declared parent
    parents: HashMap<&'a str, Option<&'a str>>,
    /// parent name -> child names
    children: HashMap<&'a str, Vec<&'a str>>,
}

impl<'a> ForestBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the forest, roots and every children list sorted by name.
    #[instrument(level = "debug", skip_all, fields(resources = resources.len()))]
    pub fn build(mut self, resources: &'a [Resource]) -> Vec<Node> {
        self.index(resources);
        self.link();

        let mut roots: Vec<&str> = self
            .parents
            .iter()
            .filter(|(_, parent)| parent.is_none())
            .map(|(name, _)| *name)
            .collect();
        roots.sort();

        let forest: Vec<Node> = roots.into_iter().map(|name| self.assemble(name)).collect();
        debug!(
            "build: {} roots, {} nodes",
            forest.len(),
            forest.iter().map(Node::size).sum::<usize>()
        );
        forest
    }

    fn index(&mut self, resources: &'a [Resource]) {
        for res in resources {
            // Duplicate names: last one wins
            self.parents.insert(res.name.as_str(), res.parent_name());
        }
    }

    fn link(&mut self) {
        for (&name, &parent) in &self.parents {
            let Some(parent) = parent else { continue };
            if self.parents.contains_key(parent) {
                self.children.entry(parent).or_default().push(name);
            } else {
                debug!("link: dropping {name}, parent {parent} not found");
            }
        }
        for names in self.children.values_mut() {
            names.sort();
        }
    }

    /// Only called on nodes reachable from a root, so the walk always ends.
    /// Recursion depth equals hierarchy depth, which stays small for namespaces.
    fn assemble(&self, name: &str) -> Node {
        let children: Vec<Node> = self
            .children
            .get(name)
            .map(|names| names.iter().map(|child| self.assemble(child)).collect())
            .unwrap_or_default();
        Node {
            name: name.to_string(),
            children,
        }
    }
}

/// Build the namespace forest for `resources`.
pub fn build_forest(resources: &[Resource]) -> Vec<Node> {
    ForestBuilder::new().build(resources)
}
