//! Domain entities: core data structures

use serde::{Deserialize, Serialize};

/// Named resource with an optional reference to its parent by name.
///
/// The builder only looks at these two fields, so any external schema
/// (Kubernetes namespaces, manifests, fixtures) is mapped into this shape first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    /// Unique name within one input set
    pub name: String,
    /// Name of the parent resource, `None` for top-level resources
    pub parent: Option<String>,
}

impl Resource {
    /// Create a resource without a parent.
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
        }
    }

    /// Create a resource that declares `parent` as its parent.
    pub fn child(name: impl Into<String>, parent: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: Some(parent.into()),
        }
    }

    /// Parent name, treating an empty string the same as no parent.
    pub fn parent_name(&self) -> Option<&str> {
        self.parent.as_deref().filter(|p| !p.is_empty())
    }
}

/// Tree node with its children, ordered by name.
///
/// Serializes as `{name, children}`; `children` is left out for leaves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Builder-style helper, mostly for tests and fixtures.
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of levels in this subtree, a leaf has depth 1.
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(Node::depth)
            .max()
            .unwrap_or(0)
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(Node::size).sum::<usize>()
    }

    /// Names of all nodes in this subtree, pre-order.
    pub fn names(&self) -> Vec<&str> {
        let mut out = Vec::with_capacity(self.size());
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            out.push(node.name.as_str());
            // Push in reverse for left-to-right traversal
            for child in node.children.iter().rev() {
                stack.push(child);
            }
        }
        out
    }
}
