//! Hand-authored diagrams loaded from JSON.

use serde::Deserialize;
use tributary_core::diagram::{Link, Node};

/// A literal diagram document: `{ "title"?, "nodes": [...], "links": [...] }`.
///
/// Nothing is validated here; the builder checks the graph invariants.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LiteralDiagram {
    #[serde(default)]
    title: Option<String>,
    nodes: Vec<Node>,
    links: Vec<Link>,
}

impl LiteralDiagram {
    pub fn new(title: Option<String>, nodes: Vec<Node>, links: Vec<Link>) -> Self {
        Self { title, nodes, links }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn into_parts(self) -> (Option<String>, Vec<Node>, Vec<Link>) {
        (self.title, self.nodes, self.links)
    }
}
