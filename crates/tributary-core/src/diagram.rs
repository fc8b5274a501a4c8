//! The normalized graph description shared by the builder and the exporters.
//!
//! A [`Diagram`] is an ordered list of uniquely named [`Node`]s and an ordered
//! list of weighted [`Link`]s that reference nodes by name. This is the sole
//! contract between the diagram builder and the external layout library:
//!
//! ```text
//! { "nodes": [{ "name", "category"? }], "links": [{ "source", "target", "value" }] }
//! ```
//!
//! The types here do not enforce the graph invariants themselves; validated
//! diagrams are produced by the builder in the `tributary` crate.

use serde::{Deserialize, Serialize};

/// A named node in a Sankey diagram.
///
/// The `name` is the join key used by links. The optional `category` only
/// affects color grouping and falls back to the name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Node {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    category: Option<String>,
}

impl Node {
    /// Create a node without a category.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: None,
        }
    }

    /// Set the color category of this node.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// The unique name of this node.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The explicit category, if one was given.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// The key used to pick this node's color: its category, or its name.
    pub fn color_key(&self) -> &str {
        self.category.as_deref().unwrap_or(&self.name)
    }
}

/// A weighted, directed flow between two nodes referenced by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    source: String,
    target: String,
    value: f64,
}

impl Link {
    /// Create a link from `source` to `target` carrying `value`.
    pub fn new(source: impl Into<String>, target: impl Into<String>, value: f64) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            value,
        }
    }

    /// Name of the node the flow leaves.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Name of the node the flow enters.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// The flow quantity.
    pub fn value(&self) -> f64 {
        self.value
    }
}

/// An ordered node list and an ordered link list describing one chart.
///
/// Node order is kept as inserted since the layout library uses it as a
/// left-to-right ordering hint. Links sharing a source/target pair are kept
/// as separate entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Diagram {
    nodes: Vec<Node>,
    links: Vec<Link>,
}

impl Diagram {
    /// Create a diagram from its parts without validating them.
    pub fn new(nodes: Vec<Node>, links: Vec<Link>) -> Self {
        Self { nodes, links }
    }

    /// Borrow the nodes in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Borrow the links in draw order.
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Look up a node by name.
    pub fn node(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.name() == name)
    }

    /// Returns `true` if a node with this name exists.
    pub fn contains_node(&self, name: &str) -> bool {
        self.node(name).is_some()
    }

    /// Sum of the values of all links leaving `name`.
    pub fn outgoing_value(&self, name: &str) -> f64 {
        self.links
            .iter()
            .filter(|link| link.source() == name)
            .map(Link::value)
            .sum()
    }

    /// Sum of the values of all links entering `name`.
    pub fn incoming_value(&self, name: &str) -> f64 {
        self.links
            .iter()
            .filter(|link| link.target() == name)
            .map(Link::value)
            .sum()
    }

    /// The total flow through a node: the larger of its incoming and outgoing sums.
    ///
    /// This is the quantity the layout library sizes node extents by.
    pub fn node_value(&self, name: &str) -> f64 {
        self.incoming_value(name).max(self.outgoing_value(name))
    }
}
