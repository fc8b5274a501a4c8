//! Graph integrity checks run before a diagram leaves the builder.
//!
//! The external Sankey layout trusts its input: a link naming a missing node,
//! a negative width, or a circular flow makes it fail or draw garbage. Every
//! diagram the builder returns has passed [`validate`].

use std::{collections::HashMap, fmt};

use log::trace;
use petgraph::{
    algo::toposort,
    graph::{DiGraph, NodeIndex},
};
use thiserror::Error;

use tributary_core::{diagram::Diagram, error_code::ErrorCode};

/// Which end of a link is being reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Source,
    Target,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => write!(f, "source"),
            Self::Target => write!(f, "target"),
        }
    }
}

/// A diagram violates an invariant the layout depends on.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphIntegrityError {
    #[error("link #{link} {endpoint} `{name}` is not a node of the diagram")]
    DanglingEndpoint {
        link: usize,
        endpoint: Endpoint,
        name: String,
    },

    #[error("node `{name}` is declared more than once")]
    DuplicateNode { name: String },

    #[error("link #{link} `{source_name}` → `{target}` has invalid value {value}")]
    InvalidLinkValue {
        link: usize,
        source_name: String,
        target: String,
        value: f64,
    },

    #[error("links form a cycle through `{name}`")]
    Cycle { name: String },
}

impl GraphIntegrityError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::DanglingEndpoint { .. } => ErrorCode::E200,
            Self::DuplicateNode { .. } => ErrorCode::E201,
            Self::InvalidLinkValue { .. } => ErrorCode::E202,
            Self::Cycle { .. } => ErrorCode::E203,
        }
    }
}

/// Check every invariant of a diagram, reporting the first violation.
///
/// Checks run in order: unique node names, finite non-negative link values,
/// resolvable link endpoints, and acyclicity (self-loops included).
pub fn validate(diagram: &Diagram) -> Result<(), GraphIntegrityError> {
    let mut graph: DiGraph<&str, usize> = DiGraph::with_capacity(diagram.nodes().len(), diagram.links().len());
    let mut indices: HashMap<&str, NodeIndex> = HashMap::with_capacity(diagram.nodes().len());

    for node in diagram.nodes() {
        if indices.contains_key(node.name()) {
            return Err(GraphIntegrityError::DuplicateNode {
                name: node.name().to_string(),
            });
        }
        indices.insert(node.name(), graph.add_node(node.name()));
    }

    for (position, link) in diagram.links().iter().enumerate() {
        if !link.value().is_finite() || link.value() < 0.0 {
            return Err(GraphIntegrityError::InvalidLinkValue {
                link: position,
                source_name: link.source().to_string(),
                target: link.target().to_string(),
                value: link.value(),
            });
        }

        let resolve = |name: &str, endpoint| {
            indices
                .get(name)
                .copied()
                .ok_or_else(|| GraphIntegrityError::DanglingEndpoint {
                    link: position,
                    endpoint,
                    name: name.to_string(),
                })
        };
        let source = resolve(link.source(), Endpoint::Source)?;
        let target = resolve(link.target(), Endpoint::Target)?;
        graph.add_edge(source, target, position);
    }

    toposort(&graph, None).map_err(|cycle| GraphIntegrityError::Cycle {
        name: graph[cycle.node_id()].to_string(),
    })?;

    trace!(nodes = graph.node_count(), links = graph.edge_count(); "Diagram validated");
    Ok(())
}
