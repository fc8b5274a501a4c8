//! Render-ready view of a chart.
//!
//! The external layout positions nodes and routes links; everything else a
//! drawn chart shows is decided here: node and link colors, and the hover
//! text of both.

use serde::Serialize;

use tributary_core::{
    color::{Color, ColorScale},
    diagram::Diagram,
    format::format_value,
};

use crate::charts::Chart;

/// A node as drawn: its fill and hover text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeView {
    name: String,
    color: Color,
    tooltip: String,
}

impl NodeView {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn tooltip(&self) -> &str {
        &self.tooltip
    }
}

/// A link as drawn. Links take the color of their source node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkView {
    source: String,
    target: String,
    value: f64,
    color: Color,
    tooltip: String,
}

impl LinkView {
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn tooltip(&self) -> &str {
        &self.tooltip
    }
}

/// A chart with colors and hover text resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartView {
    title: String,
    nodes: Vec<NodeView>,
    links: Vec<LinkView>,
}

impl ChartView {
    /// Resolve a chart's presentation.
    ///
    /// `scale` should be fresh for each chart: colors are handed out in node
    /// order, keyed by category, so the first category of every chart gets
    /// the first palette color.
    pub fn new(chart: &Chart, mut scale: ColorScale) -> Self {
        let diagram = chart.diagram();

        let nodes: Vec<_> = diagram
            .nodes()
            .iter()
            .map(|node| NodeView {
                name: node.name().to_string(),
                color: scale.color_for(node.color_key()),
                tooltip: node_tooltip(node.name(), diagram.node_value(node.name())),
            })
            .collect();

        let links = diagram
            .links()
            .iter()
            .map(|link| LinkView {
                source: link.source().to_string(),
                target: link.target().to_string(),
                value: link.value(),
                color: source_color(diagram, &mut scale, link.source()),
                tooltip: link_tooltip(link.source(), link.target(), link.value()),
            })
            .collect();

        Self {
            title: chart.title().to_string(),
            nodes,
            links,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn nodes(&self) -> &[NodeView] {
        &self.nodes
    }

    pub fn links(&self) -> &[LinkView] {
        &self.links
    }
}

/// Hover text of a node: its name and the flow through it.
pub fn node_tooltip(name: &str, value: f64) -> String {
    format!("{name}\n{}", format_value(value))
}

/// Hover text of a link: both endpoints and its value.
pub fn link_tooltip(source: &str, target: &str, value: f64) -> String {
    format!("{source} → {target}\n{}", format_value(value))
}

fn source_color(diagram: &Diagram, scale: &mut ColorScale, source: &str) -> Color {
    let key = diagram.node(source).map_or(source, |node| node.color_key());
    scale.color_for(key)
}
