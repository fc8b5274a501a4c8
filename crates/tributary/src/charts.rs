//! The chart catalog of a Tributary report.
//!
//! A report shows four charts, in order:
//!
//! 1. [`student_itemized`]: per-semester itemized costs of a student
//! 2. [`comprehensive_fee`]: components of the comprehensive fee
//! 3. [`university_finances`]: university revenues and expenses
//! 4. [`athletics`]: athletics revenues and expenses
//!
//! The first two are derived from the dataset; the last two are literal.
//! Further literal charts can be loaded from JSON with [`literal`].

use log::debug;
use serde::Serialize;

use tributary_core::diagram::{Diagram, Link, Node};
use tributary_dataset::{
    CostRecord, Dataset, LiteralDiagram, RecordKind, ShapeError,
    record::{COMPREHENSIVE_FEE_COMPONENT, STUDENT_ITEMIZED},
};

use crate::build::{
    self, BuildError, CostSelector, Flow, GraphIntegrityError, Roots, sort_links_by_value_descending,
};

/// Top node of the student itemized chart.
pub const STUDENT_ROOT: &str = "JMU Student";

/// Semester nodes below [`STUDENT_ROOT`].
pub const SEMESTERS: [&str; 2] = ["Fall", "Spring"];

/// Root node of the comprehensive fee chart.
pub const COMPREHENSIVE_FEE_ROOT: &str = "Comprehensive Fee";

pub const STUDENT_ITEMIZED_TITLE: &str = "Student Itemized Costs";
pub const COMPREHENSIVE_FEE_TITLE: &str = "Comprehensive Fee";
pub const UNIVERSITY_FINANCES_TITLE: &str = "University Revenues and Expenses";
pub const ATHLETICS_TITLE: &str = "Athletics Revenues and Expenses";

/// A titled diagram, ready for export.
///
/// Serializes as `{ "title", "nodes", "links" }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    title: String,
    #[serde(flatten)]
    diagram: Diagram,
}

impl Chart {
    pub fn new(title: impl Into<String>, diagram: Diagram) -> Self {
        Self {
            title: title.into(),
            diagram,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn diagram(&self) -> &Diagram {
        &self.diagram
    }
}

/// Selects `student itemized` records and attaches each to its semester,
/// weighted by `in-state + out-state`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SemesterItemizedCosts;

impl CostSelector for SemesterItemizedCosts {
    fn selects(&self, record: &CostRecord) -> bool {
        record.kind() == RecordKind::StudentItemized
    }

    fn attribute(&self, record: &CostRecord) -> Result<Flow, ShapeError> {
        let cost = record.as_student_itemized()?;
        Ok(Flow::new(cost.semester(), cost.total()))
    }
}

/// Selects comprehensive fee components and attaches each to one root,
/// weighted by `amount`.
#[derive(Debug, Clone)]
pub struct FeeComponents {
    root: String,
}

impl FeeComponents {
    pub fn new(root: impl Into<String>) -> Self {
        Self { root: root.into() }
    }
}

impl Default for FeeComponents {
    fn default() -> Self {
        Self::new(COMPREHENSIVE_FEE_ROOT)
    }
}

impl CostSelector for FeeComponents {
    fn selects(&self, record: &CostRecord) -> bool {
        record.kind() == RecordKind::ComprehensiveFeeComponent
    }

    fn attribute(&self, record: &CostRecord) -> Result<Flow, ShapeError> {
        Ok(Flow::new(&self.root, record.as_fee_component()?.amount()))
    }
}

/// Chart 1: itemized student costs per semester.
///
/// The student node links to each semester with weight 1.
pub fn student_itemized(dataset: &Dataset) -> Result<Chart, BuildError> {
    let roots = Roots::hierarchy(STUDENT_ROOT, SEMESTERS, 1.0);
    let diagram = build::build_from_itemized_costs(dataset.student_costs(), &roots, &SemesterItemizedCosts)?;
    debug!(chart = STUDENT_ITEMIZED; "Chart built");
    Ok(Chart::new(STUDENT_ITEMIZED_TITLE, diagram))
}

/// Chart 2: comprehensive fee components, largest first.
pub fn comprehensive_fee(dataset: &Dataset) -> Result<Chart, BuildError> {
    let diagram = build::build_from_itemized_costs(
        dataset.student_costs(),
        &Roots::single(COMPREHENSIVE_FEE_ROOT),
        &FeeComponents::default(),
    )?;
    debug!(chart = COMPREHENSIVE_FEE_COMPONENT; "Chart built");
    Ok(Chart::new(COMPREHENSIVE_FEE_TITLE, sort_links_by_value_descending(&diagram)))
}

/// Chart 3: university revenues flowing through to expenses.
pub fn university_finances() -> Result<Chart, GraphIntegrityError> {
    let nodes = [
        // Revenue items
        "Tuition and Fees",
        "State Appropriations",
        "Grants and Contracts",
        "Investment Income",
        // Revenue categories
        "Operating Revenues",
        "Nonoperating Revenues",
        "JMU",
        "Operating Expenses",
        // Expense items
        "Instruction",
        "Research",
        "Public Service",
        "Academic Support",
    ];
    let links = [
        ("Tuition and Fees", "Operating Revenues", 200_000.0),
        ("State Appropriations", "Nonoperating Revenues", 150_000.0),
        ("Grants and Contracts", "Nonoperating Revenues", 100_000.0),
        ("Investment Income", "Nonoperating Revenues", 50_000.0),
        ("Operating Revenues", "JMU", 200_000.0),
        ("Nonoperating Revenues", "JMU", 300_000.0),
        ("JMU", "Operating Expenses", 400_000.0),
        ("Operating Expenses", "Instruction", 150_000.0),
        ("Operating Expenses", "Research", 100_000.0),
        ("Operating Expenses", "Public Service", 80_000.0),
        ("Operating Expenses", "Academic Support", 70_000.0),
    ];
    literal_chart(UNIVERSITY_FINANCES_TITLE, &nodes, &links)
}

/// Chart 4: athletics revenues by sport flowing through to expenses.
pub fn athletics() -> Result<Chart, GraphIntegrityError> {
    let nodes = [
        // Sports
        "Football",
        "Men's Basketball",
        "Women's Basketball",
        "Other Sports",
        "Non-Program Specific",
        // Revenue items
        "Ticket Sales",
        "Concessions",
        "Sponsorships",
        "JMU Athletics",
        // Expense items
        "Athletic Student Aid",
        "Travel",
        "Medical Expenses",
        // Expenses by sport
        "Football (Expenses)",
        "Men's Basketball (Expenses)",
        "Women's Basketball (Expenses)",
        "Other Sports (Expenses)",
        "Non-Program Specific (Expenses)",
    ];
    let links = [
        ("Football", "Ticket Sales", 200_000.0),
        ("Men's Basketball", "Concessions", 150_000.0),
        ("Women's Basketball", "Sponsorships", 150_000.0),
        ("Other Sports", "Ticket Sales", 100_000.0),
        ("Non-Program Specific", "Sponsorships", 300_000.0),
        ("Ticket Sales", "JMU Athletics", 500_000.0),
        ("Concessions", "JMU Athletics", 200_000.0),
        ("Sponsorships", "JMU Athletics", 300_000.0),
        ("JMU Athletics", "Athletic Student Aid", 600_000.0),
        ("JMU Athletics", "Travel", 300_000.0),
        ("JMU Athletics", "Medical Expenses", 100_000.0),
        ("Athletic Student Aid", "Football (Expenses)", 200_000.0),
        ("Athletic Student Aid", "Men's Basketball (Expenses)", 150_000.0),
        ("Athletic Student Aid", "Women's Basketball (Expenses)", 150_000.0),
        ("Athletic Student Aid", "Other Sports (Expenses)", 100_000.0),
        ("Travel", "Non-Program Specific (Expenses)", 300_000.0),
        ("Medical Expenses", "Non-Program Specific (Expenses)", 100_000.0),
    ];
    literal_chart(ATHLETICS_TITLE, &nodes, &links)
}

/// A chart from a loaded literal diagram, titled `fallback_title` when the
/// document has no title.
pub fn literal(diagram: LiteralDiagram, fallback_title: &str) -> Result<Chart, GraphIntegrityError> {
    let (title, nodes, links) = diagram.into_parts();
    let diagram = build::build_literal(nodes, links)?;
    Ok(Chart::new(title.unwrap_or_else(|| fallback_title.to_string()), diagram))
}

fn literal_chart(
    title: &str,
    nodes: &[&str],
    links: &[(&str, &str, f64)],
) -> Result<Chart, GraphIntegrityError> {
    let diagram = build::build_literal(
        nodes.iter().copied().map(Node::new).collect(),
        links
            .iter()
            .map(|&(source, target, value)| Link::new(source, target, value))
            .collect(),
    )?;
    Ok(Chart::new(title, diagram))
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn dataset() -> Dataset {
        Dataset::new(vec![
            CostRecord::student_itemized("Tuition", "Fall", 3819.0, 13194.0),
            CostRecord::fee_component("Athletics", 1138.0),
            CostRecord::student_itemized("Housing", "Fall", 5000.0, 7000.0),
            CostRecord::fee_component("Health Center", 240.0),
            CostRecord::fee_component("Transit", 240.0),
            CostRecord::fee_component("Recreation", 310.0),
            CostRecord::student_itemized("Tuition", "Spring", 3819.0, 13194.0),
        ])
    }

    #[test]
    fn test_student_itemized_chart() {
        let chart = student_itemized(&dataset()).unwrap();
        let diagram = chart.diagram();

        let names: Vec<_> = diagram.nodes().iter().map(Node::name).collect();
        assert_eq!(names, ["JMU Student", "Fall", "Spring", "Tuition", "Housing"]);
        assert_eq!(diagram.links().len(), 5);
        assert_approx_eq!(f64, diagram.outgoing_value("Fall"), 29013.0);
        assert_approx_eq!(f64, diagram.incoming_value("Tuition"), 34026.0);
    }

    #[test]
    fn test_comprehensive_fee_sorted() {
        let chart = comprehensive_fee(&dataset()).unwrap();

        let targets: Vec<_> = chart.diagram().links().iter().map(Link::target).collect();
        assert_eq!(targets, ["Athletics", "Recreation", "Health Center", "Transit"]);

        // Node order follows the records, not the link order.
        let names: Vec<_> = chart.diagram().nodes().iter().map(Node::name).collect();
        assert_eq!(names, ["Comprehensive Fee", "Athletics", "Health Center", "Transit", "Recreation"]);
    }

    #[test]
    fn test_literal_charts_are_valid() {
        let finances = university_finances().unwrap();
        assert_eq!(finances.diagram().nodes().len(), 12);
        assert_eq!(finances.diagram().links().len(), 11);
        assert_approx_eq!(f64, finances.diagram().node_value("JMU"), 500_000.0);

        let athletics = athletics().unwrap();
        assert_eq!(athletics.diagram().nodes().len(), 17);
        assert_eq!(athletics.diagram().links().len(), 17);
        assert_approx_eq!(f64, athletics.diagram().node_value("JMU Athletics"), 1_000_000.0);
    }

    #[test]
    fn test_literal_fallback_title() {
        let diagram = LiteralDiagram::new(None, vec![Node::new("A"), Node::new("B")], vec![Link::new("A", "B", 10.0)]);

        let chart = literal(diagram, "Chart 5").unwrap();

        assert_eq!(chart.title(), "Chart 5");
    }

    #[test]
    fn test_chart_serializes_flat() {
        let chart = Chart::new("T", Diagram::new(vec![Node::new("A")], Vec::new()));
        let value = serde_json::to_value(&chart).unwrap();
        assert_eq!(value["title"], "T");
        assert_eq!(value["nodes"][0]["name"], "A");
        assert!(value["links"].as_array().unwrap().is_empty());
    }
}
