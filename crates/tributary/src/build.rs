//! Diagram construction from cost records and literal node/link lists.
//!
//! Three operations produce diagrams:
//!
//! - [`build_from_itemized_costs`] derives a diagram from dataset records,
//!   attaching each selected record to one of a fixed set of root nodes
//! - [`build_literal`] validates a hand-authored node/link list
//! - [`sort_links_by_value_descending`] reorders links so the largest flows
//!   are drawn first
//!
//! All three are pure: inputs are borrowed or consumed and a new [`Diagram`]
//! is returned. Every diagram that leaves this module has passed
//! [`validate`], so link endpoints always resolve and node names are unique.

pub mod selector;
mod validate;

pub use selector::{CostSelector, Flow, SelectorFn, from_fns};
pub use validate::{Endpoint, GraphIntegrityError, validate};

use indexmap::IndexMap;
use log::{debug, trace};
use thiserror::Error;

use tributary_core::{
    diagram::{Diagram, Link, Node},
    error_code::ErrorCode,
};
use tributary_dataset::{CostRecord, ShapeError};

/// Failure while deriving a diagram from records.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Graph(#[from] GraphIntegrityError),
}

impl BuildError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Shape(err) => err.code(),
            Self::Graph(err) => err.code(),
        }
    }
}

/// The fixed top of a derived diagram.
///
/// Root nodes always appear first, in order, followed by their fixed links.
/// Record-derived links then hang off these nodes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roots {
    nodes: Vec<Node>,
    links: Vec<Link>,
}

impl Roots {
    pub fn new(nodes: Vec<Node>, links: Vec<Link>) -> Self {
        Self { nodes, links }
    }

    /// A single root node with no fixed links.
    pub fn single(name: impl Into<String>) -> Self {
        Self::new(vec![Node::new(name)], Vec::new())
    }

    /// A top node linked to each child with the same `weight`.
    ///
    /// ```
    /// # use tributary::build::Roots;
    /// let roots = Roots::hierarchy("JMU Student", ["Fall", "Spring"], 1.0);
    /// assert_eq!(roots.nodes().len(), 3);
    /// assert_eq!(roots.links().len(), 2);
    /// ```
    pub fn hierarchy<I, S>(top: impl Into<String>, children: I, weight: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let top = top.into();
        let mut nodes = vec![Node::new(top.clone())];
        let mut links = Vec::new();
        for child in children {
            let child = child.into();
            links.push(Link::new(top.clone(), child.clone(), weight));
            nodes.push(Node::new(child));
        }
        Self::new(nodes, links)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }
}

/// Derive a diagram from the records a selector picks.
///
/// Nodes are the root nodes followed by one node per distinct selected record
/// name, in first-seen order. Links are the fixed root links followed by one
/// link per selected record, from the root the selector attributes it to,
/// weighted by the attributed amount. Links sharing endpoints are not merged.
///
/// # Errors
///
/// - [`BuildError::Shape`] when a selected record lacks a required field or
///   its amount is NaN, infinite, or negative. No zero is substituted.
/// - [`BuildError::Graph`] when the result violates a graph invariant, e.g.
///   a record attributed to a root that is not in `roots`.
pub fn build_from_itemized_costs<S>(
    records: &[CostRecord],
    roots: &Roots,
    selector: &S,
) -> Result<Diagram, BuildError>
where
    S: CostSelector + ?Sized,
{
    let mut nodes: IndexMap<&str, Node> = IndexMap::with_capacity(roots.nodes.len() + records.len());
    for node in &roots.nodes {
        nodes.entry(node.name()).or_insert_with(|| node.clone());
    }
    let mut links = roots.links.clone();

    for record in records.iter().filter(|record| selector.selects(record)) {
        let flow = selector.attribute(record)?;
        if !flow.amount().is_finite() || flow.amount() < 0.0 {
            return Err(ShapeError::InvalidAmount {
                record: record.reference(),
                value: flow.amount(),
            }
            .into());
        }

        trace!(record = record.index(), root = flow.root(), amount = flow.amount(); "Record attributed");
        nodes
            .entry(record.name())
            .or_insert_with(|| Node::new(record.name()));
        links.push(Link::new(flow.root(), record.name(), flow.amount()));
    }

    let diagram = Diagram::new(nodes.into_values().collect(), links);
    validate(&diagram)?;

    debug!(nodes = diagram.nodes().len(), links = diagram.links().len(); "Diagram built from records");
    Ok(diagram)
}

/// Validate a hand-authored diagram and return it unchanged.
///
/// # Errors
///
/// Returns the first [`GraphIntegrityError`] found, including duplicate node
/// names, which literal diagrams may not contain.
pub fn build_literal(nodes: Vec<Node>, links: Vec<Link>) -> Result<Diagram, GraphIntegrityError> {
    let diagram = Diagram::new(nodes, links);
    validate(&diagram)?;
    debug!(nodes = diagram.nodes().len(), links = diagram.links().len(); "Literal diagram built");
    Ok(diagram)
}

/// Copy a diagram with its links ordered by descending value.
///
/// The sort is stable: links with equal values keep their relative order,
/// `-0.0` and `0.0` included. Nodes are untouched.
pub fn sort_links_by_value_descending(diagram: &Diagram) -> Diagram {
    let mut links = diagram.links().to_vec();
    // Adding 0.0 folds -0.0 into 0.0, which total_cmp would otherwise order apart.
    links.sort_by(|a, b| (b.value() + 0.0).total_cmp(&(a.value() + 0.0)));
    Diagram::new(diagram.nodes().to_vec(), links)
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use tributary_dataset::record::STUDENT_ITEMIZED;

    use super::*;

    const SEMESTERS: [&str; 2] = ["Fall", "Spring"];

    fn record_strategy() -> impl Strategy<Value = CostRecord> {
        (
            prop::sample::select(vec!["Tuition", "Housing", "Books", "Dining", "Fall"]),
            prop::sample::select(SEMESTERS.to_vec()),
            0.0..50_000.0f64,
            0.0..50_000.0f64,
            prop::bool::weighted(0.8),
        )
            .prop_map(|(name, semester, in_state, out_state, itemized)| {
                if itemized {
                    CostRecord::student_itemized(name, semester, in_state, out_state)
                } else {
                    CostRecord::fee_component(name, in_state)
                }
            })
    }

    fn records_strategy() -> impl Strategy<Value = Vec<CostRecord>> {
        prop::collection::vec(record_strategy(), 0..24).prop_map(|records| {
            records
                .into_iter()
                .enumerate()
                // A record named after a root would link a root to itself.
                .filter(|(_, record)| !SEMESTERS.contains(&record.name()) || record.type_name() != STUDENT_ITEMIZED)
                .map(|(index, record)| record.with_index(index))
                .collect()
        })
    }

    fn links_strategy() -> impl Strategy<Value = Vec<Link>> {
        // Few distinct values so ties are common; targets record the original position.
        prop::collection::vec(prop::sample::select(vec![-0.0, 0.0, 1.0, 2.5, 10.0, 99.0]), 0..16).prop_map(|values| {
            values
                .into_iter()
                .enumerate()
                .map(|(position, value)| Link::new("R", position.to_string(), value))
                .collect()
        })
    }

    fn selector() -> impl CostSelector {
        from_fns(
            |record: &CostRecord| record.type_name() == STUDENT_ITEMIZED,
            |record: &CostRecord| {
                let cost = record.as_student_itemized()?;
                Ok(Flow::new(cost.semester(), cost.total()))
            },
        )
    }

    fn roots() -> Roots {
        Roots::hierarchy("JMU Student", SEMESTERS, 1.0)
    }

    fn check_endpoints_resolve_and_names_unique(records: &[CostRecord]) -> Result<(), TestCaseError> {
        let diagram = build_from_itemized_costs(records, &roots(), &selector())
            .map_err(|err| TestCaseError::fail(err.to_string()))?;

        for link in diagram.links() {
            prop_assert!(diagram.contains_node(link.source()));
            prop_assert!(diagram.contains_node(link.target()));
        }

        let mut names: Vec<_> = diagram.nodes().iter().map(Node::name).collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        prop_assert_eq!(names.len(), total);
        Ok(())
    }

    fn check_root_outflow_conserved(records: &[CostRecord]) -> Result<(), TestCaseError> {
        let diagram = build_from_itemized_costs(records, &roots(), &selector())
            .map_err(|err| TestCaseError::fail(err.to_string()))?;

        for semester in SEMESTERS {
            let expected: f64 = records
                .iter()
                .filter_map(|record| record.as_student_itemized().ok())
                .filter(|cost| cost.semester() == semester)
                .map(|cost| cost.total())
                .sum();
            let actual = diagram.outgoing_value(semester);
            prop_assert!(
                (actual - expected).abs() <= 1e-6 * expected.max(1.0),
                "{semester}: expected {expected}, got {actual}"
            );
        }
        Ok(())
    }

    fn check_record_links_follow_root_links(records: &[CostRecord]) -> Result<(), TestCaseError> {
        let diagram = build_from_itemized_costs(records, &roots(), &selector())
            .map_err(|err| TestCaseError::fail(err.to_string()))?;

        let selected = records.iter().filter(|record| record.type_name() == STUDENT_ITEMIZED).count();
        let roots = roots();
        let fixed = roots.links().len();
        prop_assert_eq!(diagram.links().len(), fixed + selected);
        prop_assert_eq!(&diagram.links()[..fixed], roots.links());
        Ok(())
    }

    fn check_sort_idempotent_and_stable(links: Vec<Link>) -> Result<(), TestCaseError> {
        let diagram = Diagram::new(Vec::new(), links);

        let once = sort_links_by_value_descending(&diagram);
        let twice = sort_links_by_value_descending(&once);
        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(once.links().len(), diagram.links().len());

        let position = |link: &Link| link.target().parse::<usize>().unwrap_or(usize::MAX);
        for pair in once.links().windows(2) {
            prop_assert!(pair[0].value() >= pair[1].value());
            if pair[0].value() == pair[1].value() {
                prop_assert!(position(&pair[0]) < position(&pair[1]));
            }
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn endpoints_resolve_and_names_unique(records in records_strategy()) {
            check_endpoints_resolve_and_names_unique(&records)?;
        }

        #[test]
        fn root_outflow_conserved(records in records_strategy()) {
            check_root_outflow_conserved(&records)?;
        }

        #[test]
        fn record_links_follow_root_links(records in records_strategy()) {
            check_record_links_follow_root_links(&records)?;
        }

        #[test]
        fn sort_idempotent_and_stable(links in links_strategy()) {
            check_sort_idempotent_and_stable(links)?;
        }
    }
}
