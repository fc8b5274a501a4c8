//! Record selection and attribution for derived diagrams.

use tributary_dataset::{CostRecord, ShapeError};

/// Where a selected record's flow comes from, and how much it carries.
#[derive(Debug, Clone, PartialEq)]
pub struct Flow {
    root: String,
    amount: f64,
}

impl Flow {
    pub fn new(root: impl Into<String>, amount: f64) -> Self {
        Self {
            root: root.into(),
            amount,
        }
    }

    /// Name of the root node the record hangs off.
    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }
}

/// Chooses the records of a derived diagram and attributes each to a root.
///
/// `attribute` is only called for records `selects` accepted. It must fail
/// rather than default when a required field is absent.
pub trait CostSelector {
    fn selects(&self, record: &CostRecord) -> bool;

    fn attribute(&self, record: &CostRecord) -> Result<Flow, ShapeError>;
}

/// A [`CostSelector`] made of a predicate and an attribution function.
#[derive(Debug, Clone, Copy)]
pub struct SelectorFn<P, A> {
    predicate: P,
    attribution: A,
}

/// Build a [`CostSelector`] from a predicate and an attribution function.
///
/// ```
/// # use tributary::build::{Flow, from_fns, CostSelector};
/// # use tributary_dataset::CostRecord;
/// let selector = from_fns(
///     |record: &CostRecord| record.name() != "Parking",
///     |record: &CostRecord| Ok(Flow::new("Comprehensive Fee", record.as_fee_component()?.amount())),
/// );
/// assert!(selector.selects(&CostRecord::fee_component("Athletics", 1138.0)));
/// ```
pub fn from_fns<P, A>(predicate: P, attribution: A) -> SelectorFn<P, A>
where
    P: Fn(&CostRecord) -> bool,
    A: Fn(&CostRecord) -> Result<Flow, ShapeError>,
{
    SelectorFn {
        predicate,
        attribution,
    }
}

impl<P, A> CostSelector for SelectorFn<P, A>
where
    P: Fn(&CostRecord) -> bool,
    A: Fn(&CostRecord) -> Result<Flow, ShapeError>,
{
    fn selects(&self, record: &CostRecord) -> bool {
        (self.predicate)(record)
    }

    fn attribute(&self, record: &CostRecord) -> Result<Flow, ShapeError> {
        (self.attribution)(record)
    }
}
