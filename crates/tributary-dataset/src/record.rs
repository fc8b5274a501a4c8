//! Cost records and their typed views.
//!
//! A [`CostRecord`] is one entry of the `student-costs` array exactly as it
//! appears in the document. Which amount fields it carries depends on its
//! `type`, so charts never read the optional fields directly. Instead they
//! classify the record with [`CostRecord::kind`] and extract a typed view
//! ([`StudentItemizedCost`], [`FeeComponent`]) that holds exactly the fields
//! its kind requires. Extraction is the only place a [`ShapeError`] arises.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Diagnostic, RecordRef, ShapeError};

/// `type` of per-semester itemized student costs.
pub const STUDENT_ITEMIZED: &str = "student itemized";

/// `type` of comprehensive fee components.
pub const COMPREHENSIVE_FEE_COMPONENT: &str = "Auxiliary Comprehensive Fee Component";

/// The kind of a cost record, decided by its `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    StudentItemized,
    ComprehensiveFeeComponent,
    /// A `type` no chart consumes.
    Other,
}

impl RecordKind {
    /// Classify a `type` string. Matching is exact and case-sensitive.
    pub fn classify(kind: &str) -> Self {
        match kind {
            STUDENT_ITEMIZED => Self::StudentItemized,
            COMPREHENSIVE_FEE_COMPONENT => Self::ComprehensiveFeeComponent,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StudentItemized => write!(f, "{STUDENT_ITEMIZED}"),
            Self::ComprehensiveFeeComponent => write!(f, "{COMPREHENSIVE_FEE_COMPONENT}"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// One raw entry of the `student-costs` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostRecord {
    #[serde(skip)]
    index: usize,

    #[serde(rename = "type")]
    kind: String,

    name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    semester: Option<String>,

    #[serde(rename = "in-state", default, skip_serializing_if = "Option::is_none")]
    in_state: Option<f64>,

    #[serde(rename = "out-state", default, skip_serializing_if = "Option::is_none")]
    out_state: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    amount: Option<f64>,
}

impl CostRecord {
    /// Create a record with no semester or amount fields.
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            index: 0,
            kind: kind.into(),
            name: name.into(),
            semester: None,
            in_state: None,
            out_state: None,
            amount: None,
        }
    }

    /// A `student itemized` record with both tuition amounts.
    pub fn student_itemized(
        name: impl Into<String>,
        semester: impl Into<String>,
        in_state: f64,
        out_state: f64,
    ) -> Self {
        Self::new(STUDENT_ITEMIZED, name)
            .with_semester(semester)
            .with_in_state(in_state)
            .with_out_state(out_state)
    }

    /// A comprehensive fee component with its amount.
    pub fn fee_component(name: impl Into<String>, amount: f64) -> Self {
        Self::new(COMPREHENSIVE_FEE_COMPONENT, name).with_amount(amount)
    }

    pub fn with_index(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    pub fn with_semester(mut self, semester: impl Into<String>) -> Self {
        self.semester = Some(semester.into());
        self
    }

    pub fn with_in_state(mut self, value: f64) -> Self {
        self.in_state = Some(value);
        self
    }

    pub fn with_out_state(mut self, value: f64) -> Self {
        self.out_state = Some(value);
        self
    }

    pub fn with_amount(mut self, value: f64) -> Self {
        self.amount = Some(value);
        self
    }

    /// Position of the record in the `student-costs` array.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The raw `type` field.
    pub fn type_name(&self) -> &str {
        &self.kind
    }

    pub fn kind(&self) -> RecordKind {
        RecordKind::classify(&self.kind)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn semester(&self) -> Option<&str> {
        self.semester.as_deref()
    }

    /// Identify this record in error messages.
    pub fn reference(&self) -> RecordRef {
        RecordRef::new(self.index, &self.kind, &self.name)
    }

    /// View this record as a per-semester itemized cost.
    ///
    /// # Errors
    ///
    /// [`ShapeError::UnexpectedKind`] when the record is of another kind, and
    /// [`ShapeError::MissingField`] when `semester`, `in-state` or
    /// `out-state` is absent.
    pub fn as_student_itemized(&self) -> Result<StudentItemizedCost<'_>, ShapeError> {
        self.expect_kind(RecordKind::StudentItemized, STUDENT_ITEMIZED)?;
        Ok(StudentItemizedCost {
            record: self,
            semester: self.require(self.semester.as_deref(), "semester")?,
            in_state: self.require(self.in_state, "in-state")?,
            out_state: self.require(self.out_state, "out-state")?,
        })
    }

    /// View this record as a comprehensive fee component.
    ///
    /// # Errors
    ///
    /// [`ShapeError::UnexpectedKind`] when the record is of another kind, and
    /// [`ShapeError::MissingField`] when `amount` is absent.
    pub fn as_fee_component(&self) -> Result<FeeComponent<'_>, ShapeError> {
        self.expect_kind(RecordKind::ComprehensiveFeeComponent, COMPREHENSIVE_FEE_COMPONENT)?;
        Ok(FeeComponent {
            record: self,
            amount: self.require(self.amount, "amount")?,
        })
    }

    fn expect_kind(&self, kind: RecordKind, expected: &'static str) -> Result<(), ShapeError> {
        if self.kind() == kind {
            Ok(())
        } else {
            Err(ShapeError::UnexpectedKind {
                record: self.reference(),
                expected,
            })
        }
    }

    fn require<T>(&self, value: Option<T>, field: &'static str) -> Result<T, ShapeError> {
        value.ok_or_else(|| ShapeError::MissingField {
            record: self.reference(),
            field,
        })
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = index;
    }
}

/// A `student itemized` record with its required fields present.
#[derive(Debug, Clone, Copy)]
pub struct StudentItemizedCost<'a> {
    record: &'a CostRecord,
    semester: &'a str,
    in_state: f64,
    out_state: f64,
}

impl<'a> StudentItemizedCost<'a> {
    pub fn record(&self) -> &'a CostRecord {
        self.record
    }

    pub fn name(&self) -> &'a str {
        self.record.name()
    }

    pub fn semester(&self) -> &'a str {
        self.semester
    }

    pub fn in_state(&self) -> f64 {
        self.in_state
    }

    pub fn out_state(&self) -> f64 {
        self.out_state
    }

    /// The flow carried by this cost: `in-state + out-state`.
    pub fn total(&self) -> f64 {
        self.in_state + self.out_state
    }
}

/// An `Auxiliary Comprehensive Fee Component` record with its amount present.
#[derive(Debug, Clone, Copy)]
pub struct FeeComponent<'a> {
    record: &'a CostRecord,
    amount: f64,
}

impl<'a> FeeComponent<'a> {
    pub fn record(&self) -> &'a CostRecord {
        self.record
    }

    pub fn name(&self) -> &'a str {
        self.record.name()
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }
}

/// A loaded dataset document.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    student_costs: Vec<CostRecord>,
    warnings: Vec<Diagnostic>,
}

impl Dataset {
    /// Create a dataset from records, reindexing them by position.
    pub fn new(student_costs: Vec<CostRecord>) -> Self {
        Self::with_warnings(student_costs, Vec::new())
    }

    pub(crate) fn with_warnings(mut student_costs: Vec<CostRecord>, warnings: Vec<Diagnostic>) -> Self {
        for (index, record) in student_costs.iter_mut().enumerate() {
            record.set_index(index);
        }
        Self {
            student_costs,
            warnings,
        }
    }

    /// The `student-costs` records in document order.
    pub fn student_costs(&self) -> &[CostRecord] {
        &self.student_costs
    }

    /// Non-fatal diagnostics raised while loading.
    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    /// Records of the given kind, in document order.
    pub fn records_of_kind(&self, kind: RecordKind) -> impl Iterator<Item = &CostRecord> {
        self.student_costs.iter().filter(move |record| record.kind() == kind)
    }
}
