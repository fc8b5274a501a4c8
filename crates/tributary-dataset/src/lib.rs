//! Loading of Tributary input documents.
//!
//! Two documents are understood:
//!
//! - the cost dataset, a JSON object with a `student-costs` array of
//!   [`CostRecord`]s ([`parse`])
//! - literal diagrams with hand-authored nodes and links ([`parse_literal`])
//!
//! Failures are reported as a [`LoadError`] holding located [`Diagnostic`]s
//! so callers can point at the offending bytes of the source.
//!
//! [`Diagnostic`]: error::Diagnostic

pub mod error;
pub mod literal;
pub mod record;

mod span;

use log::debug;
use serde::Deserialize;

use tributary_core::error_code::ErrorCode;

pub use error::{LoadError, RecordRef, ShapeError};
pub use literal::LiteralDiagram;
pub use record::{CostRecord, Dataset, RecordKind};
pub use span::Span;

use error::{Diagnostic, from_json_error};

#[derive(Deserialize)]
struct DatasetDocument {
    #[serde(rename = "student-costs")]
    student_costs: Vec<CostRecord>,
}

/// Parse a cost dataset document.
///
/// Records whose `type` no chart consumes are kept and reported as warnings
/// on the returned [`Dataset`].
///
/// # Errors
///
/// Returns a [`LoadError`] when the source is not valid JSON or does not have
/// the dataset shape.
///
/// # Example
///
/// ```
/// let dataset = tributary_dataset::parse(
///     r#"{"student-costs": [{"type": "Auxiliary Comprehensive Fee Component", "name": "Athletics", "amount": 1138}]}"#,
/// )?;
/// assert_eq!(dataset.student_costs().len(), 1);
/// # Ok::<(), tributary_dataset::LoadError>(())
/// ```
pub fn parse(source: &str) -> Result<Dataset, LoadError> {
    let document: DatasetDocument =
        serde_json::from_str(source).map_err(|err| from_json_error(&err, source, "dataset"))?;

    let warnings: Vec<_> = document
        .student_costs
        .iter()
        .enumerate()
        .filter(|(_, record)| record.kind() == RecordKind::Other)
        .map(|(index, record)| {
            debug!(index = index, kind = record.type_name(), name = record.name(); "Record type is not used by any chart");
            Diagnostic::warning(format!(
                "record #{index} `{}` has unrecognized type `{}`",
                record.name(),
                record.type_name()
            ))
            .with_help(format!(
                "charts consume `{}` and `{}` records",
                record::STUDENT_ITEMIZED,
                record::COMPREHENSIVE_FEE_COMPONENT
            ))
        })
        .collect();

    debug!(records = document.student_costs.len(), warnings = warnings.len(); "Dataset parsed");
    Ok(Dataset::with_warnings(document.student_costs, warnings))
}

/// Parse a literal diagram document.
///
/// # Errors
///
/// Returns a [`LoadError`] when the source is not valid JSON or does not have
/// the literal diagram shape.
pub fn parse_literal(source: &str) -> Result<LiteralDiagram, LoadError> {
    let literal: LiteralDiagram = serde_json::from_str(source)
        .map_err(|err| from_json_error(&err, source, "literal diagram"))?;

    if literal.nodes().is_empty() {
        return Err(Diagnostic::error("literal diagram has no nodes")
            .with_code(ErrorCode::E002)
            .with_help("add at least one entry to `nodes`")
            .into());
    }

    debug!(
        title = literal.title().unwrap_or("untitled"),
        nodes = literal.nodes().len(),
        links = literal.links().len();
        "Literal diagram parsed"
    );
    Ok(literal)
}
