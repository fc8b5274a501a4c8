//! Integration tests for the ReportBuilder API

use float_cmp::assert_approx_eq;
use tributary::{
    ReportBuilder, TributaryError,
    build::{BuildError, GraphIntegrityError},
    charts,
    config::AppConfig,
};
use tributary_dataset::ShapeError;

const DATASET: &str = include_str!("../../../data/jmu.json");
const LITERAL: &str = include_str!("../../../data/university.json");
const MISSING_AMOUNT: &str = include_str!("../../../data/errors/missing_amount.json");
const SYNTAX_ERROR: &str = include_str!("../../../data/errors/syntax_error.json");
const UNKNOWN_SEMESTER: &str = include_str!("../../../data/errors/unknown_semester.json");
const DANGLING_LITERAL: &str = include_str!("../../../data/errors/dangling_literal.json");

#[test]
fn test_builds_four_charts() {
    let builder = ReportBuilder::default();
    let dataset = builder.load_dataset(DATASET).expect("Failed to load dataset");

    let charts = builder.build_charts(&dataset).expect("Failed to build charts");

    let titles: Vec<_> = charts.iter().map(|chart| chart.title()).collect();
    assert_eq!(
        titles,
        [
            "Student Itemized Costs",
            "Comprehensive Fee",
            "University Revenues and Expenses",
            "Athletics Revenues and Expenses",
        ]
    );

    // Five items per semester plus the three roots, items shared across semesters.
    let student = charts[0].diagram();
    assert_eq!(student.nodes().len(), 8);
    assert_eq!(student.links().len(), 12);
    assert_approx_eq!(f64, student.incoming_value("Tuition"), 2.0 * (3819.0 + 13194.0));

    let fee = charts[1].diagram();
    assert_eq!(fee.links()[0].target(), "Intercollegiate Athletics");
    assert_approx_eq!(f64, fee.outgoing_value("Comprehensive Fee"), 7400.0);
}

#[test]
fn test_render_html() {
    let builder = ReportBuilder::new(AppConfig::default());
    let dataset = builder.load_dataset(DATASET).unwrap();
    let charts = builder.build_charts(&dataset).unwrap();

    let html = builder.render_html(&charts).expect("Failed to render");

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("d3.sankey()"));
    assert!(html.contains("Athletics Revenues and Expenses"));
    assert!(html.contains("JMU Athletics\\n1,000,000"));
}

#[test]
fn test_render_json_round_trips_diagrams() {
    let builder = ReportBuilder::default();
    let dataset = builder.load_dataset(DATASET).unwrap();
    let charts = builder.build_charts(&dataset).unwrap();

    let json = builder.render_json(&charts).unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let array = value.as_array().unwrap();
    assert_eq!(array.len(), 4);
    assert_eq!(array[2]["nodes"].as_array().unwrap().len(), 12);
}

#[test]
fn test_literal_chart() {
    let builder = ReportBuilder::default();
    let literal = builder.load_literal(LITERAL).unwrap();

    let chart = builder.literal_chart(literal, 5).unwrap();

    assert_eq!(chart.title(), "Student Aid Sources");
    assert_approx_eq!(f64, chart.diagram().node_value("Student Aid"), 110_000.0);
}

#[test]
fn test_dangling_literal_names_chart() {
    let builder = ReportBuilder::default();
    let literal = builder.load_literal(DANGLING_LITERAL).unwrap();

    let err = builder.literal_chart(literal, 5).unwrap_err();

    match err {
        TributaryError::Chart { index, title, error } => {
            assert_eq!(index, 5);
            assert_eq!(title, "Broken");
            assert!(matches!(
                error,
                BuildError::Graph(GraphIntegrityError::DanglingEndpoint { .. })
            ));
        }
        other => panic!("Expected chart error, got {other:?}"),
    }
}

#[test]
fn test_missing_amount_fails_comprehensive_fee() {
    let builder = ReportBuilder::default();
    let dataset = builder.load_dataset(MISSING_AMOUNT).unwrap();

    let err = builder.build_charts(&dataset).unwrap_err();

    match err {
        TributaryError::Chart { index, title, error } => {
            assert_eq!(index, 2);
            assert_eq!(title, charts::COMPREHENSIVE_FEE_TITLE);
            match error {
                BuildError::Shape(ShapeError::MissingField { record, field }) => {
                    assert_eq!(field, "amount");
                    assert_eq!(record.index(), 1);
                    assert_eq!(record.name(), "University Recreation");
                }
                other => panic!("Expected missing field, got {other:?}"),
            }
        }
        other => panic!("Expected chart error, got {other:?}"),
    }
}

#[test]
fn test_unknown_semester_fails_student_chart() {
    let builder = ReportBuilder::default();
    let dataset = builder.load_dataset(UNKNOWN_SEMESTER).unwrap();

    let err = builder.build_charts(&dataset).unwrap_err();

    assert!(matches!(err, TributaryError::Chart { index: 1, .. }));
    assert!(err.to_string().contains("Summer"));
}

#[test]
fn test_syntax_error_keeps_source() {
    let builder = ReportBuilder::default();

    let err = builder.load_dataset(SYNTAX_ERROR).unwrap_err();

    match err {
        TributaryError::Load { err, src } => {
            assert_eq!(src, SYNTAX_ERROR);
            assert_eq!(err.diagnostics().len(), 1);
            assert!(!err.diagnostics()[0].labels().is_empty());
        }
        other => panic!("Expected load error, got {other:?}"),
    }
}
