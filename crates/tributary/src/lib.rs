//! Tributary - Sankey diagram reports of university cost flows.
//!
//! Loads a cost dataset, derives and validates the diagrams of a report, and
//! exports them as a standalone HTML page or as JSON diagram descriptions.
//! Node placement and link routing are left to the d3-sankey layout in the
//! exported page.

pub mod build;
pub mod charts;
pub mod config;
pub mod export;
pub mod view;

mod error;

pub use tributary_core::{color, diagram, error_code, format};
pub use tributary_dataset::{Dataset, LiteralDiagram};

pub use error::TributaryError;

use log::{debug, info, trace, warn};

use charts::Chart;
use config::AppConfig;
use export::Exporter;

/// Builder for loading, building, and exporting Tributary reports.
///
/// # Examples
///
/// ```rust,no_run
/// use tributary::{ReportBuilder, config::AppConfig};
///
/// let source = std::fs::read_to_string("data/jmu.json").unwrap();
/// let builder = ReportBuilder::new(AppConfig::default());
///
/// let dataset = builder.load_dataset(&source).expect("Failed to load");
/// let charts = builder.build_charts(&dataset).expect("Failed to build");
/// let html = builder.render_html(&charts).expect("Failed to render");
/// ```
#[derive(Default)]
pub struct ReportBuilder {
    config: AppConfig,
}

impl ReportBuilder {
    /// Create a new report builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this builder renders with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse a cost dataset document.
    ///
    /// Warnings raised while loading are logged and kept on the dataset.
    ///
    /// # Errors
    ///
    /// Returns [`TributaryError::Load`] with located diagnostics when the
    /// document is not a valid dataset.
    pub fn load_dataset(&self, source: &str) -> Result<Dataset, TributaryError> {
        info!("Loading dataset");

        let dataset = tributary_dataset::parse(source)
            .map_err(|err| TributaryError::new_load_error(err, source))?;

        for warning in dataset.warnings() {
            warn!("{warning}");
        }
        debug!(records = dataset.student_costs().len(); "Dataset loaded");

        Ok(dataset)
    }

    /// Parse a literal diagram document.
    ///
    /// # Errors
    ///
    /// Returns [`TributaryError::Load`] when the document is not a valid
    /// literal diagram.
    pub fn load_literal(&self, source: &str) -> Result<LiteralDiagram, TributaryError> {
        tributary_dataset::parse_literal(source).map_err(|err| TributaryError::new_load_error(err, source))
    }

    /// Build the four charts of the report from a dataset.
    ///
    /// # Errors
    ///
    /// Returns [`TributaryError::Chart`] naming the first chart that failed
    /// to build.
    pub fn build_charts(&self, dataset: &Dataset) -> Result<Vec<Chart>, TributaryError> {
        info!("Building charts");

        let charts = vec![
            charts::student_itemized(dataset)
                .map_err(|err| TributaryError::in_chart(1, charts::STUDENT_ITEMIZED_TITLE, err))?,
            charts::comprehensive_fee(dataset)
                .map_err(|err| TributaryError::in_chart(2, charts::COMPREHENSIVE_FEE_TITLE, err))?,
            charts::university_finances()
                .map_err(|err| TributaryError::in_chart(3, charts::UNIVERSITY_FINANCES_TITLE, err))?,
            charts::athletics().map_err(|err| TributaryError::in_chart(4, charts::ATHLETICS_TITLE, err))?,
        ];

        for chart in &charts {
            trace!(
                title = chart.title(),
                nodes = chart.diagram().nodes().len(),
                links = chart.diagram().links().len();
                "Chart ready"
            );
        }
        info!(charts = charts.len(); "Charts built");

        Ok(charts)
    }

    /// Build a chart from a literal diagram.
    ///
    /// `index` is the 1-based position the chart takes in the report, used
    /// for the fallback title and error context.
    ///
    /// # Errors
    ///
    /// Returns [`TributaryError::Chart`] if the diagram violates a graph
    /// invariant.
    pub fn literal_chart(&self, literal: LiteralDiagram, index: usize) -> Result<Chart, TributaryError> {
        let fallback = format!("Chart {index}");
        let title = literal.title().unwrap_or(&fallback).to_string();
        charts::literal(literal, &fallback).map_err(|err| TributaryError::in_chart(index, title, err))
    }

    /// Render charts to a standalone HTML page.
    ///
    /// # Errors
    ///
    /// Returns [`TributaryError::Export`] if the configuration is unusable
    /// or the charts cannot be encoded.
    pub fn render_html(&self, charts: &[Chart]) -> Result<String, TributaryError> {
        let mut exporter = export::html::HtmlBuilder::new()
            .with_layout(self.config.layout())
            .with_style(self.config.style())
            .with_assets(self.config.assets())
            .build()?;
        Ok(exporter.export_charts(charts)?)
    }

    /// Render charts as JSON diagram descriptions.
    ///
    /// # Errors
    ///
    /// Returns [`TributaryError::Export`] if the charts cannot be encoded.
    pub fn render_json(&self, charts: &[Chart]) -> Result<String, TributaryError> {
        Ok(export::json::Json::new().export_charts(charts)?)
    }
}
