use log::debug;

use super::{Error, Exporter};
use crate::charts::Chart;

/// Writes charts as a pretty-printed JSON array of
/// `{ "title", "nodes", "links" }` objects.
#[derive(Debug, Default)]
pub struct Json;

impl Json {
    pub fn new() -> Self {
        Self
    }
}

impl Exporter for Json {
    fn export_charts(&mut self, charts: &[Chart]) -> Result<String, Error> {
        let mut output = serde_json::to_string_pretty(charts)?;
        output.push('\n');
        debug!(charts = charts.len(), bytes = output.len(); "Charts exported as JSON");
        Ok(output)
    }
}
