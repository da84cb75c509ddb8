//! JSON output formatter for machine processing

use crate::domain::{DependencyResult, ResultSet, SummaryCounts, TierFilter};
use crate::output::OutputFormatter;
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
#[derive(Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self
    }
}

/// JSON representation of the full output
#[derive(Serialize)]
struct JsonOutput<'a> {
    /// Active filter (`all`, `high`, `medium`, `low`)
    filter: String,
    /// Counts over the whole result set
    summary: &'a SummaryCounts,
    /// Records passing the filter
    results: Vec<JsonResult<'a>>,
}

/// JSON representation of one record
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonResult<'a> {
    #[serde(flatten)]
    result: &'a DependencyResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    package_url: Option<String>,
}

impl OutputFormatter for JsonFormatter {
    fn format(
        &self,
        results: &ResultSet,
        filter: TierFilter,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let summary = results.summary_counts();
        let output = JsonOutput {
            filter: filter.to_string(),
            summary: &summary,
            results: results
                .filter(filter)
                .into_iter()
                .map(|result| JsonResult {
                    result,
                    package_url: result.package_url(),
                })
                .collect(),
        };

        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)
    }
}
