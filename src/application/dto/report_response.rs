use super::OutputFormat;
use crate::alert_reporting::domain::SeveritySummary;
use std::path::PathBuf;

/// ReportResponse - Outcome of the alert export use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportResponse {
    /// The repository has no open alerts; no report file was written
    NoOpenAlerts {
        /// Number of alerts received before filtering
        fetched: usize,
    },
    /// A report file was written
    Exported {
        path: PathBuf,
        format: OutputFormat,
        /// Number of alerts (CSV rows) in the report
        alert_count: usize,
        summary: SeveritySummary,
    },
}

impl ReportResponse {
    /// Whether the run found open alerts
    pub fn has_open_alerts(&self) -> bool {
        matches!(self, ReportResponse::Exported { alert_count, .. } if *alert_count > 0)
    }
}
