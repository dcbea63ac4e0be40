use super::OutputFormat;
use crate::alert_reporting::domain::RepositoryId;

/// ReportRequest - Request DTO for the alert export use case
#[derive(Debug, Clone)]
pub struct ReportRequest {
    /// Repository whose alerts are exported
    pub repository: RepositoryId,
    /// Format of the written report
    pub format: OutputFormat,
}

impl ReportRequest {
    pub fn new(repository: RepositoryId, format: OutputFormat) -> Self {
        Self { repository, format }
    }
}
