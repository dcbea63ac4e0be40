use super::RepositoryId;
use chrono::{Local, NaiveDateTime};

/// Compact, lexically sortable timestamp used in report file names
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Report file name value object: `<repo>-alerts-<YYYYMMDD-HHMMSS>.<ext>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFileName(String);

impl ReportFileName {
    /// File name stamped with the given local date-time
    pub fn at(repository: &RepositoryId, timestamp: &NaiveDateTime, extension: &str) -> Self {
        Self(format!(
            "{}-alerts-{}.{}",
            repository.basename(),
            timestamp.format(TIMESTAMP_FORMAT),
            extension
        ))
    }

    /// File name stamped with the current local time
    pub fn now(repository: &RepositoryId, extension: &str) -> Self {
        Self::at(repository, &Local::now().naive_local(), extension)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ReportFileName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
