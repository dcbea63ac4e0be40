use crate::shared::Result;
use std::path::PathBuf;

/// ReportWriter port for persisting a rendered report
pub trait ReportWriter {
    /// Writes `content` into a file called `file_name`
    ///
    /// # Returns
    /// The path of the written file
    ///
    /// # Errors
    /// Returns an error if the destination cannot be created or written
    fn write_report(&self, file_name: &str, content: &str) -> Result<PathBuf>;
}
