use crate::alert_reporting::domain::Alert;
use crate::shared::Result;

/// AlertFormatter port for rendering a report
///
/// This port abstracts the report format (JSON, CSV) so the use case can
/// produce the whole file content before anything touches the disk.
pub trait AlertFormatter {
    /// Renders the given alerts into the report content
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, alerts: &[Alert]) -> Result<String>;

    /// File extension for reports in this format, without the dot
    fn file_extension(&self) -> &'static str;
}
