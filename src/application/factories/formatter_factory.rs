use crate::adapters::outbound::formatters::{CsvAlertFormatter, JsonAlertFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::AlertFormatter;

/// Factory for creating report formatters
///
/// This factory encapsulates the creation logic for different formatter implementations,
/// following the Factory Pattern. It belongs in the application layer as it orchestrates
/// the selection of infrastructure adapters based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use dependabot_report::application::dto::OutputFormat;
    /// use dependabot_report::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Csv);
    /// assert_eq!(formatter.file_extension(), "csv");
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn AlertFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonAlertFormatter::new()),
            OutputFormat::Csv => Box::new(CsvAlertFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Exporting alerts to JSON format...",
            OutputFormat::Csv => "📝 Exporting alerts to CSV format...",
        }
    }
}
