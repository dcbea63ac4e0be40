use crate::alert_reporting::domain::Alert;
use crate::ports::outbound::AlertFormatter;
use crate::shared::Result;

/// JsonAlertFormatter adapter for JSON reports
///
/// Writes the alerts as a pretty-printed (2-space indented) array using the
/// GitHub field names, so the file can be fed back into the same decoder.
pub struct JsonAlertFormatter;

impl JsonAlertFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonAlertFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertFormatter for JsonAlertFormatter {
    fn format(&self, alerts: &[Alert]) -> Result<String> {
        serde_json::to_string_pretty(alerts)
            .map_err(|e| anyhow::anyhow!("Failed to serialize alerts to JSON: {}", e))
    }

    fn file_extension(&self) -> &'static str {
        "json"
    }
}
