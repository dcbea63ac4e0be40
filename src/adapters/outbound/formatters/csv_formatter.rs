use crate::alert_reporting::domain::{Alert, AlertRow};
use crate::alert_reporting::services::AlertRowProjector;
use crate::ports::outbound::AlertFormatter;
use crate::shared::Result;
use csv::{Terminator, WriterBuilder};

/// CsvAlertFormatter adapter for CSV reports
///
/// Seven fixed columns, one row per alert. Fields are quoted when they
/// contain delimiters, quotes or line breaks (advisory descriptions often do).
pub struct CsvAlertFormatter;

impl CsvAlertFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CsvAlertFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertFormatter for CsvAlertFormatter {
    fn format(&self, alerts: &[Alert]) -> Result<String> {
        let mut writer = WriterBuilder::new()
            .terminator(Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        writer.write_record(AlertRow::HEADER)?;
        for row in AlertRowProjector::project_all(alerts) {
            writer.write_record(row.as_record())?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Failed to flush CSV output: {}", e.error()))?;
        Ok(String::from_utf8(bytes)?)
    }

    fn file_extension(&self) -> &'static str {
        "csv"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert_reporting::domain::{
        AdvisoryIdentifier, Dependency, PackageRef, SecurityAdvisory,
    };

    fn alert(name: &str, description: &str, identifiers: Vec<(&str, &str)>) -> Alert {
        Alert::new(
            Dependency::new(
                PackageRef::new(name.to_string(), "pip".to_string()),
                "requirements.txt".to_string(),
                None,
            ),
            SecurityAdvisory::new(
                "high".to_string(),
                description.to_string(),
                identifiers
                    .into_iter()
                    .map(|(t, v)| AdvisoryIdentifier::new(t.to_string(), v.to_string()))
                    .collect(),
            ),
            format!("https://github.com/o/r/security/dependabot/{}", name),
            "open".to_string(),
        )
    }

    #[test]
    fn test_header_only_for_no_alerts() {
        let output = CsvAlertFormatter::new().format(&[]).unwrap();
        assert_eq!(
            output,
            "Dependency,Ecosystem,Severity,CVE,Manifest,Description,URL\n"
        );
    }

    #[test]
    fn test_rows_in_order_with_cve_fallback() {
        let alerts = vec![
            alert("django", "SQL injection", vec![("GHSA", "GHSA-1"), ("CVE", "CVE-2018-6188")]),
            alert("flask", "Session leak", vec![("GHSA", "GHSA-2")]),
        ];

        let output = CsvAlertFormatter::new().format(&alerts).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[1],
            "django,pip,high,CVE-2018-6188,requirements.txt,SQL injection,https://github.com/o/r/security/dependabot/django"
        );
        assert_eq!(
            lines[2],
            "flask,pip,high,N/A,requirements.txt,Session leak,https://github.com/o/r/security/dependabot/flask"
        );
    }

    #[test]
    fn test_fields_with_special_characters_are_quoted() {
        let alerts = vec![alert(
            "pyyaml",
            "Arbitrary code, via \"load\"\nUse safe_load",
            vec![],
        )];

        let output = CsvAlertFormatter::new().format(&alerts).unwrap();
        assert!(output.contains("\"Arbitrary code, via \"\"load\"\"\nUse safe_load\""));

        let mut reader = csv::Reader::from_reader(output.as_bytes());
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(&record[5], "Arbitrary code, via \"load\"\nUse safe_load");
        assert_eq!(&record[3], "N/A");
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(CsvAlertFormatter::default().file_extension(), "csv");
    }
}
