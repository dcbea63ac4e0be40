/// Flat, report-ready projection of an [`Alert`](super::Alert)
///
/// Field order matches the CSV column order. JSON and CSV reports of the
/// same alerts project to identical rows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AlertRow {
    pub dependency: String,
    pub ecosystem: String,
    pub severity: String,
    pub cve: String,
    pub manifest: String,
    pub description: String,
    pub url: String,
}

impl AlertRow {
    /// CSV header, one entry per field
    pub const HEADER: [&'static str; 7] = [
        "Dependency",
        "Ecosystem",
        "Severity",
        "CVE",
        "Manifest",
        "Description",
        "URL",
    ];

    pub fn as_record(&self) -> [&str; 7] {
        [
            &self.dependency,
            &self.ecosystem,
            &self.severity,
            &self.cve,
            &self.manifest,
            &self.description,
            &self.url,
        ]
    }
}
