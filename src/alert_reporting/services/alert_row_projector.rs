use crate::alert_reporting::domain::{AdvisoryIdentifier, Alert, AlertRow};

/// Placeholder written when an advisory carries no CVE identifier
pub const MISSING_CVE: &str = "N/A";

/// AlertRowProjector - Flattens alerts into report rows
pub struct AlertRowProjector;

impl AlertRowProjector {
    /// Value of the first identifier typed `CVE`, in list order, or `N/A`
    pub fn resolve_cve(identifiers: &[AdvisoryIdentifier]) -> &str {
        identifiers
            .iter()
            .find(|id| id.is_cve())
            .map(AdvisoryIdentifier::value)
            .unwrap_or(MISSING_CVE)
    }

    pub fn project(alert: &Alert) -> AlertRow {
        let dependency = alert.dependency();
        let advisory = alert.security_advisory();

        AlertRow {
            dependency: dependency.package().name().to_string(),
            ecosystem: dependency.package().ecosystem().to_string(),
            severity: advisory.severity().to_string(),
            cve: Self::resolve_cve(advisory.identifiers()).to_string(),
            manifest: dependency.manifest_path().to_string(),
            description: advisory.description().to_string(),
            url: alert.html_url().to_string(),
        }
    }

    pub fn project_all(alerts: &[Alert]) -> Vec<AlertRow> {
        alerts.iter().map(Self::project).collect()
    }
}
