use crate::alert_reporting::domain::Alert;

/// OpenAlertFilter - Keeps only alerts whose state is `open`
///
/// The API returns alerts in every state; filtering happens client-side so
/// the request does not depend on query-parameter support.
pub struct OpenAlertFilter;

impl OpenAlertFilter {
    /// Returns the open alerts, preserving their relative order
    pub fn filter(alerts: Vec<Alert>) -> Vec<Alert> {
        alerts.into_iter().filter(Alert::is_open).collect()
    }
}
