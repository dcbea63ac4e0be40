use crate::alert_reporting::domain::{Alert, RepositoryId};
use crate::shared::Result;

/// One response worth of alerts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertPage {
    /// Decoded alerts, in every state, in the order the source returned them
    pub alerts: Vec<Alert>,
    /// Whether the source announced further pages that were not retrieved
    pub has_more: bool,
}

impl AlertPage {
    pub fn new(alerts: Vec<Alert>, has_more: bool) -> Self {
        Self { alerts, has_more }
    }
}

/// AlertRepository port for retrieving Dependabot alerts
///
/// This port abstracts the remote source of alert data (the GitHub REST
/// API in production, canned data in tests).
pub trait AlertRepository {
    /// Fetches the first page of alerts of a repository
    ///
    /// # Arguments
    /// * `repository` - The `owner/name` repository to query
    ///
    /// # Errors
    /// Returns a [`ReportError`](crate::shared::error::ReportError) if:
    /// - The request cannot be sent or times out
    /// - The API answers with a non-success status
    /// - The response body does not decode as a list of alerts
    fn fetch_alerts(&self, repository: &RepositoryId) -> Result<AlertPage>;
}
