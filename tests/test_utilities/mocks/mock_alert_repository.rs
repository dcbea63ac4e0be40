use dependabot_report::prelude::*;
use dependabot_report::shared::error::ReportError;
use std::sync::{Arc, Mutex};

/// Mock AlertRepository for testing
///
/// Answers every call the same way and counts the calls.
#[derive(Clone)]
pub struct MockAlertRepository {
    pub alerts: Vec<Alert>,
    pub has_more: bool,
    pub status: Option<u16>,
    pub timeout: bool,
    pub calls: Arc<Mutex<usize>>,
}

#[allow(dead_code)]
impl MockAlertRepository {
    pub fn new(alerts: Vec<Alert>) -> Self {
        Self {
            alerts,
            has_more: false,
            status: None,
            timeout: false,
            calls: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_more_pages(mut self) -> Self {
        self.has_more = true;
        self
    }

    pub fn with_status(status: u16) -> Self {
        Self {
            status: Some(status),
            ..Self::new(vec![])
        }
    }

    pub fn with_timeout() -> Self {
        Self {
            timeout: true,
            ..Self::new(vec![])
        }
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

impl AlertRepository for MockAlertRepository {
    fn fetch_alerts(&self, repository: &RepositoryId) -> Result<AlertPage> {
        *self.calls.lock().unwrap() += 1;

        if self.timeout {
            return Err(ReportError::Timeout {
                url: format!("https://api.github.com/repos/{}/dependabot/alerts", repository),
                seconds: 1,
            }
            .into());
        }
        if let Some(status) = self.status {
            return Err(ReportError::HttpStatus {
                status,
                body: r#"{"message":"Not Found"}"#.to_string(),
            }
            .into());
        }
        Ok(AlertPage::new(self.alerts.clone(), self.has_more))
    }
}
