use crate::alert_reporting::domain::{ReportFileName, SeveritySummary};
use crate::alert_reporting::services::OpenAlertFilter;
use crate::application::dto::{ReportRequest, ReportResponse};
use crate::application::factories::FormatterFactory;
use crate::ports::outbound::{AlertPage, AlertRepository, ProgressReporter, ReportWriter};
use crate::shared::error::ReportError;
use crate::shared::Result;
use std::thread;
use std::time::Duration;

/// How often a timed-out alert request is retried before giving up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt; 0 disables retrying
    pub max_retries: u32,
    /// Pause before each retry
    pub delay: Duration,
}

impl RetryPolicy {
    pub const DEFAULT_MAX_RETRIES: u32 = 2;
    pub const DEFAULT_DELAY_MS: u64 = 1000;

    pub fn new(max_retries: u32, delay: Duration) -> Self {
        Self { max_retries, delay }
    }

    pub fn none() -> Self {
        Self::new(0, Duration::ZERO)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_MAX_RETRIES,
            Duration::from_millis(Self::DEFAULT_DELAY_MS),
        )
    }
}

/// ExportAlertsUseCase - Core use case for alert reporting
///
/// Fetches the alerts of one repository, keeps the open ones and writes
/// them as a report. When no alert is open, nothing is written.
///
/// # Type Parameters
/// * `AR` - AlertRepository implementation
/// * `RW` - ReportWriter implementation
/// * `PR` - ProgressReporter implementation
pub struct ExportAlertsUseCase<AR, RW, PR> {
    alert_repository: AR,
    report_writer: RW,
    progress_reporter: PR,
    retry_policy: RetryPolicy,
}

impl<AR, RW, PR> ExportAlertsUseCase<AR, RW, PR>
where
    AR: AlertRepository,
    RW: ReportWriter,
    PR: ProgressReporter,
{
    /// Creates a new ExportAlertsUseCase with injected dependencies
    pub fn new(
        alert_repository: AR,
        report_writer: RW,
        progress_reporter: PR,
        retry_policy: RetryPolicy,
    ) -> Self {
        Self {
            alert_repository,
            report_writer,
            progress_reporter,
            retry_policy,
        }
    }

    /// Executes the export
    ///
    /// # Returns
    /// [`ReportResponse::NoOpenAlerts`] when nothing is open, otherwise
    /// [`ReportResponse::Exported`] with the written file's path
    ///
    /// # Errors
    /// The first failure while fetching, formatting or writing ends the run.
    /// The report is rendered completely before the file is created.
    pub fn execute(&self, request: ReportRequest) -> Result<ReportResponse> {
        // Step 1: Fetch
        self.progress_reporter.report(&format!(
            "🔍 Fetching alerts from repository {}...",
            request.repository
        ));

        let page = self.fetch_with_retry(&request)?;
        let fetched = page.alerts.len();

        if page.has_more {
            self.progress_reporter.report_warning(&format!(
                "GitHub returned more than one page of alerts; only the first {} alert(s) were processed.",
                fetched
            ));
        }

        // Step 2: Keep open alerts only
        let open_alerts = OpenAlertFilter::filter(page.alerts);

        if open_alerts.is_empty() {
            return Ok(ReportResponse::NoOpenAlerts { fetched });
        }

        self.progress_reporter.report(&format!(
            "✅ Found {} open Dependabot alert(s) ({} fetched)",
            open_alerts.len(),
            fetched
        ));
        let summary = SeveritySummary::from_alerts(&open_alerts);
        self.progress_reporter.report_summary(&summary);

        // Step 3: Render
        self.progress_reporter
            .report(FormatterFactory::progress_message(request.format));

        let formatter = FormatterFactory::create(request.format);
        let content = formatter.format(&open_alerts)?;

        // Step 4: Write
        let file_name = ReportFileName::now(&request.repository, formatter.file_extension());
        let path = self
            .report_writer
            .write_report(file_name.as_str(), &content)?;

        Ok(ReportResponse::Exported {
            path,
            format: request.format,
            alert_count: open_alerts.len(),
            summary,
        })
    }

    /// Fetches alerts, retrying only requests that timed out
    fn fetch_with_retry(&self, request: &ReportRequest) -> Result<AlertPage> {
        let attempts = self.retry_policy.max_retries + 1;
        let mut attempt = 1;

        loop {
            self.progress_reporter
                .begin_wait("Waiting for the GitHub API...");
            let result = self.alert_repository.fetch_alerts(&request.repository);
            self.progress_reporter.end_wait();

            match result {
                Ok(page) => return Ok(page),
                Err(e) => {
                    let retryable = e
                        .downcast_ref::<ReportError>()
                        .is_some_and(ReportError::is_retryable);
                    if !retryable || attempt >= attempts {
                        return Err(e);
                    }

                    self.progress_reporter.report_warning(&format!(
                        "Request timed out (attempt {}/{}), retrying...",
                        attempt, attempts
                    ));
                    attempt += 1;
                    thread::sleep(self.retry_policy.delay);
                }
            }
        }
    }
}
