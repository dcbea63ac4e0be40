/// Mock implementations for testing
mod mock_alert_repository;
mod mock_progress_reporter;

#[allow(unused_imports)]
pub use mock_alert_repository::MockAlertRepository;
#[allow(unused_imports)]
pub use mock_progress_reporter::MockProgressReporter;
