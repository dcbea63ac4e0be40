/// Integration tests for the application layer
mod test_utilities;

use dependabot_report::prelude::*;
use dependabot_report::shared::error::ReportError;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;
use test_utilities::fixture_alerts;
use test_utilities::mocks::*;

fn repository() -> RepositoryId {
    RepositoryId::parse("octocat/hello-world").unwrap()
}

fn use_case(
    alert_repository: MockAlertRepository,
    output_dir: &Path,
    progress_reporter: MockProgressReporter,
) -> ExportAlertsUseCase<MockAlertRepository, FileSystemReportWriter, MockProgressReporter> {
    ExportAlertsUseCase::new(
        alert_repository,
        FileSystemReportWriter::new(output_dir.to_path_buf()),
        progress_reporter,
        RetryPolicy::new(1, Duration::ZERO),
    )
}

fn assert_report_file_name(path: &Path, extension: &str) {
    let name = path.file_name().unwrap().to_str().unwrap();
    let stamp = name
        .strip_prefix("hello-world-alerts-")
        .and_then(|rest| rest.strip_suffix(&format!(".{}", extension)))
        .unwrap_or_else(|| panic!("unexpected report name {}", name));
    // YYYYMMDD-HHMMSS
    assert_eq!(stamp.len(), 15);
    assert_eq!(&stamp[8..9], "-");
    assert!(stamp
        .chars()
        .enumerate()
        .all(|(i, c)| i == 8 || c.is_ascii_digit()));
}

#[test]
fn test_export_json_happy_path() {
    let temp_dir = TempDir::new().unwrap();
    let output_dir = temp_dir.path().join("reports");
    let progress_reporter = MockProgressReporter::new();

    let response = use_case(
        MockAlertRepository::new(fixture_alerts()),
        &output_dir,
        progress_reporter.clone(),
    )
    .execute(ReportRequest::new(repository(), OutputFormat::Json))
    .unwrap();

    let ReportResponse::Exported {
        path,
        format,
        alert_count,
        summary,
    } = response
    else {
        panic!("expected a report to be written");
    };

    assert_eq!(format, OutputFormat::Json);
    assert_eq!(alert_count, 2);
    assert_eq!(summary.high, 1);
    assert_eq!(summary.medium, 1);
    assert_eq!(path.parent().unwrap(), output_dir);
    assert_report_file_name(&path, "json");

    let written: Vec<Alert> = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let names: Vec<&str> = written
        .iter()
        .map(|alert| alert.dependency().package().name())
        .collect();
    assert_eq!(names, vec!["lodash", "requests"]);
    assert!(written.iter().all(Alert::is_open));

    let messages = progress_reporter.get_messages();
    assert!(messages
        .iter()
        .any(|m| m.contains("Fetching alerts from repository octocat/hello-world")));
    assert!(messages.iter().any(|m| m.contains("Found 2 open")));
}

#[test]
fn test_export_csv_happy_path() {
    let temp_dir = TempDir::new().unwrap();

    let response = use_case(
        MockAlertRepository::new(fixture_alerts()),
        temp_dir.path(),
        MockProgressReporter::new(),
    )
    .execute(ReportRequest::new(repository(), OutputFormat::Csv))
    .unwrap();

    let ReportResponse::Exported { path, .. } = response else {
        panic!("expected a report to be written");
    };
    assert_report_file_name(&path, "csv");

    let mut reader = csv::Reader::from_path(&path).unwrap();
    assert_eq!(
        reader.headers().unwrap().iter().collect::<Vec<_>>(),
        vec!["Dependency", "Ecosystem", "Severity", "CVE", "Manifest", "Description", "URL"]
    );

    let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), 2);
    assert_eq!(&records[0][0], "lodash");
    assert_eq!(&records[0][3], "CVE-2021-23337");
    assert_eq!(
        &records[0][6],
        "https://github.com/octocat/hello-world/security/dependabot/3"
    );
    assert_eq!(&records[1][0], "requests");
    assert_eq!(&records[1][2], "moderate");
    assert_eq!(&records[1][3], "N/A");
    assert_eq!(
        &records[1][5],
        "Unintended leak of Proxy-Authorization header, see \"Session\" redirects,\nfixed in 2.31.0"
    );
}

#[test]
fn test_no_open_alerts_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let output_dir = temp_dir.path().join("reports");
    let closed: Vec<Alert> = fixture_alerts()
        .into_iter()
        .filter(|alert| !alert.is_open())
        .collect();

    let response = use_case(
        MockAlertRepository::new(closed),
        &output_dir,
        MockProgressReporter::new(),
    )
    .execute(ReportRequest::new(repository(), OutputFormat::Json))
    .unwrap();

    assert_eq!(response, ReportResponse::NoOpenAlerts { fetched: 1 });
    assert!(!response.has_open_alerts());
    assert!(!output_dir.exists());
}

#[test]
fn test_empty_alert_list_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();

    let response = use_case(
        MockAlertRepository::new(vec![]),
        temp_dir.path(),
        MockProgressReporter::new(),
    )
    .execute(ReportRequest::new(repository(), OutputFormat::Csv))
    .unwrap();

    assert_eq!(response, ReportResponse::NoOpenAlerts { fetched: 0 });
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_http_error_surfaces_status_and_body() {
    let temp_dir = TempDir::new().unwrap();
    let alert_repository = MockAlertRepository::with_status(404);

    let err = use_case(
        alert_repository.clone(),
        temp_dir.path(),
        MockProgressReporter::new(),
    )
    .execute(ReportRequest::new(repository(), OutputFormat::Json))
    .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("HTTP 404"));
    assert!(message.contains("Not Found"));
    assert_eq!(alert_repository.call_count(), 1);
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_timeout_is_retried_then_reported() {
    let temp_dir = TempDir::new().unwrap();
    let alert_repository = MockAlertRepository::with_timeout();
    let progress_reporter = MockProgressReporter::new();

    let err = use_case(
        alert_repository.clone(),
        temp_dir.path(),
        progress_reporter.clone(),
    )
    .execute(ReportRequest::new(repository(), OutputFormat::Json))
    .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ReportError>(),
        Some(ReportError::Timeout { .. })
    ));
    assert_eq!(alert_repository.call_count(), 2);
    assert_eq!(progress_reporter.get_warnings().len(), 1);
}

#[test]
fn test_more_pages_warns_and_exports_first_page() {
    let temp_dir = TempDir::new().unwrap();
    let progress_reporter = MockProgressReporter::new();

    let response = use_case(
        MockAlertRepository::new(fixture_alerts()).with_more_pages(),
        temp_dir.path(),
        progress_reporter.clone(),
    )
    .execute(ReportRequest::new(repository(), OutputFormat::Json))
    .unwrap();

    assert!(response.has_open_alerts());
    let warnings = progress_reporter.get_warnings();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("only the first 3 alert(s)"));
}

#[test]
fn test_output_dir_that_is_a_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("reports");
    fs::write(&blocker, "not a directory").unwrap();

    let err = use_case(
        MockAlertRepository::new(fixture_alerts()),
        &blocker,
        MockProgressReporter::new(),
    )
    .execute(ReportRequest::new(repository(), OutputFormat::Json))
    .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ReportError>(),
        Some(ReportError::FileWrite { .. })
    ));
}
