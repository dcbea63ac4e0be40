/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (GitHub API, file system, console).
pub mod alert_repository;
pub mod formatter;
pub mod progress_reporter;
pub mod report_writer;

pub use alert_repository::{AlertPage, AlertRepository};
pub use formatter::AlertFormatter;
pub use progress_reporter::ProgressReporter;
pub use report_writer::ReportWriter;
