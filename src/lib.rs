//! dependabot-report - export open Dependabot alerts of a GitHub repository
//!
//! This library fetches the Dependabot alerts of one repository from the
//! GitHub REST API, keeps the open ones and writes them to a timestamped
//! JSON or CSV report, following hexagonal architecture and Domain-Driven
//! Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`alert_reporting`): Alert model, open-alert filtering and row projection
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): GitHub client, formatters, report writer, console output
//! - **Configuration** (`config`): YAML file, environment and command-line settings
//! - **Shared** (`shared`): Common error and result types
//!
//! # Example
//!
//! ```no_run
//! use dependabot_report::prelude::*;
//! use secrecy::SecretString;
//! use std::path::PathBuf;
//! use std::time::Duration;
//!
//! # fn main() -> Result<()> {
//! let token = SecretString::from(std::env::var("DEPENDABOT_TOKEN")?);
//! let alert_repository =
//!     GitHubAlertClient::new(token, "https://api.github.com", Duration::from_secs(30))?;
//! let report_writer = FileSystemReportWriter::new(PathBuf::from("reports"));
//! let progress_reporter = StderrProgressReporter::new();
//!
//! let use_case = ExportAlertsUseCase::new(
//!     alert_repository,
//!     report_writer,
//!     progress_reporter,
//!     RetryPolicy::default(),
//! );
//!
//! let request = ReportRequest::new(RepositoryId::parse("octocat/hello-world")?, OutputFormat::Csv);
//! match use_case.execute(request)? {
//!     ReportResponse::Exported { path, .. } => println!("Alerts exported to {}", path.display()),
//!     ReportResponse::NoOpenAlerts { .. } => println!("No open alerts"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod alert_reporting;
pub mod application;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::FileSystemReportWriter;
    pub use crate::adapters::outbound::formatters::{CsvAlertFormatter, JsonAlertFormatter};
    pub use crate::adapters::outbound::network::GitHubAlertClient;
    pub use crate::alert_reporting::domain::{
        AdvisoryIdentifier, Alert, AlertRow, Dependency, PackageRef, ReportFileName, RepositoryId,
        SecurityAdvisory, SeveritySummary,
    };
    pub use crate::alert_reporting::services::{AlertRowProjector, OpenAlertFilter};
    pub use crate::application::dto::{OutputFormat, ReportRequest, ReportResponse};
    pub use crate::application::factories::FormatterFactory;
    pub use crate::application::use_cases::{ExportAlertsUseCase, RetryPolicy};
    pub use crate::ports::outbound::{
        AlertFormatter, AlertPage, AlertRepository, ProgressReporter, ReportWriter,
    };
    pub use crate::shared::Result;
}
