pub mod alert;
pub mod alert_row;
pub mod report_file_name;
pub mod repository_id;
pub mod severity_summary;

pub use alert::{AdvisoryIdentifier, Alert, Dependency, PackageRef, SecurityAdvisory};
pub use alert_row::AlertRow;
pub use report_file_name::ReportFileName;
pub use repository_id::RepositoryId;
pub use severity_summary::SeveritySummary;
