mod alert_row_projector;
mod open_alert_filter;

pub use alert_row_projector::{AlertRowProjector, MISSING_CVE};
pub use open_alert_filter::OpenAlertFilter;
