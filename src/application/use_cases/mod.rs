/// Use cases module containing application business logic orchestration
mod export_alerts;

pub use export_alerts::{ExportAlertsUseCase, RetryPolicy};
