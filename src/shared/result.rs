/// Type alias for Result with anyhow::Error as the error type.
/// Typed failures are raised as [`crate::shared::error::ReportError`] and
/// recovered with `downcast_ref` where the exit code is chosen.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
