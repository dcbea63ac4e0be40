use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - report written, or no open alerts found
    Success = 0,
    /// Open alerts were exported and `--fail-on-alerts` was given
    AlertsFound = 1,
    /// Invalid command-line arguments or configuration
    InvalidArguments = 2,
    /// Application error (network error, API error, decode error, file I/O error)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for an error that terminated the run.
    ///
    /// Configuration problems map to `InvalidArguments`; everything else,
    /// including errors that are not a [`ReportError`], is an `ApplicationError`.
    pub fn for_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<ReportError>() {
            Some(ReportError::Configuration { .. }) => ExitCode::InvalidArguments,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::AlertsFound => write!(f, "Alerts Found (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for alert reporting.
///
/// Every variant is terminal for the run. Only [`ReportError::Timeout`]
/// may be retried before it is surfaced.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Invalid configuration: {reason}\n\n💡 Hint: {hint}")]
    Configuration { reason: String, hint: String },

    #[error("Failed to reach the GitHub API\nDetails: {details}\n\n💡 Hint: Please check your internet connection and the configured API base URL")]
    Network { details: String },

    #[error("Error fetching alerts: HTTP {status}\nResponse: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Request to {url} timed out after {seconds}s\n\n💡 Hint: Increase the timeout with --timeout or request_timeout_secs")]
    Timeout { url: String, seconds: u64 },

    #[error("Failed to decode Dependabot alerts response\nDetails: {details}")]
    Decode { details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the output directory is writable")]
    FileWrite { path: PathBuf, details: String },
}

impl ReportError {
    /// Shorthand for a configuration error.
    pub fn configuration(reason: impl Into<String>, hint: impl Into<String>) -> Self {
        ReportError::Configuration {
            reason: reason.into(),
            hint: hint.into(),
        }
    }

    /// Whether the failed operation may be attempted again.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ReportError::Timeout { .. })
    }
}
