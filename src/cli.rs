use clap::Parser;
use std::path::PathBuf;

use dependabot_report::application::dto::OutputFormat;
use dependabot_report::config::{CliOverrides, DEFAULT_CONFIG_FILENAME};

/// Export open Dependabot alerts of a GitHub repository to JSON or CSV
#[derive(Parser, Debug)]
#[command(name = "dependabot-report")]
#[command(version)]
#[command(
    about = "Export open Dependabot alerts of a GitHub repository to JSON or CSV",
    long_about = None
)]
pub struct Args {
    /// Repository to report on, as owner/name
    #[arg(short, long, value_name = "OWNER/NAME")]
    pub repo: String,

    /// Output format: json or csv (overrides output_format from the config file)
    #[arg(short, long, value_name = "FORMAT")]
    pub output: Option<OutputFormat>,

    /// Path to the YAML config file
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_CONFIG_FILENAME)]
    pub config: PathBuf,

    /// Directory the report is written to (created if missing)
    #[arg(short = 'd', long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(short, long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Exit with code 1 when open alerts were exported
    #[arg(long)]
    pub fail_on_alerts: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The settings that take precedence over the config file
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            output_format: self.output,
            output_dir: self.output_dir.clone(),
            timeout_secs: self.timeout,
        }
    }
}
