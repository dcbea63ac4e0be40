mod cli;

use cli::Args;
use dependabot_report::adapters::outbound::console::StderrProgressReporter;
use dependabot_report::adapters::outbound::filesystem::FileSystemReportWriter;
use dependabot_report::adapters::outbound::network::GitHubAlertClient;
use dependabot_report::alert_reporting::domain::RepositoryId;
use dependabot_report::application::dto::{OutputFormat, ReportRequest, ReportResponse};
use dependabot_report::application::use_cases::{ExportAlertsUseCase, RetryPolicy};
use dependabot_report::config;
use dependabot_report::ports::outbound::ProgressReporter;
use dependabot_report::shared::error::ExitCode;
use dependabot_report::shared::Result;
use std::process;
use std::time::Duration;

fn main() {
    match run() {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::for_error(&e).as_i32());
        }
    }
}

fn run() -> Result<ExitCode> {
    let args = Args::parse_args();
    let progress_reporter = StderrProgressReporter::new();

    let repository = RepositoryId::parse(&args.repo)?;

    // Resolve configuration before touching the network
    let config_file = config::load_config_file(&args.config)?;
    if let Some(file) = &config_file {
        progress_reporter.report(&format!(
            "📄 Loaded config from: {}",
            args.config.display()
        ));
        for key in file.unknown_keys() {
            progress_reporter.report_warning(&format!(
                "Unknown config key '{}' in {} is ignored",
                key,
                args.config.display()
            ));
        }
    }
    let effective = config::resolve(config_file, config::token_from_env(), &args.overrides())?;

    // Create adapters (Dependency Injection)
    let alert_repository = GitHubAlertClient::new(
        effective.token,
        &effective.api_base_url,
        effective.request_timeout,
    )?;
    let report_writer = FileSystemReportWriter::new(effective.output_dir);
    let retry_policy = RetryPolicy::new(
        effective.max_retries,
        Duration::from_millis(RetryPolicy::DEFAULT_DELAY_MS),
    );

    let use_case = ExportAlertsUseCase::new(
        alert_repository,
        report_writer,
        progress_reporter,
        retry_policy,
    );

    let request = ReportRequest::new(repository, effective.output_format);
    let response = use_case.execute(request)?;

    match &response {
        ReportResponse::NoOpenAlerts { .. } => {
            println!("No open Dependabot alerts found. Congratulations! :)");
        }
        ReportResponse::Exported {
            path,
            format,
            alert_count,
            ..
        } => {
            println!("Alerts exported to {}", path.display());
            if *format == OutputFormat::Csv {
                println!("{} alert row(s) written", alert_count);
            }
        }
    }

    if args.fail_on_alerts && response.has_open_alerts() {
        return Ok(ExitCode::AlertsFound);
    }
    Ok(ExitCode::Success)
}
