use crate::alert_reporting::domain::SeveritySummary;
use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::cell::RefCell;
use std::io::IsTerminal;
use std::time::Duration;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port, writing progress
/// information to stderr so it doesn't interfere with stdout output.
/// Uses indicatif for a spinner while the API request is in flight.
pub struct StderrProgressReporter {
    spinner: RefCell<Option<ProgressBar>>,
    colored: bool,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: RefCell::new(None),
            colored: std::io::stderr().is_terminal(),
        }
    }

    fn clear_spinner(&self) {
        if let Some(pb) = self.spinner.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }

    fn severity_line(&self, summary: &SeveritySummary) -> String {
        let counts = [
            ("critical", summary.critical),
            ("high", summary.high),
            ("medium", summary.medium),
            ("low", summary.low),
            ("other", summary.other),
        ];

        counts
            .iter()
            .map(|(label, count)| {
                let text = format!("{} {}", label, count);
                if !self.colored || *count == 0 {
                    return text;
                }
                match *label {
                    "critical" => text.red().bold().to_string(),
                    "high" => text.red().to_string(),
                    "medium" => text.yellow().to_string(),
                    "low" => text.cyan().to_string(),
                    _ => text,
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn begin_wait(&self, message: &str) {
        self.clear_spinner();

        let pb = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .template("   {spinner:.green} {msg} ({elapsed})")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        pb.set_style(style);
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        *self.spinner.borrow_mut() = Some(pb);
    }

    fn end_wait(&self) {
        self.clear_spinner();
    }

    fn report_warning(&self, message: &str) {
        self.clear_spinner();
        if self.colored {
            eprintln!("{}", format!("⚠️  Warning: {}", message).yellow());
        } else {
            eprintln!("⚠️  Warning: {}", message);
        }
    }

    fn report_summary(&self, summary: &SeveritySummary) {
        self.clear_spinner();
        eprintln!("📊 Open alerts by severity: {}", self.severity_line(summary));
    }
}
