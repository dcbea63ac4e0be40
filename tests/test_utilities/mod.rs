pub mod mocks;

use dependabot_report::prelude::*;

/// Loads the alert list captured from the GitHub API in `tests/fixtures/alerts.json`
#[allow(dead_code)]
pub fn fixture_alerts() -> Vec<Alert> {
    let content = std::fs::read_to_string("tests/fixtures/alerts.json").unwrap();
    serde_json::from_str(&content).unwrap()
}
