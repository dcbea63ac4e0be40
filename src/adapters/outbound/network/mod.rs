/// Network adapters for external API calls
mod github_alert_client;

pub use github_alert_client::GitHubAlertClient;
