use crate::alert_reporting::domain::{Alert, RepositoryId};
use crate::ports::outbound::{AlertPage, AlertRepository};
use crate::shared::error::ReportError;
use crate::shared::Result;
use reqwest::blocking::{Client, Request};
use reqwest::header::{ACCEPT, CACHE_CONTROL, LINK};
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

/// GitHub REST API client for the Dependabot alerts endpoint
///
/// Sends exactly one request per call. Only the first page of results is
/// read; when GitHub announces more, [`AlertPage::has_more`] is set.
///
/// # Security
/// - The token is kept in a [`SecretString`] and only exposed while
///   building the `Authorization` header
/// - Every request is bounded by the configured timeout
pub struct GitHubAlertClient {
    client: Client,
    api_base_url: String,
    token: SecretString,
    timeout: Duration,
}

impl GitHubAlertClient {
    const MEDIA_TYPE: &'static str = "application/vnd.github+json";
    const API_VERSION_HEADER: &'static str = "X-GitHub-Api-Version";
    const API_VERSION: &'static str = "2022-11-28";

    /// Creates a new client
    ///
    /// # Arguments
    /// * `token` - Personal access token with Dependabot alerts read access
    /// * `api_base_url` - `https://api.github.com`, or a GitHub Enterprise API root
    /// * `timeout` - Upper bound for the whole request, body included
    pub fn new(token: SecretString, api_base_url: &str, timeout: Duration) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("dependabot-report/{}", version);
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| ReportError::Network {
                details: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            token,
            timeout,
        })
    }

    /// Endpoint listing the Dependabot alerts of `repository`
    pub fn alerts_url(&self, repository: &RepositoryId) -> String {
        format!(
            "{}/repos/{}/{}/dependabot/alerts",
            self.api_base_url,
            urlencoding::encode(repository.owner()),
            urlencoding::encode(repository.basename())
        )
    }

    /// Builds the authenticated GET request without sending it
    fn build_request(&self, repository: &RepositoryId) -> Result<Request> {
        let request = self
            .client
            .get(self.alerts_url(repository))
            .bearer_auth(self.token.expose_secret())
            .header(ACCEPT, Self::MEDIA_TYPE)
            .header(CACHE_CONTROL, "no-cache")
            .header(Self::API_VERSION_HEADER, Self::API_VERSION)
            .build()
            .map_err(|e| ReportError::Network {
                details: format!("Failed to build request: {}", e),
            })?;
        Ok(request)
    }

    fn transport_error(&self, url: &str, error: reqwest::Error) -> ReportError {
        if error.is_timeout() {
            ReportError::Timeout {
                url: url.to_string(),
                seconds: self.timeout.as_secs(),
            }
        } else {
            ReportError::Network {
                details: error.to_string(),
            }
        }
    }
}

impl AlertRepository for GitHubAlertClient {
    fn fetch_alerts(&self, repository: &RepositoryId) -> Result<AlertPage> {
        let request = self.build_request(repository)?;
        let url = request.url().to_string();

        let response = self
            .client
            .execute(request)
            .map_err(|e| self.transport_error(&url, e))?;

        let status = response.status().as_u16();
        let link = response
            .headers()
            .get(LINK)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response
            .text()
            .map_err(|e| self.transport_error(&url, e))?;

        interpret_response(status, link.as_deref(), &body)
    }
}

/// Turns a raw HTTP response into an [`AlertPage`]
///
/// Any status other than 200 is an error carrying the status and body.
fn interpret_response(status: u16, link: Option<&str>, body: &str) -> Result<AlertPage> {
    if status != 200 {
        return Err(ReportError::HttpStatus {
            status,
            body: body.to_string(),
        }
        .into());
    }

    let alerts: Vec<Alert> = serde_json::from_str(body).map_err(|e| ReportError::Decode {
        details: e.to_string(),
    })?;

    Ok(AlertPage::new(alerts, link.is_some_and(has_next_page)))
}

/// Whether an RFC 8288 `Link` header contains a `rel="next"` target
fn has_next_page(link: &str) -> bool {
    link.split(',').any(|entry| {
        entry
            .split(';')
            .skip(1)
            .any(|param| matches!(param.trim(), "rel=\"next\"" | "rel=next"))
    })
}
