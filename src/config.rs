//! Configuration support for dependabot-report.
//!
//! Settings come from three layers, lowest precedence first: a YAML file
//! (`config.yaml` by default), the `DEPENDABOT_TOKEN` environment variable
//! for the token, and command-line options. The merged result is an
//! [`EffectiveConfig`] that is passed explicitly to every component.

use secrecy::SecretString;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use crate::application::dto::OutputFormat;
use crate::application::use_cases::RetryPolicy;
use crate::shared::error::ReportError;
use crate::shared::Result;

pub const DEFAULT_CONFIG_FILENAME: &str = "config.yaml";
pub const TOKEN_ENV_VAR: &str = "DEPENDABOT_TOKEN";
pub const DEFAULT_OUTPUT_DIR: &str = "reports";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

/// Config files are a handful of keys; anything bigger is not one
const MAX_CONFIG_FILE_SIZE: u64 = 1024 * 1024;

const TOKEN_HINT: &str = "Set github_token in your config file (see config.yaml.example) or export the DEPENDABOT_TOKEN environment variable.";

/// Top-level configuration file schema.
///
/// Every key is optional; a missing key falls through to the next layer.
#[derive(Deserialize, Default)]
pub struct ConfigFile {
    pub github_token: Option<String>,
    pub output_format: Option<String>,
    pub output_dir: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub max_retries: Option<u32>,
    pub api_base_url: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: BTreeMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Names of keys this tool does not understand, sorted
    pub fn unknown_keys(&self) -> Vec<&str> {
        self.unknown_fields.keys().map(String::as_str).collect()
    }
}

/// Settings given on the command line; `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub output_format: Option<OutputFormat>,
    pub output_dir: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
}

/// Fully resolved and validated settings for one run.
#[derive(Debug)]
pub struct EffectiveConfig {
    pub token: SecretString,
    pub output_format: OutputFormat,
    pub output_dir: PathBuf,
    pub request_timeout: Duration,
    pub max_retries: u32,
    pub api_base_url: String,
}

fn config_error(reason: String, hint: &str) -> anyhow::Error {
    ReportError::configuration(reason, hint).into()
}

/// Load a config file. Returns `Ok(None)` when no file exists at `path`.
///
/// # Errors
/// Fails when the file exists but is a symbolic link, not a regular file,
/// too large, unreadable or not valid YAML for [`ConfigFile`].
pub fn load_config_file(path: &Path) -> Result<Option<ConfigFile>> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(config_error(
                format!("cannot access config file {}: {}", path.display(), e),
                "Check that the file is readable.",
            ))
        }
    };

    if metadata.is_symlink() {
        return Err(config_error(
            format!("config file {} is a symbolic link", path.display()),
            "Security: pass the path of the real file with --config.",
        ));
    }
    if !metadata.is_file() {
        return Err(config_error(
            format!("config file {} is not a regular file", path.display()),
            "Pass the path of a YAML file with --config.",
        ));
    }
    if metadata.len() > MAX_CONFIG_FILE_SIZE {
        return Err(config_error(
            format!(
                "config file {} is too large ({} bytes, maximum {} bytes)",
                path.display(),
                metadata.len(),
                MAX_CONFIG_FILE_SIZE
            ),
            "Check that --config points at the right file.",
        ));
    }

    let content = fs::read_to_string(path).map_err(|e| {
        config_error(
            format!("failed to read config file {}: {}", path.display(), e),
            "Check that the file exists and is readable.",
        )
    })?;

    parse_config(&content)
        .map(Some)
        .map_err(|e| {
            config_error(
                format!("failed to parse config file {}: {}", path.display(), e),
                "Ensure the file contains valid YAML syntax (see config.yaml.example).",
            )
        })
}

/// Parse config file content. An empty document yields the defaults.
fn parse_config(content: &str) -> std::result::Result<ConfigFile, serde_yaml_ng::Error> {
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }
    serde_yaml_ng::from_str(content)
}

/// Reads the token override from the process environment.
///
/// Unset and empty values both mean "no override".
pub fn token_from_env() -> Option<String> {
    std::env::var(TOKEN_ENV_VAR)
        .ok()
        .filter(|token| !token.trim().is_empty())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Merge the three layers into an [`EffectiveConfig`].
///
/// # Arguments
/// * `file` - Parsed config file, or `None` when there is none
/// * `env_token` - Value of `DEPENDABOT_TOKEN`, if set and non-empty
/// * `overrides` - Command-line settings
///
/// # Errors
/// Returns a configuration error when the token is missing, the output
/// format is not `json`/`csv`, the timeout is zero or the API base URL is
/// not an http(s) URL.
pub fn resolve(
    file: Option<ConfigFile>,
    env_token: Option<String>,
    overrides: &CliOverrides,
) -> Result<EffectiveConfig> {
    let file = file.unwrap_or_default();

    let token = non_empty(env_token)
        .or_else(|| non_empty(file.github_token))
        .ok_or_else(|| {
            config_error(
                "GitHub personal access token is required".to_string(),
                TOKEN_HINT,
            )
        })?;

    let output_format = match (overrides.output_format, non_empty(file.output_format)) {
        (Some(format), _) => format,
        (None, Some(value)) => OutputFormat::from_str(&value).map_err(|e| {
            config_error(
                format!("unsupported output_format in config file: {}", e),
                "Use 'json' or 'csv'.",
            )
        })?,
        (None, None) => OutputFormat::default(),
    };

    let output_dir = overrides
        .output_dir
        .clone()
        .or_else(|| non_empty(file.output_dir).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    let timeout_secs = overrides
        .timeout_secs
        .or(file.request_timeout_secs)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    if timeout_secs == 0 {
        return Err(config_error(
            "request timeout must be at least 1 second".to_string(),
            "Set --timeout or request_timeout_secs to a positive number of seconds.",
        ));
    }

    let api_base_url =
        non_empty(file.api_base_url).unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
    if !(api_base_url.starts_with("https://") || api_base_url.starts_with("http://")) {
        return Err(config_error(
            format!("api_base_url '{}' is not an http(s) URL", api_base_url),
            "Use https://api.github.com or your GitHub Enterprise API root, e.g. https://github.example.com/api/v3.",
        ));
    }

    Ok(EffectiveConfig {
        token: SecretString::from(token),
        output_format,
        output_dir,
        request_timeout: Duration::from_secs(timeout_secs),
        max_retries: file
            .max_retries
            .unwrap_or(RetryPolicy::DEFAULT_MAX_RETRIES),
        api_base_url,
    })
}
