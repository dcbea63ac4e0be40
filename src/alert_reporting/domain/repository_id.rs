use crate::shared::error::ReportError;
use crate::shared::Result;

/// GitHub caps owner names at 39 characters and repository names at 100
const MAX_SEGMENT_LENGTH: usize = 100;

/// Repository identifier in `owner/name` form
///
/// Both segments are validated against the characters GitHub allows, so
/// they can be placed into an API path without further escaping concerns.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryId {
    owner: String,
    name: String,
}

impl RepositoryId {
    pub fn parse(value: &str) -> Result<Self> {
        let invalid = |reason: &str| -> anyhow::Error {
            ReportError::configuration(
                format!("invalid repository '{}': {}", value, reason),
                "Provide the repository as owner/name, e.g. --repo octocat/hello-world",
            )
            .into()
        };

        let (owner, name) = value
            .split_once('/')
            .ok_or_else(|| invalid("expected owner/name"))?;

        if name.contains('/') {
            return Err(invalid("expected exactly one '/'"));
        }

        for (label, segment) in [("owner", owner), ("name", name)] {
            if segment.is_empty() {
                return Err(invalid(&format!("{} must not be empty", label)));
            }
            if segment.len() > MAX_SEGMENT_LENGTH {
                return Err(invalid(&format!(
                    "{} is longer than {} characters",
                    label, MAX_SEGMENT_LENGTH
                )));
            }
            if !segment
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
            {
                return Err(invalid(&format!(
                    "{} may only contain ASCII letters, digits, '-', '_' and '.'",
                    label
                )));
            }
            if segment == "." || segment == ".." {
                return Err(invalid(&format!("{} must not be '.' or '..'", label)));
            }
        }

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Repository name without the owner; used to name report files
    pub fn basename(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl std::str::FromStr for RepositoryId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
