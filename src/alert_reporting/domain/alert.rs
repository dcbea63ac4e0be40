use serde::{Deserialize, Serialize};

/// State value GitHub uses for alerts that are neither dismissed nor fixed
pub const OPEN_STATE: &str = "open";

/// Identifier type that marks a CVE entry in an advisory's identifier list
pub const CVE_IDENTIFIER_TYPE: &str = "CVE";

/// Alert entity representing one Dependabot security alert
///
/// Only the fields the reports consume are decoded; everything else in the
/// API payload is ignored. Missing fields decode to empty values so that a
/// sparse alert never fails the whole response.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Alert {
    #[serde(default)]
    dependency: Dependency,
    #[serde(default)]
    security_advisory: SecurityAdvisory,
    #[serde(default)]
    html_url: String,
    #[serde(default)]
    state: String,
}

impl Alert {
    pub fn new(
        dependency: Dependency,
        security_advisory: SecurityAdvisory,
        html_url: String,
        state: String,
    ) -> Self {
        Self {
            dependency,
            security_advisory,
            html_url,
            state,
        }
    }

    pub fn dependency(&self) -> &Dependency {
        &self.dependency
    }

    pub fn security_advisory(&self) -> &SecurityAdvisory {
        &self.security_advisory
    }

    pub fn html_url(&self) -> &str {
        &self.html_url
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == OPEN_STATE
    }
}

/// The vulnerable dependency an alert was raised for
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Dependency {
    #[serde(default)]
    package: PackageRef,
    #[serde(default)]
    manifest_path: String,
    /// `runtime` or `development`; absent on older API versions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    scope: Option<String>,
}

impl Dependency {
    pub fn new(package: PackageRef, manifest_path: String, scope: Option<String>) -> Self {
        Self {
            package,
            manifest_path,
            scope,
        }
    }

    pub fn package(&self) -> &PackageRef {
        &self.package
    }

    pub fn manifest_path(&self) -> &str {
        &self.manifest_path
    }

    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }
}

/// Package coordinates within an ecosystem (e.g. `lodash` in `npm`)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PackageRef {
    #[serde(default)]
    name: String,
    #[serde(default)]
    ecosystem: String,
}

impl PackageRef {
    pub fn new(name: String, ecosystem: String) -> Self {
        Self { name, ecosystem }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ecosystem(&self) -> &str {
        &self.ecosystem
    }
}

/// The GitHub security advisory behind an alert
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SecurityAdvisory {
    #[serde(default)]
    severity: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    identifiers: Vec<AdvisoryIdentifier>,
}

impl SecurityAdvisory {
    pub fn new(severity: String, description: String, identifiers: Vec<AdvisoryIdentifier>) -> Self {
        Self {
            severity,
            description,
            identifiers,
        }
    }

    pub fn severity(&self) -> &str {
        &self.severity
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Identifiers in the order the API returned them
    pub fn identifiers(&self) -> &[AdvisoryIdentifier] {
        &self.identifiers
    }
}

/// One `{type, value}` identifier of an advisory, e.g. `CVE` / `CVE-2024-1234`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AdvisoryIdentifier {
    #[serde(rename = "type", default)]
    id_type: String,
    #[serde(default)]
    value: String,
}

impl AdvisoryIdentifier {
    pub fn new(id_type: String, value: String) -> Self {
        Self { id_type, value }
    }

    pub fn id_type(&self) -> &str {
        &self.id_type
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_cve(&self) -> bool {
        self.id_type == CVE_IDENTIFIER_TYPE
    }
}
