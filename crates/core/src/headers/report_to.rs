use serde::{Deserialize, Serialize};

/// Reporting group embedded in a CSP `report-to` directive.
///
/// Serialized with snake_case keys; absent optionals are left out of the
/// JSON entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportTo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    group: Option<String>,
    max_age: u64,
    endpoints: Vec<ReportToEndpoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    include_subdomains: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportToEndpoint {
    url: String,
}

impl ReportTo {
    pub fn new(max_age: u64, endpoints: Vec<ReportToEndpoint>) -> Self {
        Self {
            group: None,
            max_age,
            endpoints,
            include_subdomains: None,
        }
    }

    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn include_subdomains(mut self, include: bool) -> Self {
        self.include_subdomains = Some(include);
        self
    }

    pub fn max_age(&self) -> u64 {
        self.max_age
    }

    pub fn endpoints(&self) -> &[ReportToEndpoint] {
        &self.endpoints
    }

    /// `report-to <json>` fragment, or `None` when encoding fails.
    pub fn to_directive(&self) -> Option<String> {
        match serde_json::to_string(self) {
            Ok(json) => Some(format!("report-to {json}")),
            Err(e) => {
                tracing::debug!(error = %e, "report-to descriptor not encodable, directive skipped");
                None
            }
        }
    }
}

impl ReportToEndpoint {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}
