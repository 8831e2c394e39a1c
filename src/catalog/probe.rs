//! Best-effort download URL probing for uncatalogued versions
//!
//! Used by the `find` command when an identifier is missing from the
//! catalog. Probing is independent of cached data and never writes to the
//! store.

use std::time::Duration;

use tracing::debug;

use crate::catalog::types::{SOURCE_SEARCHED, VersionRecord};
use crate::config::PROBE_TIMEOUT_SECS;

/// Placeholder substituted with the version identifier in each template
const VERSION_PLACEHOLDER: &str = "{version}";

/// Known URL shapes for server artifacts, in probing order
const DEFAULT_TEMPLATES: &[&str] = &[
    "https://jars.vexyhost.com/minecraft/{version}/server.jar",
    "https://launcher.mojang.com/v1/objects/{version}/server.jar",
];

/// Probes candidate URL templates with lightweight HEAD requests
pub struct UrlProber {
    client: reqwest::Client,
    templates: Vec<String>,
}

impl UrlProber {
    pub fn new() -> Self {
        Self::with_templates(DEFAULT_TEMPLATES.iter().map(|t| t.to_string()).collect())
    }

    /// Creates a prober over custom templates, each containing a
    /// `{version}` placeholder
    pub fn with_templates(templates: Vec<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("mcvers")
                .timeout(Duration::from_secs(PROBE_TIMEOUT_SECS))
                .build()
                .expect("Failed to create HTTP client"),
            templates,
        }
    }

    /// Returns the first candidate URL answering with a success status.
    /// Candidates are tried one at a time; a timeout or error on one simply
    /// moves on to the next.
    pub async fn probe(&self, version_id: &str) -> Option<String> {
        for template in &self.templates {
            let url = template.replace(VERSION_PLACEHOLDER, version_id);
            match self.client.head(&url).send().await {
                Ok(response) if response.status().is_success() => return Some(url),
                Ok(response) => debug!("probe {} answered {}", url, response.status()),
                Err(e) => debug!("probe {} failed: {}", url, e),
            }
        }
        None
    }

    /// The record synthesized for a probe hit.
    pub fn searched_record(version_id: &str, url: String) -> VersionRecord {
        VersionRecord {
            id: version_id.to_string(),
            r#type: "release".to_string(),
            url,
            source: SOURCE_SEARCHED.to_string(),
        }
    }
}

impl Default for UrlProber {
    fn default() -> Self {
        Self::new()
    }
}
