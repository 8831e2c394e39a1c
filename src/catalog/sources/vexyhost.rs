//! vexyhost directory-listing fallback source implementation

use std::collections::HashSet;
use std::time::Duration;

use regex::Regex;
use tracing::warn;

use crate::catalog::error::SourceError;
use crate::catalog::ordering;
use crate::catalog::source::VersionSource;
use crate::catalog::types::{SOURCE_VEXYHOST, VersionRecord};
use crate::config::{DEFAULT_SCRAPE_CAP, FETCH_TIMEOUT_SECS};

/// Default base URL for the jar archive host
const DEFAULT_BASE_URL: &str = "https://jars.vexyhost.com";

/// The listing host rejects requests with a default client identification
const BROWSER_USER_AGENT: &str = "Mozilla/5.0";

/// Source implementation scraping the vexyhost directory listing
pub struct VexyhostSource {
    client: reqwest::Client,
    base_url: String,
    version_cap: usize,
}

impl VexyhostSource {
    /// Creates a new VexyhostSource with a custom base URL
    pub fn new(base_url: &str, version_cap: usize) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(BROWSER_USER_AGENT)
                .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
            version_cap,
        }
    }

    /// Creates a VexyhostSource against the production host with the given
    /// record cap
    pub fn with_version_cap(version_cap: usize) -> Self {
        Self::new(DEFAULT_BASE_URL, version_cap)
    }
}

impl Default for VexyhostSource {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_SCRAPE_CAP)
    }
}

#[async_trait::async_trait]
impl VersionSource for VexyhostSource {
    fn source_name(&self) -> &'static str {
        SOURCE_VEXYHOST
    }

    async fn fetch_versions(&self) -> Result<Vec<VersionRecord>, SourceError> {
        let url = format!("{}/", self.base_url);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("jar listing returned status {}: {}", status, url);
            return Err(SourceError::InvalidResponse(format!(
                "Unexpected status: {status}"
            )));
        }

        let html = response
            .text()
            .await
            .map_err(|e| SourceError::InvalidResponse(e.to_string()))?;

        let pattern =
            Regex::new(r#"href="/minecraft/([0-9.]+)/""#).expect("version link pattern is valid");

        // The listing may repeat a version link; set semantics first, then
        // newest-first ordering.
        let unique: HashSet<String> = pattern
            .captures_iter(&html)
            .map(|captures| captures[1].to_string())
            .collect();

        if unique.is_empty() {
            return Err(SourceError::NoVersionsFound);
        }

        let mut ids: Vec<String> = unique.into_iter().collect();
        ordering::sort_descending(&mut ids);
        ids.truncate(self.version_cap);

        Ok(ids
            .into_iter()
            .map(|id| VersionRecord {
                url: format!("{}/minecraft/{}/server.jar", self.base_url, id),
                id,
                r#type: "release".to_string(),
                source: SOURCE_VEXYHOST.to_string(),
            })
            .collect())
    }
}
