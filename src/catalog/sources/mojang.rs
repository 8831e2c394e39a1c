//! Mojang version manifest source implementation

use std::time::Duration;

use serde::Deserialize;
use tracing::warn;

use crate::catalog::error::SourceError;
use crate::catalog::source::VersionSource;
use crate::catalog::types::{SOURCE_MOJANG, VersionRecord};
use crate::config::{DEFAULT_RELEASE_CAP, FETCH_TIMEOUT_SECS};

/// Default URL for the version manifest
const DEFAULT_MANIFEST_URL: &str =
    "https://launchermeta.mojang.com/mc/game/version_manifest.json";

/// Top-level version manifest response
#[derive(Debug, Deserialize)]
struct VersionManifest {
    versions: Vec<ManifestEntry>,
}

#[derive(Debug, Deserialize)]
struct ManifestEntry {
    id: String,
    r#type: String,
    url: String,
}

/// Per-version manifest response, reduced to the server download
#[derive(Debug, Deserialize)]
struct VersionDetail {
    #[serde(default)]
    downloads: Downloads,
}

#[derive(Debug, Default, Deserialize)]
struct Downloads {
    server: Option<DownloadEntry>,
}

#[derive(Debug, Deserialize)]
struct DownloadEntry {
    url: String,
}

/// Source implementation for the Mojang version manifest API
pub struct MojangSource {
    client: reqwest::Client,
    manifest_url: String,
    version_cap: usize,
}

impl MojangSource {
    /// Creates a new MojangSource with a custom manifest URL
    pub fn new(manifest_url: &str, version_cap: usize) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("mcvers")
                .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
                .build()
                .expect("Failed to create HTTP client"),
            manifest_url: manifest_url.to_string(),
            version_cap,
        }
    }

    /// Creates a MojangSource against the production endpoint with the
    /// given record cap
    pub fn with_version_cap(version_cap: usize) -> Self {
        Self::new(DEFAULT_MANIFEST_URL, version_cap)
    }

    /// Fetches the per-version manifest and extracts the server artifact
    /// URL. An empty string means the build has no server download.
    async fn fetch_server_url(&self, manifest_url: &str) -> Result<String, SourceError> {
        let response = self.client.get(manifest_url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::InvalidResponse(format!(
                "Unexpected status: {status}"
            )));
        }

        let detail: VersionDetail = response
            .json()
            .await
            .map_err(|e| SourceError::InvalidResponse(e.to_string()))?;

        Ok(detail
            .downloads
            .server
            .map(|server| server.url)
            .unwrap_or_default())
    }
}

impl Default for MojangSource {
    fn default() -> Self {
        Self::new(DEFAULT_MANIFEST_URL, DEFAULT_RELEASE_CAP)
    }
}

#[async_trait::async_trait]
impl VersionSource for MojangSource {
    fn source_name(&self) -> &'static str {
        SOURCE_MOJANG
    }

    async fn fetch_versions(&self) -> Result<Vec<VersionRecord>, SourceError> {
        let response = self.client.get(&self.manifest_url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                "version manifest returned status {}: {}",
                status, self.manifest_url
            );
            return Err(SourceError::InvalidResponse(format!(
                "Unexpected status: {status}"
            )));
        }

        let manifest: VersionManifest = response.json().await.map_err(|e| {
            warn!("Failed to parse version manifest: {}", e);
            SourceError::InvalidResponse(e.to_string())
        })?;

        let mut records = Vec::new();

        // Stable releases only; the manifest lists them newest first. The cap
        // bounds the number of per-version manifest requests.
        for entry in manifest
            .versions
            .into_iter()
            .filter(|entry| entry.r#type == "release")
        {
            if records.len() >= self.version_cap {
                break;
            }

            match self.fetch_server_url(&entry.url).await {
                Ok(url) if url.is_empty() => {
                    // Build predates server artifacts, nothing to download
                }
                Ok(url) => records.push(VersionRecord {
                    id: entry.id,
                    r#type: "release".to_string(),
                    url,
                    source: SOURCE_MOJANG.to_string(),
                }),
                Err(e) => {
                    warn!("Failed to fetch manifest for {}: {}", entry.id, e);
                    records.push(VersionRecord {
                        id: entry.id,
                        r#type: "release".to_string(),
                        url: String::new(),
                        source: SOURCE_MOJANG.to_string(),
                    });
                }
            }
        }

        Ok(records)
    }
}
