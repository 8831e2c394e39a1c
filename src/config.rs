use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

// =============================================================================
// Time and volume constants
// =============================================================================

/// Default cache max age in seconds (24 hours)
pub const DEFAULT_CACHE_MAX_AGE_SECS: u64 = 24 * 60 * 60;

/// Timeout for catalog fetch requests in seconds
pub const FETCH_TIMEOUT_SECS: u64 = 10;

/// Timeout for ad-hoc URL probe requests in seconds
pub const PROBE_TIMEOUT_SECS: u64 = 5;

/// Default number of release entries taken from the version manifest
pub const DEFAULT_RELEASE_CAP: usize = 50;

/// Default number of entries kept from the directory-listing scrape
pub const DEFAULT_SCRAPE_CAP: usize = 100;

/// Catalog configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CatalogConfig {
    pub cache: CacheConfig,
    pub sources: SourcesConfig,
}

/// Cache-related configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CacheConfig {
    /// Cache max age in seconds
    pub max_age_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_age_secs: DEFAULT_CACHE_MAX_AGE_SECS,
        }
    }
}

/// Per-source configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SourcesConfig {
    pub mojang: SourceConfig,
    pub vexyhost: SourceConfig,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            mojang: SourceConfig {
                version_cap: DEFAULT_RELEASE_CAP,
            },
            vexyhost: SourceConfig {
                version_cap: DEFAULT_SCRAPE_CAP,
            },
        }
    }
}

/// Individual source configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SourceConfig {
    /// Maximum number of records the source may emit
    pub version_cap: usize,
}

impl CatalogConfig {
    /// Reads the configuration file if present. A missing file yields the
    /// defaults; a malformed file is logged and also yields the defaults.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Ignoring malformed config {:?}: {}", path, e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}

/// Returns the path to the data directory for mcvers.
/// Uses $XDG_DATA_HOME/mcvers if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/mcvers,
/// or ./mcvers if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the cached catalog file.
pub fn cache_path() -> PathBuf {
    data_dir().join("versions.json")
}

/// Returns the path to the configuration file.
pub fn config_path() -> PathBuf {
    data_dir().join("config.json")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("mcvers")
}
