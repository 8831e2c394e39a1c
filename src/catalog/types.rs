//! Common catalog types

use serde::{Deserialize, Serialize};

/// Provenance tag for records fetched from the Mojang version manifest
pub const SOURCE_MOJANG: &str = "mojang";
/// Provenance tag for records scraped from the vexyhost directory listing
pub const SOURCE_VEXYHOST: &str = "vexyhost";
/// Provenance tag for records synthesized by URL probing
pub const SOURCE_SEARCHED: &str = "searched";

/// One entry per game server build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRecord {
    /// Version identifier (e.g. "1.20.1")
    pub id: String,
    /// Build type tag, currently always "release"
    pub r#type: String,
    /// Direct download URL for the server artifact; empty when unresolved
    pub url: String,
    /// Provenance tag identifying which source produced the record
    pub source: String,
}

/// The cached and returned payload: all known version records plus the
/// timestamp of when they were fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionCatalog {
    /// Records in source-provided order, newest first
    pub versions: Vec<VersionRecord>,
    /// Unix timestamp of the fetch that produced this catalog
    pub last_updated: i64,
}

impl VersionCatalog {
    /// Wraps freshly fetched records, stamping them with the current time.
    pub fn new(versions: Vec<VersionRecord>) -> Self {
        Self {
            versions,
            last_updated: chrono::Utc::now().timestamp(),
        }
    }

    /// The placeholder returned when every source has failed.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Linear scan for an exact identifier match, first hit wins.
    pub fn find(&self, id: &str) -> Option<&VersionRecord> {
        self.versions.iter().find(|v| v.id == id)
    }

    /// The first `count` records in existing order, or all of them when
    /// `count` exceeds the catalog length.
    pub fn latest(&self, count: usize) -> &[VersionRecord] {
        &self.versions[..count.min(self.versions.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> VersionRecord {
        VersionRecord {
            id: id.to_string(),
            r#type: "release".to_string(),
            url: format!("https://example.com/{id}/server.jar"),
            source: SOURCE_MOJANG.to_string(),
        }
    }

    #[test]
    fn find_returns_exact_match() {
        let catalog = VersionCatalog::new(vec![record("1.20.1"), record("1.20")]);

        assert_eq!(catalog.find("1.20.1"), Some(&catalog.versions[0]));
    }

    #[test]
    fn find_returns_none_for_unknown_id() {
        let catalog = VersionCatalog::new(vec![record("1.20.1")]);

        assert_eq!(catalog.find("1.20.1-nonexistent"), None);
    }

    #[test]
    fn latest_returns_first_n_in_original_order() {
        let ids = ["1.21", "1.20.6", "1.20.5", "1.20.4", "1.20.3"];
        let catalog = VersionCatalog::new(ids.iter().map(|id| record(id)).collect());

        let latest: Vec<&str> = catalog.latest(3).iter().map(|r| r.id.as_str()).collect();
        assert_eq!(latest, vec!["1.21", "1.20.6", "1.20.5"]);
    }

    #[test]
    fn latest_returns_all_when_count_exceeds_length() {
        let catalog = VersionCatalog::new(vec![record("1.21"), record("1.20.6")]);

        assert_eq!(catalog.latest(20).len(), 2);
    }

    #[test]
    fn record_serializes_type_field_without_raw_prefix() {
        let json = serde_json::to_value(record("1.20.1")).unwrap();

        assert_eq!(json["type"], "release");
        assert_eq!(json["source"], "mojang");
    }
}
