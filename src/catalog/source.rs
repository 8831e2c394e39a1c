//! Source trait for fetching server versions from upstream providers

#[cfg(test)]
use mockall::automock;

use crate::catalog::error::SourceError;
use crate::catalog::types::VersionRecord;

/// Trait for fetching the list of available server versions from one
/// upstream provider
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait VersionSource: Send + Sync {
    /// Provenance tag recorded on every record this source emits
    fn source_name(&self) -> &'static str;

    /// Fetches all available server versions from the source
    ///
    /// # Returns
    /// * `Ok(Vec<VersionRecord>)` - List of versions, ordered from newest to
    ///   oldest. An empty list is a valid success.
    /// * `Err(SourceError)` - If the fetch fails
    async fn fetch_versions(&self) -> Result<Vec<VersionRecord>, SourceError>;
}
