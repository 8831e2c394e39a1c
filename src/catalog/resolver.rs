//! Cache-first resolution across prioritized sources

use tracing::{info, warn};

use crate::catalog::source::VersionSource;
use crate::catalog::store::CatalogStore;
use crate::catalog::types::VersionCatalog;

/// Resolves the version catalog from the store or, on a miss, from the
/// first source in priority order that answers.
pub struct Resolver {
    store: Box<dyn CatalogStore>,
    sources: Vec<Box<dyn VersionSource>>,
}

impl Resolver {
    pub fn new(store: Box<dyn CatalogStore>, sources: Vec<Box<dyn VersionSource>>) -> Self {
        Self { store, sources }
    }

    /// Returns the cached catalog when fresh, otherwise walks the sources.
    ///
    /// A source answering Ok wins immediately, even with zero records; only
    /// a hard failure moves resolution on to the next source. The winning
    /// catalog is persisted (a write failure is logged and swallowed, the
    /// fetched data is still returned). When every source fails, the empty
    /// placeholder is returned and nothing is written.
    pub async fn resolve(&self, force_refresh: bool) -> VersionCatalog {
        if !force_refresh
            && let Some(catalog) = self.store.load()
        {
            return catalog;
        }

        for source in &self.sources {
            info!("Fetching server versions from {}", source.source_name());
            match source.fetch_versions().await {
                Ok(versions) => {
                    let catalog = VersionCatalog::new(versions);
                    if let Err(e) = self.store.save(&catalog) {
                        warn!("Failed to write version cache: {}", e);
                    }
                    return catalog;
                }
                Err(e) => {
                    warn!("Fetching from {} failed: {}", source.source_name(), e);
                }
            }
        }

        VersionCatalog::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::error::{SourceError, StoreError};
    use crate::catalog::source::MockVersionSource;
    use crate::catalog::store::MockCatalogStore;
    use crate::catalog::types::{SOURCE_MOJANG, SOURCE_VEXYHOST, VersionRecord};

    fn record(id: &str, source: &str) -> VersionRecord {
        VersionRecord {
            id: id.to_string(),
            r#type: "release".to_string(),
            url: format!("https://example.com/{id}/server.jar"),
            source: source.to_string(),
        }
    }

    fn source_returning(
        name: &'static str,
        result: Result<Vec<VersionRecord>, SourceError>,
    ) -> MockVersionSource {
        let mut source = MockVersionSource::new();
        source.expect_source_name().return_const(name);
        source
            .expect_fetch_versions()
            .times(1)
            .return_once(move || result);
        source
    }

    fn source_never_called() -> MockVersionSource {
        let mut source = MockVersionSource::new();
        source.expect_source_name().return_const("unused");
        source.expect_fetch_versions().times(0);
        source
    }

    fn store_with_no_cache() -> MockCatalogStore {
        let mut store = MockCatalogStore::new();
        store.expect_load().returning(|| None);
        store.expect_save().returning(|_| Ok(()));
        store
    }

    #[tokio::test]
    async fn resolve_returns_fresh_cache_without_fetching() {
        let cached = VersionCatalog::new(vec![record("1.20.1", SOURCE_MOJANG)]);

        let mut store = MockCatalogStore::new();
        let loaded = cached.clone();
        store.expect_load().times(1).return_once(move || Some(loaded));
        store.expect_save().times(0);

        let resolver = Resolver::new(Box::new(store), vec![Box::new(source_never_called())]);

        assert_eq!(resolver.resolve(false).await, cached);
    }

    #[tokio::test]
    async fn resolve_with_force_refresh_skips_cache_lookup() {
        let mut store = MockCatalogStore::new();
        store.expect_load().times(0);
        store.expect_save().times(1).returning(|_| Ok(()));

        let primary = source_returning(SOURCE_MOJANG, Ok(vec![record("1.20.1", SOURCE_MOJANG)]));
        let resolver = Resolver::new(Box::new(store), vec![Box::new(primary)]);

        let catalog = resolver.resolve(true).await;
        assert_eq!(catalog.versions.len(), 1);
    }

    #[tokio::test]
    async fn resolve_fetches_when_cache_misses() {
        let primary = source_returning(SOURCE_MOJANG, Ok(vec![record("1.20.1", SOURCE_MOJANG)]));
        let resolver = Resolver::new(Box::new(store_with_no_cache()), vec![Box::new(primary)]);

        let catalog = resolver.resolve(false).await;
        assert_eq!(catalog.versions[0].source, "mojang");
    }

    #[tokio::test]
    async fn resolve_falls_back_to_secondary_when_primary_fails() {
        let primary = source_returning(
            SOURCE_MOJANG,
            Err(SourceError::InvalidResponse("boom".to_string())),
        );
        let secondary =
            source_returning(SOURCE_VEXYHOST, Ok(vec![record("1.20.1", SOURCE_VEXYHOST)]));

        let resolver = Resolver::new(
            Box::new(store_with_no_cache()),
            vec![Box::new(primary), Box::new(secondary)],
        );

        let catalog = resolver.resolve(false).await;
        assert_eq!(catalog.versions[0].source, "vexyhost");
    }

    #[tokio::test]
    async fn resolve_accepts_empty_success_without_falling_back() {
        let primary = source_returning(SOURCE_MOJANG, Ok(vec![]));
        let secondary = source_never_called();

        let resolver = Resolver::new(
            Box::new(store_with_no_cache()),
            vec![Box::new(primary), Box::new(secondary)],
        );

        let catalog = resolver.resolve(false).await;
        assert!(catalog.versions.is_empty());
    }

    #[tokio::test]
    async fn resolve_persists_the_fetched_catalog() {
        let mut store = MockCatalogStore::new();
        store.expect_load().returning(|| None);
        store
            .expect_save()
            .times(1)
            .withf(|catalog| catalog.versions.len() == 1)
            .returning(|_| Ok(()));

        let primary = source_returning(SOURCE_MOJANG, Ok(vec![record("1.20.1", SOURCE_MOJANG)]));
        let resolver = Resolver::new(Box::new(store), vec![Box::new(primary)]);

        resolver.resolve(false).await;
    }

    #[tokio::test]
    async fn resolve_returns_fetched_data_even_when_save_fails() {
        let mut store = MockCatalogStore::new();
        store.expect_load().returning(|| None);
        store.expect_save().times(1).returning(|_| {
            Err(StoreError::Io(std::io::Error::other("disk full")))
        });

        let primary = source_returning(SOURCE_MOJANG, Ok(vec![record("1.20.1", SOURCE_MOJANG)]));
        let resolver = Resolver::new(Box::new(store), vec![Box::new(primary)]);

        let catalog = resolver.resolve(false).await;
        assert_eq!(catalog.versions.len(), 1);
    }

    #[tokio::test]
    async fn resolve_returns_empty_placeholder_when_all_sources_fail() {
        let mut store = MockCatalogStore::new();
        store.expect_load().returning(|| None);
        store.expect_save().times(0);

        let primary = source_returning(
            SOURCE_MOJANG,
            Err(SourceError::InvalidResponse("boom".to_string())),
        );
        let secondary = source_returning(SOURCE_VEXYHOST, Err(SourceError::NoVersionsFound));

        let resolver = Resolver::new(
            Box::new(store),
            vec![Box::new(primary), Box::new(secondary)],
        );

        let catalog = resolver.resolve(false).await;
        assert!(catalog.versions.is_empty());
        assert!(catalog.last_updated > 0);
    }
}
