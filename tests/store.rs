use std::time::Duration;

use tempfile::TempDir;

use mcvers::catalog::store::{CatalogStore, FileStore};
use mcvers::catalog::types::{VersionCatalog, VersionRecord};

fn sample_catalog() -> VersionCatalog {
    VersionCatalog::new(vec![
        VersionRecord {
            id: "1.20.1".to_string(),
            r#type: "release".to_string(),
            url: "https://example.com/1.20.1/server.jar".to_string(),
            source: "mojang".to_string(),
        },
        VersionRecord {
            id: "1.20".to_string(),
            r#type: "release".to_string(),
            url: String::new(),
            source: "mojang".to_string(),
        },
    ])
}

#[test]
fn save_then_load_returns_a_deep_equal_catalog() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().join("versions.json"), Duration::from_secs(86400));

    let original = sample_catalog();
    store.save(&original).unwrap();

    assert_eq!(store.load(), Some(original));
}

#[test]
fn save_overwrites_the_previous_catalog_completely() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().join("versions.json"), Duration::from_secs(86400));

    store.save(&sample_catalog()).unwrap();

    let replacement = VersionCatalog::new(vec![VersionRecord {
        id: "1.21".to_string(),
        r#type: "release".to_string(),
        url: "https://example.com/1.21/server.jar".to_string(),
        source: "vexyhost".to_string(),
    }]);
    store.save(&replacement).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded, replacement);
    assert!(loaded.find("1.20.1").is_none());
}

#[test]
fn load_treats_a_stale_file_as_absent() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().join("versions.json"), Duration::from_millis(1));

    store.save(&sample_catalog()).unwrap();
    std::thread::sleep(Duration::from_millis(20));

    assert_eq!(store.load(), None);
}
