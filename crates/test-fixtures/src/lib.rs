//! Test fixture loader for Solace golden datasets.
//!
//! Helpers for loading fixture JSON in tests across the workspace's crates.

use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory, sorted by path.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension()
                .is_some_and(|ext| ext == "json")
                .then_some(path)
        })
        .collect();
    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;

    const RETRIEVAL_GOLDEN: [&str; 5] = [
        "golden/retrieval/topic_boost_depression.json",
        "golden/retrieval/no_topic_passthrough.json",
        "golden/retrieval/empty_search.json",
        "golden/retrieval/embedding_failure.json",
        "golden/retrieval/boost_reorders_mixed_topics.json",
    ];

    #[test]
    fn fixtures_root_exists() {
        assert!(fixtures_root().exists(), "test-fixtures directory not found");
    }

    #[test]
    fn all_golden_retrieval_files_exist() {
        for f in &RETRIEVAL_GOLDEN {
            assert!(fixture_exists(f), "Missing fixture: {}", f);
        }
    }

    #[test]
    fn golden_retrieval_files_have_input_and_expected() {
        let files = list_fixtures("golden/retrieval");
        assert_eq!(files.len(), RETRIEVAL_GOLDEN.len());
        for f in &RETRIEVAL_GOLDEN {
            let value = load_fixture_value(f);
            assert!(value["input"].is_object(), "{} has no input", f);
            assert!(value["expected"].is_object(), "{} has no expected", f);
        }
    }
}
