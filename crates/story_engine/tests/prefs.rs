use std::fs;

use story_engine::{
    load_search_term, MemoryPreferenceStore, PreferenceStore, RonFilePreferenceStore,
};
use tempfile::TempDir;

#[test]
fn default_is_used_when_absent_or_empty() {
    let mut store = MemoryPreferenceStore::new();
    assert_eq!(load_search_term(&store, "search", "React"), "React");

    store.set("search", "").unwrap();
    assert_eq!(load_search_term(&store, "search", "React"), "React");

    store.set("search", "Redux").unwrap();
    assert_eq!(load_search_term(&store, "search", "React"), "Redux");
}

#[test]
fn file_store_round_trips_across_reopen() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("prefs.ron");

    let mut store = RonFilePreferenceStore::open(&path);
    assert_eq!(store.get("search"), None);
    store.set("search", "rust").unwrap();
    store.set("search", "tokio").unwrap();

    let reopened = RonFilePreferenceStore::open(&path);
    assert_eq!(reopened.get("search").as_deref(), Some("tokio"));
    assert_eq!(reopened.path(), path.as_path());
}

#[test]
fn corrupt_file_is_treated_as_empty() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("prefs.ron");
    fs::write(&path, "{ this is not ron").unwrap();

    let mut store = RonFilePreferenceStore::open(&path);
    assert_eq!(load_search_term(&store, "search", "React"), "React");

    // Writing replaces the corrupt content.
    store.set("search", "Redux").unwrap();
    assert_eq!(
        RonFilePreferenceStore::open(&path).get("search").as_deref(),
        Some("Redux")
    );
}

#[test]
fn set_fails_when_parent_is_a_file() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("blocker");
    fs::write(&blocker, "x").unwrap();

    let mut store = RonFilePreferenceStore::open(blocker.join("prefs.ron"));
    assert!(store.set("search", "x").is_err());
}
