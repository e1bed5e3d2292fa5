use std::path::Path;

use story_core::SEARCH_TERM_KEY;
use story_engine::{load_search_term, PreferenceStore, RonFilePreferenceStore};
use story_logging::story_info;

/// Opens the preference file and restores the search term, once, at startup.
pub(crate) fn restore_search_term(
    path: &Path,
    default_term: &str,
) -> (Box<dyn PreferenceStore>, String) {
    let store = RonFilePreferenceStore::open(path);
    let term = load_search_term(&store, SEARCH_TERM_KEY, default_term);
    story_info!("Restored search term {:?}", term);
    (Box::new(store), term)
}
