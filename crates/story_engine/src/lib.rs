//! Story search engine: HTTP fetching, background worker and preference storage.
mod engine;
mod fetch;
mod prefs;
mod types;

pub use engine::{EngineEvents, EngineHandle};
pub use fetch::{FetchSettings, ReqwestStoryFetcher, StoryFetcher};
pub use prefs::{
    load_search_term, MemoryPreferenceStore, PreferenceError, PreferenceStore,
    RonFilePreferenceStore,
};
pub use types::{EngineEvent, FailureKind, FetchError};
