use crate::query::{build_query_url, API_ENDPOINT};
use crate::stories::{stories_reducer, sum_comments, StoriesAction, StoriesState};
use crate::view_model::{AppViewModel, StoryRowView};
use crate::RequestId;

/// Preference key the search term is stored under.
pub const SEARCH_TERM_KEY: &str = "search";
/// Search term used when no preference has been stored yet.
pub const DEFAULT_SEARCH_TERM: &str = "React";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    stories: StoriesState,
    api_base: String,
    search_term: String,
    query_url: String,
    client_filter: bool,
    last_request: Option<RequestId>,
    next_request: RequestId,
    error_detail: Option<String>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_TERM)
    }
}

impl AppState {
    /// Creates the initial state with the search term restored from preferences.
    pub fn new(search_term: impl Into<String>) -> Self {
        Self::with_api_base(API_ENDPOINT, search_term)
    }

    pub fn with_api_base(api_base: impl Into<String>, search_term: impl Into<String>) -> Self {
        let api_base = api_base.into();
        let search_term = search_term.into();
        let query_url = build_query_url(&api_base, &search_term);
        Self {
            stories: StoriesState::default(),
            api_base,
            search_term,
            query_url,
            client_filter: true,
            last_request: None,
            next_request: 1,
            error_detail: None,
            dirty: false,
        }
    }

    /// Enables or disables title filtering of the visible rows.
    pub fn with_client_filter(mut self, enabled: bool) -> Self {
        self.client_filter = enabled;
        self
    }

    pub fn stories(&self) -> &StoriesState {
        &self.stories
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn query_url(&self) -> &str {
        &self.query_url
    }

    pub fn view(&self) -> AppViewModel {
        let needle = self.search_term.to_lowercase();
        let stories = self
            .stories
            .data
            .iter()
            .filter(|story| !self.client_filter || story.title.to_lowercase().contains(&needle))
            .map(|story| StoryRowView {
                story: story.clone(),
            })
            .collect();

        AppViewModel {
            search_term: self.search_term.clone(),
            query_url: self.query_url.clone(),
            is_loading: self.stories.is_loading,
            is_error: self.stories.is_error,
            error_detail: self.error_detail.clone(),
            total_stories: self.stories.data.len(),
            sum_comments: sum_comments(&self.stories.data),
            stories,
            dirty: self.dirty,
        }
    }

    /// Returns whether a re-render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn dispatch(&mut self, action: StoriesAction) {
        let next = stories_reducer(&self.stories, action);
        if next != self.stories {
            self.stories = next;
            self.dirty = true;
        }
    }

    /// Returns true if the term differs from the current one.
    pub(crate) fn set_search_term(&mut self, term: String) -> bool {
        if term == self.search_term {
            return false;
        }
        self.search_term = term;
        self.dirty = true;
        true
    }

    pub(crate) fn refresh_query_url(&mut self) {
        self.query_url = build_query_url(&self.api_base, &self.search_term);
    }

    pub(crate) fn issue_request(&mut self) -> RequestId {
        let id = self.next_request;
        self.next_request += 1;
        self.last_request = Some(id);
        id
    }

    pub(crate) fn is_latest_request(&self, request_id: RequestId) -> bool {
        self.last_request == Some(request_id)
    }

    pub(crate) fn set_error_detail(&mut self, detail: Option<String>) {
        if self.error_detail != detail {
            self.error_detail = detail;
            self.dirty = true;
        }
    }
}
