use crate::Story;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub search_term: String,
    pub query_url: String,
    pub is_loading: bool,
    pub is_error: bool,
    /// Reason of the last failed fetch, cleared by the next fetch.
    pub error_detail: Option<String>,
    /// Stories held in state, regardless of the client-side filter.
    pub total_stories: usize,
    /// Comment total over every story held in state.
    pub sum_comments: u64,
    /// Rows that pass the client-side title filter, in server order.
    pub stories: Vec<StoryRowView>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryRowView {
    pub story: Story,
}
