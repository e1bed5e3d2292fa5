#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The view became visible; load stories for the restored search term.
    Mounted,
    /// User edited the search input.
    SearchInput(String),
    /// User submitted the search form.
    SearchSubmitted,
    /// User dismissed a story.
    RemoveStory(crate::Story),
    /// Engine finished a fetch.
    FetchResolved {
        request_id: crate::RequestId,
        result: Result<Vec<crate::Story>, FetchFailure>,
    },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}

/// Why a fetch failed. Only surfaced to the view, never stored in `StoriesState`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub reason: String,
}

impl FetchFailure {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
