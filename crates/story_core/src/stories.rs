use crate::Story;

/// Fetch lifecycle plus the current list of stories.
///
/// Idle and successful-empty both read as `is_loading == false && is_error == false`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StoriesState {
    pub data: Vec<Story>,
    pub is_loading: bool,
    pub is_error: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoriesAction {
    FetchInit,
    FetchSuccess(Vec<Story>),
    FetchFailure,
    RemoveStory(Story),
}

/// Pure reducer over [`StoriesState`]. Never mutates `state`.
pub fn stories_reducer(state: &StoriesState, action: StoriesAction) -> StoriesState {
    match action {
        // Stale results stay visible while the next request is outstanding.
        StoriesAction::FetchInit => StoriesState {
            data: state.data.clone(),
            is_loading: true,
            is_error: false,
        },
        StoriesAction::FetchSuccess(payload) => StoriesState {
            data: payload,
            is_loading: false,
            is_error: false,
        },
        StoriesAction::FetchFailure => StoriesState {
            data: state.data.clone(),
            is_loading: false,
            is_error: true,
        },
        StoriesAction::RemoveStory(item) => StoriesState {
            data: state
                .data
                .iter()
                .filter(|story| story.object_id != item.object_id)
                .cloned()
                .collect(),
            is_loading: state.is_loading,
            is_error: state.is_error,
        },
    }
}

/// Sum of `num_comments` across `stories`; zero when empty.
pub fn sum_comments(stories: &[Story]) -> u64 {
    stories.iter().map(|story| u64::from(story.num_comments)).sum()
}
