use story_logging::{story_debug, story_info};

use crate::{AppState, Effect, Msg, StoriesAction, SEARCH_TERM_KEY};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Mounted => vec![begin_fetch(&mut state)],
        Msg::SearchInput(term) => {
            if state.set_search_term(term) {
                vec![Effect::PersistSearchTerm {
                    key: SEARCH_TERM_KEY.to_string(),
                    value: state.search_term().to_string(),
                }]
            } else {
                Vec::new()
            }
        }
        Msg::SearchSubmitted => {
            state.refresh_query_url();
            vec![begin_fetch(&mut state)]
        }
        Msg::RemoveStory(story) => {
            state.dispatch(StoriesAction::RemoveStory(story));
            Vec::new()
        }
        Msg::FetchResolved { request_id, result } => {
            // Last requested wins: responses to superseded requests are dropped.
            if !state.is_latest_request(request_id) {
                story_debug!("Dropping stale response for request {}", request_id);
                return (state, Vec::new());
            }
            match result {
                Ok(stories) => {
                    story_info!("Request {} returned {} stories", request_id, stories.len());
                    state.dispatch(StoriesAction::FetchSuccess(stories));
                }
                Err(failure) => {
                    story_info!("Request {} failed: {}", request_id, failure.reason);
                    state.set_error_detail(Some(failure.reason));
                    state.dispatch(StoriesAction::FetchFailure);
                }
            }
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn begin_fetch(state: &mut AppState) -> Effect {
    state.set_error_detail(None);
    state.dispatch(StoriesAction::FetchInit);
    let request_id = state.issue_request();
    Effect::FetchStories {
        request_id,
        url: state.query_url().to_string(),
    }
}
