//! Story search core: pure stories reducer, update loop and view-model helpers.
mod effect;
mod msg;
mod query;
mod state;
mod stories;
mod story;
mod update;
mod view_model;

pub use effect::{Effect, RequestId};
pub use msg::{FetchFailure, Msg};
pub use query::{build_query_url, API_ENDPOINT};
pub use state::{AppState, DEFAULT_SEARCH_TERM, SEARCH_TERM_KEY};
pub use stories::{stories_reducer, sum_comments, StoriesAction, StoriesState};
pub use story::{ObjectId, Story};
pub use update::update;
pub use view_model::{AppViewModel, StoryRowView};
