/// Monotonic id attached to each fetch so late responses can be recognised.
pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchStories { request_id: RequestId, url: String },
    PersistSearchTerm { key: String, value: String },
}
