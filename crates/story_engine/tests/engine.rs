use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;

use story_core::{ObjectId, Story};
use story_engine::{
    EngineEvent, EngineEvents, EngineHandle, FailureKind, FetchError, StoryFetcher,
};

/// Answers each URL after a per-URL delay, so completion order can be controlled.
struct ScriptedFetcher;

#[async_trait::async_trait]
impl StoryFetcher for ScriptedFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<Story>, FetchError> {
        match url {
            "slow" => {
                tokio::time::sleep(Duration::from_millis(200)).await;
                Ok(vec![story("slow")])
            }
            "fast" => Ok(vec![story("fast")]),
            _ => Err(FetchError {
                kind: FailureKind::HttpStatus(500),
                message: "boom".to_string(),
            }),
        }
    }
}

fn story(id: &str) -> Story {
    Story {
        title: id.to_string(),
        url: String::new(),
        author: String::new(),
        num_comments: 0,
        points: 0,
        object_id: ObjectId::Text(id.to_string()),
    }
}

fn next_event(events: &EngineEvents) -> EngineEvent {
    events
        .recv_timeout(Duration::from_secs(5))
        .expect("engine event")
}

#[test]
fn responses_arrive_in_resolution_order() {
    let engine = EngineHandle::with_fetcher(Arc::new(ScriptedFetcher));
    engine.enqueue(1, "slow");
    engine.enqueue(2, "fast");

    let first = next_event(&engine.events());
    let second = next_event(&engine.events());

    assert_eq!(
        first,
        EngineEvent::FetchCompleted {
            request_id: 2,
            result: Ok(vec![story("fast")]),
        }
    );
    assert_eq!(
        second,
        EngineEvent::FetchCompleted {
            request_id: 1,
            result: Ok(vec![story("slow")]),
        }
    );
}

#[test]
fn failures_are_reported_as_events() {
    let engine = EngineHandle::with_fetcher(Arc::new(ScriptedFetcher));
    engine.enqueue(9, "other");

    let EngineEvent::FetchCompleted { request_id, result } = next_event(&engine.events());
    assert_eq!(request_id, 9);
    assert_eq!(result.unwrap_err().kind, FailureKind::HttpStatus(500));
    assert_eq!(
        engine.events().recv_timeout(Duration::from_millis(50)),
        Err(RecvTimeoutError::Timeout)
    );
}

#[test]
fn dropping_the_handle_disconnects_receivers() {
    let engine = EngineHandle::with_fetcher(Arc::new(ScriptedFetcher));
    let events = engine.events();
    engine.enqueue(1, "fast");
    assert!(matches!(
        next_event(&events),
        EngineEvent::FetchCompleted { request_id: 1, .. }
    ));

    drop(engine);

    // Reported promptly rather than as an endless series of timeouts.
    assert_eq!(
        events.recv_timeout(Duration::from_secs(5)),
        Err(RecvTimeoutError::Disconnected)
    );
}
