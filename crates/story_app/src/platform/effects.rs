use std::sync::mpsc::RecvTimeoutError;
use std::thread;
use std::time::Duration;

use story_core::{Effect, FetchFailure, Msg};
use story_engine::{EngineEvent, EngineEvents, EngineHandle, PreferenceStore};
use story_logging::{dispatch_seq, story_error, story_info, story_warn};

/// Executes effects produced by `update` and feeds engine results back as messages.
pub struct EffectRunner {
    engine: EngineHandle,
    prefs: Box<dyn PreferenceStore>,
}

impl EffectRunner {
    pub fn new(
        engine: EngineHandle,
        prefs: Box<dyn PreferenceStore>,
        forward: impl Fn(Msg) -> bool + Send + 'static,
    ) -> Self {
        let runner = Self { engine, prefs };
        runner.spawn_event_loop(forward);
        runner
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchStories { request_id, url } => {
                    story_info!(
                        "FetchStories seq={} request_id={} url={}",
                        dispatch_seq(),
                        request_id,
                        url
                    );
                    self.engine.enqueue(request_id, url);
                }
                Effect::PersistSearchTerm { key, value } => {
                    // A failed write only loses the preference, never the session.
                    if let Err(err) = self.prefs.set(&key, &value) {
                        story_error!("Failed to persist {:?}: {}", key, err);
                    }
                }
            }
        }
    }

    fn spawn_event_loop(&self, forward: impl Fn(Msg) -> bool + Send + 'static) {
        let events = self.engine.events();
        thread::spawn(move || forward_events(&events, forward));
    }
}

/// Pumps engine events into `forward` until the engine goes away or `forward` refuses.
fn forward_events(events: &EngineEvents, forward: impl Fn(Msg) -> bool) {
    loop {
        let event = match events.recv_timeout(Duration::from_millis(100)) {
            Ok(event) => event,
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => {
                story_error!("Engine worker stopped; no further fetch results will arrive");
                return;
            }
        };
        let msg = match event {
            EngineEvent::FetchCompleted { request_id, result } => Msg::FetchResolved {
                request_id,
                result: result.map_err(|err| {
                    story_warn!("Request {} failed: {}", request_id, err);
                    FetchFailure::new(err.kind.to_string())
                }),
            },
        };
        if !forward(msg) {
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{mpsc, Arc};

    use story_core::Story;
    use story_engine::{FetchError, StoryFetcher};

    use super::*;

    struct EmptyFetcher;

    #[async_trait::async_trait]
    impl StoryFetcher for EmptyFetcher {
        async fn fetch(&self, _url: &str) -> Result<Vec<Story>, FetchError> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn forwarding_ends_when_engine_stops() {
        let engine = EngineHandle::with_fetcher(Arc::new(EmptyFetcher));
        let events = engine.events();
        engine.enqueue(3, "any");
        drop(engine);

        let (msg_tx, msg_rx) = mpsc::channel();
        let (done_tx, done_rx) = mpsc::channel();
        std::thread::spawn(move || {
            forward_events(&events, |msg| msg_tx.send(msg).is_ok());
            let _ = done_tx.send(());
        });

        assert!(done_rx.recv_timeout(Duration::from_secs(5)).is_ok());
        // Anything that completed before shutdown is still delivered.
        for msg in msg_rx.try_iter() {
            assert!(matches!(msg, Msg::FetchResolved { request_id: 3, .. }));
        }
    }

    #[test]
    fn forwarding_ends_when_receiver_refuses() {
        let engine = EngineHandle::with_fetcher(Arc::new(EmptyFetcher));
        engine.enqueue(1, "any");

        forward_events(&engine.events(), |msg| {
            assert_eq!(
                msg,
                Msg::FetchResolved {
                    request_id: 1,
                    result: Ok(Vec::new()),
                }
            );
            false
        });
    }
}
