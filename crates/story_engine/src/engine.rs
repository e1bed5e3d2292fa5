use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use story_core::RequestId;
use story_logging::{story_debug, story_warn};

use crate::fetch::{FetchSettings, ReqwestStoryFetcher, StoryFetcher};
use crate::EngineEvent;

enum EngineCommand {
    Fetch { request_id: RequestId, url: String },
}

/// Handle to the background fetch worker.
///
/// Requests are never cancelled; every enqueued fetch produces exactly one
/// [`EngineEvent::FetchCompleted`], in whatever order they resolve.
/// Dropping the handle stops the worker and abandons in-flight fetches.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    events: EngineEvents,
}

/// Receiving side of the worker, shareable with a forwarding thread.
#[derive(Clone)]
pub struct EngineEvents {
    rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineEvents {
    /// Waits up to `timeout` for the next event.
    ///
    /// `Disconnected` means the worker is gone (or the receiver lock was
    /// poisoned) and no further events will ever arrive.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<EngineEvent, RecvTimeoutError> {
        let rx = self.rx.lock().map_err(|_| RecvTimeoutError::Disconnected)?;
        rx.recv_timeout(timeout)
    }
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Self {
        Self::with_fetcher(Arc::new(ReqwestStoryFetcher::new(settings)))
    }

    pub fn with_fetcher(fetcher: Arc<dyn StoryFetcher>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), command, event_tx).await;
                });
            }
            story_debug!("Engine command channel closed");
        });

        Self {
            cmd_tx,
            events: EngineEvents {
                rx: Arc::new(Mutex::new(event_rx)),
            },
        }
    }

    pub fn enqueue(&self, request_id: RequestId, url: impl Into<String>) {
        if self
            .cmd_tx
            .send(EngineCommand::Fetch {
                request_id,
                url: url.into(),
            })
            .is_err()
        {
            story_warn!("Engine worker gone; request {} dropped", request_id);
        }
    }

    pub fn events(&self) -> EngineEvents {
        self.events.clone()
    }
}

async fn handle_command(
    fetcher: &dyn StoryFetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Fetch { request_id, url } => {
            let result = fetcher.fetch(&url).await;
            let _ = event_tx.send(EngineEvent::FetchCompleted { request_id, result });
        }
    }
}
