#![deny(missing_docs)]
//! Logging for story_search.
//!
//! The `story_*` macros are thin wrappers over the `log` facade so every crate
//! logs the same way. The dispatch sequence ties log lines to the update-loop
//! message that caused them: the app bumps it once per `Msg`, and effect logs
//! (`FetchStories seq=..`) read it back so a fetch can be traced to the
//! mount, submit or keystroke that issued it.

use std::cell::Cell;

thread_local! {
    /// Messages dispatched so far on this thread's update loop.
    static DISPATCH_SEQ: Cell<u64> = const { Cell::new(0) };
}

/// Advances the dispatch sequence and returns the new value.
///
/// Called by the update loop before handing a message to `update`; the first
/// dispatch on a thread is 1.
pub fn next_dispatch_seq() -> u64 {
    DISPATCH_SEQ.with(|seq| {
        let next = seq.get() + 1;
        seq.set(next);
        next
    })
}

/// Sequence number of the message currently being dispatched on this thread,
/// or the number of messages dispatched so far once the loop is idle.
///
/// Zero before the first dispatch and on threads without an update loop,
/// such as the engine worker.
pub fn dispatch_seq() -> u64 {
    DISPATCH_SEQ.with(Cell::get)
}

/// Trace-level log line.
#[macro_export]
macro_rules! story_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Debug-level log line; per-message dispatch tracing and dropped responses.
#[macro_export]
macro_rules! story_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Info-level log line; fetch lifecycle and startup.
#[macro_export]
macro_rules! story_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Warn-level log line; failed fetches and unreadable preference files.
#[macro_export]
macro_rules! story_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Error-level log line; lost preference writes and a stopped engine worker.
#[macro_export]
macro_rules! story_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Installs a terminal logger for integration tests, at debug level in debug
/// builds so dropped-response and dispatch lines show up in failing output.
///
/// Later calls are ignored, so each test can call it unconditionally.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, ConfigBuilder, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    let config = ConfigBuilder::new()
        .add_filter_allow_str("story_")
        .build();

    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        config,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_is_per_thread_and_starts_at_one() {
        std::thread::spawn(|| {
            assert_eq!(dispatch_seq(), 0);
            assert_eq!(next_dispatch_seq(), 1);
            assert_eq!(next_dispatch_seq(), 2);
            assert_eq!(dispatch_seq(), 2);
        })
        .join()
        .unwrap();

        std::thread::spawn(|| assert_eq!(dispatch_seq(), 0))
            .join()
            .unwrap();
    }
}
