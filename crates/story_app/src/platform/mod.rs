//! Terminal platform: configuration, logging, effect execution and the line-based UI.
mod app;
pub mod config;
mod effects;
pub mod logging;
mod persistence;
mod ui;

pub use app::run_app;
