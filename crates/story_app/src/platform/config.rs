use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use serde::{Deserialize, Serialize};
use story_core::{API_ENDPOINT, DEFAULT_SEARCH_TERM};
use story_engine::FetchSettings;

use super::logging::{LogDestination, LoggingConfig};

/// Config file picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "story_search.ron";

#[derive(Debug, Parser)]
#[command(name = "story_search", version, about = "Search Hacker News stories from the terminal")]
pub struct Args {
    /// RON configuration file.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Search endpoint; the search term is appended to it.
    #[arg(long)]
    pub api_base: Option<String>,
    /// File the search term preference is stored in.
    #[arg(long)]
    pub prefs: Option<PathBuf>,
    /// Where log output goes.
    #[arg(long, value_enum)]
    pub log: Option<LogDestination>,
    /// Show every fetched story instead of filtering titles by the search input.
    #[arg(long)]
    pub no_client_filter: bool,
    /// Whole-request timeout in seconds.
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base: String,
    pub preferences_path: PathBuf,
    pub default_search_term: String,
    pub client_filter: bool,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: API_ENDPOINT.to_string(),
            preferences_path: PathBuf::from(".story_search_prefs.ron"),
            default_search_term: DEFAULT_SEARCH_TERM.to_string(),
            client_filter: true,
            connect_timeout_secs: 10,
            request_timeout_secs: 30,
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            ..FetchSettings::default()
        }
    }

    fn apply_overrides(&mut self, args: &Args) {
        if let Some(api_base) = &args.api_base {
            self.api_base = api_base.clone();
        }
        if let Some(prefs) = &args.prefs {
            self.preferences_path = prefs.clone();
        }
        if let Some(destination) = args.log {
            self.logging.destination = destination;
        }
        if args.no_client_filter {
            self.client_filter = false;
        }
        if let Some(secs) = args.timeout_secs {
            self.request_timeout_secs = secs;
        }
    }
}

/// Builds the effective configuration: file (explicit or default) then CLI overrides.
pub fn load(args: &Args) -> anyhow::Result<AppConfig> {
    let mut config = match &args.config {
        Some(path) => read_config(path)?,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                read_config(default_path)?
            } else {
                AppConfig::default()
            }
        }
    };
    config.apply_overrides(args);
    Ok(config)
}

fn read_config(path: &Path) -> anyhow::Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    ron::from_str(&content).with_context(|| format!("failed to parse config file {}", path.display()))
}
