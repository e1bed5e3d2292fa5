use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use story_logging::{story_info, story_warn};
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse preferences: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("failed to serialize preferences: {0}")]
    Serialize(#[from] ron::Error),
}

/// String key-value storage that survives restarts.
pub trait PreferenceStore: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// Reads the search term once at startup, falling back to `default`
/// when it is absent or empty.
pub fn load_search_term(store: &dyn PreferenceStore, key: &str, default: &str) -> String {
    match store.get(key) {
        Some(value) if !value.is_empty() => value,
        _ => default.to_string(),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryPreferenceStore {
    values: BTreeMap<String, String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Preferences kept as a RON map in a single file, rewritten atomically on every `set`.
#[derive(Debug)]
pub struct RonFilePreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl RonFilePreferenceStore {
    /// Opens the store at `path`. A missing file yields an empty store;
    /// an unreadable or corrupt one is logged and treated as empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match read_values(&path) {
            Ok(values) => values,
            Err(PreferenceError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
                BTreeMap::new()
            }
            Err(err) => {
                story_warn!("Failed to load preferences from {:?}: {}", path, err);
                BTreeMap::new()
            }
        };
        story_info!("Loaded {} preference(s) from {:?}", values.len(), path);
        Self { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<(), PreferenceError> {
        let content = ron::ser::to_string_pretty(&self.values, ron::ser::PrettyConfig::new())?;
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;

        let mut tmp = NamedTempFile::new_in(&dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;
        tmp.persist(&self.path).map_err(|e| PreferenceError::Io(e.error))?;
        Ok(())
    }
}

impl PreferenceStore for RonFilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.insert(key.to_string(), value.to_string());
        self.save()
    }
}

fn read_values(path: &Path) -> Result<BTreeMap<String, String>, PreferenceError> {
    let content = fs::read_to_string(path)?;
    Ok(ron::from_str(&content)?)
}
