//! Key/value preference storage for the reading-mode flag.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use reader_logging::reader_debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::persist::{write_atomically, PersistError};

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("failed to read preferences from {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse preferences in {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("failed to serialize preferences: {0}")]
    Serialize(String),
    #[error(transparent)]
    Persist(#[from] PersistError),
}

pub trait PreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>, PreferenceError>;
    fn save(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// String form of the `active` flag as stored.
pub fn format_active(active: bool) -> &'static str {
    if active {
        "true"
    } else {
        "false"
    }
}

/// Parses a stored `active` flag. Anything but `true`/`false` is unknown.
pub fn parse_active(value: &str) -> Option<bool> {
    match value.trim() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryPreferenceStore {
    entries: BTreeMap<String, String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct PreferenceFile {
    entries: BTreeMap<String, String>,
}

/// Preferences kept in a RON file, rewritten atomically on every save.
#[derive(Debug, Clone)]
pub struct RonPreferenceStore {
    path: PathBuf,
}

impl RonPreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_file(&self) -> Result<PreferenceFile, PreferenceError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Ok(PreferenceFile::default());
            }
            Err(source) => {
                return Err(PreferenceError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        ron::from_str(&content).map_err(|err| PreferenceError::Parse {
            path: self.path.clone(),
            message: err.to_string(),
        })
    }
}

impl PreferenceStore for RonPreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.read_file()?.entries.remove(key))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let mut file = self.read_file()?;
        file.entries.insert(key.to_string(), value.to_string());
        let pretty = ron::ser::PrettyConfig::new();
        let content = ron::ser::to_string_pretty(&file, pretty)
            .map_err(|err| PreferenceError::Serialize(err.to_string()))?;
        write_atomically(&self.path, &content)?;
        reader_debug!("Saved preference {}={} to {:?}", key, value, self.path);
        Ok(())
    }
}
