use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tempfile::NamedTempFile;

/// Error type for preference persistence
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not write {path}: {source}")]
    WriteError { path: PathBuf, source: io::Error },
    #[error("could not serialize preferences: {0}")]
    SerializeError(#[from] serde_json::Error),
}

/// Key-value port for boolean display preferences.
///
/// Values are kept as the strings `"true"` / `"false"`. Anything else reads
/// back as `None`.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<bool>;
    fn set(&mut self, key: &str, value: bool) -> Result<(), StoreError>;
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

fn flag_str(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

/// Store that lives only as long as the process
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: IndexMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put an arbitrary raw value under `key`
    pub fn insert_raw(&mut self, key: &str, raw: &str) {
        self.entries.insert(key.to_string(), raw.to_string());
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|s| s.as_str())
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<bool> {
        self.entries.get(key).and_then(|raw| parse_flag(raw))
    }

    fn set(&mut self, key: &str, value: bool) -> Result<(), StoreError> {
        self.entries
            .insert(key.to_string(), flag_str(value).to_string());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// JSON file store
// ---------------------------------------------------------------------------

/// Store backed by a flat JSON object of strings, e.g.
/// `{"darkMode": "true", "lowStimulus": "false"}`.
///
/// The file is read once when opened; every `set` rewrites it atomically.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: IndexMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`. A missing or unreadable file starts empty;
    /// non-string values are ignored.
    pub fn open(path: &Path) -> Self {
        let entries = read_entries(path);
        FileStore {
            path: path.to_path_buf(),
            entries,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(&self.entries)?;
        write_atomic(&self.path, content.as_bytes()).map_err(|e| StoreError::WriteError {
            path: self.path.clone(),
            source: e,
        })
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<bool> {
        self.entries.get(key).and_then(|raw| parse_flag(raw))
    }

    fn set(&mut self, key: &str, value: bool) -> Result<(), StoreError> {
        self.entries
            .insert(key.to_string(), flag_str(value).to_string());
        self.flush()
    }
}

fn read_entries(path: &Path) -> IndexMap<String, String> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            if e.kind() != io::ErrorKind::NotFound {
                log::warn!("could not read {}: {}", path.display(), e);
            }
            return IndexMap::new();
        }
    };
    match serde_json::from_str::<IndexMap<String, serde_json::Value>>(&content) {
        Ok(values) => values
            .into_iter()
            .filter_map(|(k, v)| match v {
                serde_json::Value::String(s) => Some((k, s)),
                _ => None,
            })
            .collect(),
        Err(e) => {
            log::warn!("ignoring malformed preferences {}: {}", path.display(), e);
            IndexMap::new()
        }
    }
}

/// Write via a temp file in the same directory, then rename over `path`
fn write_atomic(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
