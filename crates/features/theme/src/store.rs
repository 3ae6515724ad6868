//! Persisted key/value preferences.
//!
//! [`PreferenceStore`] is the contract the manager writes through. [`FileStore`]
//! keeps one JSON object on disk, the desktop counterpart of browser local
//! storage; [`MemoryStore`] backs tests and headless runs.

use crate::error::{ThemeError, ThemeErrorExt};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// String key/value storage that survives between sessions.
pub trait PreferenceStore {
    /// Returns the stored value, or `None` when the key was never written.
    ///
    /// # Errors
    /// Returns a [`ThemeError`] when the backing medium cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    /// Returns a [`ThemeError`] when the value cannot be persisted.
    fn set(&mut self, key: &str, value: &str) -> Result<(), ThemeError>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// A JSON object file holding string preferences.
///
/// The file is read on every lookup and replaced atomically on every write
/// (temp file, `fsync`, rename), so a crash never leaves a truncated file.
/// Entries this store did not write are preserved.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// No I/O happens until the first read or write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Map<String, Value>, ThemeError> {
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(err) => {
                return Err(ThemeError::Io {
                    source: err,
                    context: Some(format!("Failed to read {}", self.path.display()).into()),
                });
            },
        };

        if raw.iter().all(u8::is_ascii_whitespace) {
            return Ok(Map::new());
        }

        match serde_json::from_slice::<Value>(&raw).context(self.path.display().to_string())? {
            Value::Object(entries) => Ok(entries),
            _ => Err(ThemeError::from("Preference file must hold a JSON object"))
                .context(self.path.display().to_string()),
        }
    }

    fn persist(&self, entries: &Map<String, Value>) -> Result<(), ThemeError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .context(format!("Failed to create {}", parent.display()))?;
        }

        let data = serde_json::to_vec_pretty(entries).context("Failed to encode preferences")?;
        let temp = tmp_path(&self.path);

        if let Err(err) = self.swap_in(&temp, &data) {
            if let Err(cleanup) = fs::remove_file(&temp)
                && cleanup.kind() != std::io::ErrorKind::NotFound
            {
                warn!(path = %temp.display(), error = %cleanup, "Temp file cleanup failed");
            }
            return Err(err);
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            sync_dir(parent);
        }

        debug!(path = %self.path.display(), "Preferences saved");
        Ok(())
    }

    fn swap_in(&self, temp: &Path, data: &[u8]) -> Result<(), ThemeError> {
        {
            let mut file = fs::File::create(temp)
                .context(format!("Temp creation failed: {}", temp.display()))?;
            file.write_all(data).context("Write failed")?;
            file.sync_all().context("Hardware sync failed")?;
        }

        fs::rename(temp, &self.path).context(format!(
            "Atomic swap failed: {} -> {}",
            temp.display(),
            self.path.display()
        ))
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.load()?.get(key).and_then(Value::as_str).map(ToOwned::to_owned))
    }

    /// A file that exists but cannot be decoded is replaced rather than kept, so a
    /// damaged preference never blocks later writes. I/O failures still surface.
    fn set(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        let mut entries = match self.load() {
            Ok(entries) => entries,
            Err(err @ (ThemeError::Serialization { .. } | ThemeError::Internal { .. })) => {
                warn!(path = %self.path.display(), error = %err, "Replacing unreadable preference file");
                Map::new()
            },
            Err(err) => return Err(err),
        };
        entries.insert(key.to_owned(), Value::String(value.to_owned()));
        self.persist(&entries)
    }
}

/// Flushes the rename itself. Directories cannot be opened for sync on every platform.
fn sync_dir(path: &Path) {
    match fs::File::open(path) {
        Ok(dir) => {
            if let Err(err) = dir.sync_all() {
                debug!(path = %path.display(), error = %err, "Directory sync failed");
            }
        },
        Err(err) => debug!(path = %path.display(), error = %err, "Directory open failed"),
    }
}

fn tmp_path(target: &Path) -> PathBuf {
    let file_name = target.file_name().and_then(|s| s.to_str()).unwrap_or("preferences");
    target.with_file_name(format!("{file_name}.anstmp.{}", std::process::id()))
}
