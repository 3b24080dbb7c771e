//! Save stores: where the single save slot lives.
//!
//! A store holds at most one record. Its presence is what makes a
//! "Continue" option available to the player.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use super::record::SaveRecord;
use crate::core::StoreError;

/// File name used by [`JsonFileStore::in_dir`].
pub const DEFAULT_SAVE_FILE: &str = "card_match_save.json";

/// A single-slot save location.
pub trait SaveStore {
    /// Read the saved record, if there is one.
    fn load(&self) -> Result<Option<SaveRecord>, StoreError>;

    /// Replace the saved record.
    fn store(&mut self, record: &SaveRecord) -> Result<(), StoreError>;

    /// Delete the saved record. Clearing an empty store is not an error.
    fn clear(&mut self) -> Result<(), StoreError>;

    /// Whether a record is present.
    fn has_save(&self) -> bool;
}

/// In-memory store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    record: Option<SaveRecord>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a record already saved.
    #[must_use]
    pub fn with_record(record: SaveRecord) -> Self {
        Self { record: Some(record) }
    }

    /// Peek at the stored record.
    #[must_use]
    pub fn record(&self) -> Option<&SaveRecord> {
        self.record.as_ref()
    }
}

impl SaveStore for MemoryStore {
    fn load(&self) -> Result<Option<SaveRecord>, StoreError> {
        Ok(self.record.clone())
    }

    fn store(&mut self, record: &SaveRecord) -> Result<(), StoreError> {
        self.record = Some(record.clone());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.record = None;
        Ok(())
    }

    fn has_save(&self) -> bool {
        self.record.is_some()
    }
}

/// Store backed by one JSON file.
///
/// Writes go to a sibling temp file first and are renamed into place, so
/// a crash mid-write leaves the previous save intact.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store under [`DEFAULT_SAVE_FILE`] in `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(DEFAULT_SAVE_FILE))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }
}

impl SaveStore for JsonFileStore {
    fn load(&self) -> Result<Option<SaveRecord>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(&self.path)?;
        let record = SaveRecord::from_json(&json)?;
        debug!("loaded save from {}", self.path.display());
        Ok(Some(record))
    }

    fn store(&mut self, record: &SaveRecord) -> Result<(), StoreError> {
        let json = record.to_json_pretty()?;
        let temp = self.temp_path();
        fs::write(&temp, json)?;
        fs::rename(&temp, &self.path)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn has_save(&self) -> bool {
        self.path.exists()
    }
}
