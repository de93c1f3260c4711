//! # Form Store: Persistence Contract
//!
//! The engine never owns long-term storage. A [`FormStore`] is handed the
//! whole wizard record on every save or completion and returns it on load.
//! A failed save never touches the caller's in-memory record, which stays
//! the source of truth until a save succeeds.
//!
//! Two implementations are provided:
//!
//! - [`MemoryStore`]: keeps the last saved record and counts saves. Can be
//!   built to refuse every save, for exercising failure paths.
//! - [`JsonFileStore`]: a pretty-printed JSON object on disk. Writes go to
//!   a sibling temp file that is then renamed over the target, so readers
//!   never see a half-written record. A missing file loads as empty.

use std::path::{Path, PathBuf};

use scw_core::FormRecord;

use crate::error::StoreError;

/// Load/save contract for the wizard record.
pub trait FormStore {
    /// Load the persisted record.
    fn load(&self) -> Result<FormRecord, StoreError>;

    /// Persist `record`, replacing whatever was stored.
    fn save(&mut self, record: &FormRecord) -> Result<(), StoreError>;
}

impl<S: FormStore + ?Sized> FormStore for Box<S> {
    fn load(&self) -> Result<FormRecord, StoreError> {
        (**self).load()
    }

    fn save(&mut self, record: &FormRecord) -> Result<(), StoreError> {
        (**self).save(record)
    }
}

// ─── Memory ──────────────────────────────────────────────────────────

/// In-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    record: FormRecord,
    saves: usize,
    refuse_saves: bool,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose next load returns `record`.
    pub fn with_record(record: FormRecord) -> Self {
        Self {
            record,
            ..Self::default()
        }
    }

    /// A store that refuses every save.
    pub fn failing() -> Self {
        Self {
            refuse_saves: true,
            ..Self::default()
        }
    }

    /// Number of successful saves.
    pub fn saves(&self) -> usize {
        self.saves
    }

    /// The last saved record.
    pub fn record(&self) -> &FormRecord {
        &self.record
    }
}

impl FormStore for MemoryStore {
    fn load(&self) -> Result<FormRecord, StoreError> {
        Ok(self.record.clone())
    }

    fn save(&mut self, record: &FormRecord) -> Result<(), StoreError> {
        if self.refuse_saves {
            return Err(StoreError::Unavailable {
                reason: "memory store is configured to refuse saves".to_string(),
            });
        }
        self.record = record.clone();
        self.saves += 1;
        Ok(())
    }
}

// ─── JSON file ───────────────────────────────────────────────────────

/// Store backed by a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// A store reading and writing `path`. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl FormStore for JsonFileStore {
    fn load(&self) -> Result<FormRecord, StoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no saved record, starting empty");
                return Ok(FormRecord::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };
        FormRecord::from_json_str(&content).map_err(|source| StoreError::Format {
            path: self.path.display().to_string(),
            source,
        })
    }

    fn save(&mut self, record: &FormRecord) -> Result<(), StoreError> {
        let json = record.to_json_pretty().map_err(|source| StoreError::Format {
            path: self.path.display().to_string(),
            source,
        })?;
        let temp = self.temp_path();
        std::fs::write(&temp, json).map_err(|e| self.io_error(e))?;
        std::fs::rename(&temp, &self.path).map_err(|e| self.io_error(e))?;
        tracing::debug!(path = %self.path.display(), fields = record.len(), "record saved");
        Ok(())
    }
}
