//! Append-only JSONL record store.
//!
//! Every mutation is appended as one line: `{"op":"put","record":{..}}` for
//! creates and status changes, `{"op":"delete","id":".."}` for removals.
//! Opening the store replays the file; the last line for an id wins.

use super::index::RecordIndex;
use async_trait::async_trait;
use chrono::Utc;
use mission_application::{NewRecord, RecordFilter, RecordStore, StoreError, StoredRecord};
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, warn};

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
enum LogEntry {
    Put { record: StoredRecord },
    Delete { id: String },
}

struct Inner {
    index: RecordIndex,
    sink: Box<dyn Write + Send>,
    /// A failed append may have left a partial line behind
    torn: bool,
}

impl Inner {
    /// Write one whole line straight to the file. Nothing is held back in
    /// memory, so a failed append can never be flushed by a later one.
    fn append(&mut self, entry: &LogEntry) -> Result<(), StoreError> {
        let mut line = serde_json::to_string(entry)?;
        line.push('\n');
        if self.torn {
            line.insert(0, '\n');
        }

        let written = self
            .sink
            .write_all(line.as_bytes())
            .and_then(|()| self.sink.flush());
        self.torn = written.is_err();
        written.map_err(|e| StoreError::Io(e.to_string()))
    }
}

/// Record store persisted to a JSON lines file.
pub struct JsonlRecordStore {
    inner: Mutex<Inner>,
    path: PathBuf,
}

impl JsonlRecordStore {
    /// Open the store at `path`, creating the file and its parent directory
    /// when missing.
    ///
    /// Lines that fail to parse are skipped with a warning.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::Io(e.to_string()))?;
        }

        let index = if path.exists() {
            Self::replay(path)?
        } else {
            RecordIndex::default()
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| StoreError::Io(format!("{}: {}", path.display(), e)))?;

        debug!(path = %path.display(), records = index.len(), "Record store opened");

        Ok(Self::from_parts(path, index, Box::new(file)))
    }

    fn from_parts(path: &Path, index: RecordIndex, sink: Box<dyn Write + Send>) -> Self {
        Self {
            inner: Mutex::new(Inner {
                index,
                sink,
                torn: false,
            }),
            path: path.to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn replay(path: &Path) -> Result<RecordIndex, StoreError> {
        let file = File::open(path).map_err(|e| StoreError::Io(e.to_string()))?;
        let mut index = RecordIndex::default();

        for (number, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| StoreError::Io(e.to_string()))?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<LogEntry>(&line) {
                Ok(LogEntry::Put { record }) => index.put(record),
                Ok(LogEntry::Delete { id }) => {
                    index.remove(&id);
                }
                Err(e) => warn!(
                    path = %path.display(),
                    line = number + 1,
                    error = %e,
                    "Skipping unreadable record line"
                ),
            }
        }
        Ok(index)
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Inner>, StoreError> {
        self.inner
            .lock()
            .map_err(|_| StoreError::Unavailable("record store lock poisoned".to_string()))
    }
}

#[async_trait]
impl RecordStore for JsonlRecordStore {
    async fn create(&self, record: NewRecord) -> Result<StoredRecord, StoreError> {
        let mut inner = self.lock()?;
        let stored = inner.index.insert(record, Utc::now())?;
        let entry = LogEntry::Put {
            record: stored.clone(),
        };
        if let Err(e) = inner.append(&entry) {
            inner.index.remove(&stored.id);
            return Err(e);
        }
        debug!(id = %stored.id, kind = stored.kind.as_str(), "Record appended");
        Ok(stored)
    }

    async fn get(&self, id: &str) -> Result<Option<StoredRecord>, StoreError> {
        Ok(self.lock()?.index.get(id).cloned())
    }

    async fn list(&self, filter: &RecordFilter) -> Result<Vec<StoredRecord>, StoreError> {
        Ok(self.lock()?.index.list(filter))
    }

    async fn update_status(&self, id: &str, status: &str) -> Result<StoredRecord, StoreError> {
        let mut inner = self.lock()?;
        let updated = inner.index.with_status(id, status, Utc::now())?;
        inner.append(&LogEntry::Put {
            record: updated.clone(),
        })?;
        inner.index.put(updated.clone());
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut inner = self.lock()?;
        if inner.index.get(id).is_none() {
            return Ok(false);
        }
        inner.append(&LogEntry::Delete { id: id.to_string() })?;
        Ok(inner.index.remove(id))
    }
}
