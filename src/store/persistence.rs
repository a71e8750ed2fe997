//! Flat-file persistence
//!
//! Reads and writes the entire collection as one JSON array.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{ItemError, Result};

use super::Record;

/// Loads and saves the collection file
///
/// `FileStore` holds no collection of its own; every `load` goes back to the
/// file. Callers that need load-mutate-save consistency go through
/// [`RecordStore`](super::RecordStore), which serializes access.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store over the given file (nothing is touched yet)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Prepare the file for use
    ///
    /// If the file does not exist and `create_if_missing` is set, an empty
    /// collection is written. Otherwise the file is loaded once to surface a
    /// missing or malformed file at startup. Returns the record count.
    pub fn init(&self, create_if_missing: bool) -> Result<usize> {
        if create_if_missing && !self.exists() {
            if let Some(parent) = self.path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            tracing::info!("Creating empty collection at {}", self.path.display());
            self.save(&[])?;
            return Ok(0);
        }

        Ok(self.load()?.len())
    }

    /// Read the whole file and deserialize it, preserving order
    ///
    /// A file containing `null` loads as an empty collection.
    pub fn load(&self) -> Result<Vec<Record>> {
        let data = fs::read(&self.path).map_err(|source| ItemError::StorageRead {
            path: self.path.clone(),
            source,
        })?;

        let records: Option<Vec<Record>> =
            serde_json::from_slice(&data).map_err(|source| ItemError::StorageFormat {
                path: self.path.clone(),
                source,
            })?;
        let records = records.unwrap_or_default();

        tracing::trace!(
            "Loaded {} records ({} bytes) from {}",
            records.len(),
            data.len(),
            self.path.display()
        );
        Ok(records)
    }

    /// Serialize the whole collection and overwrite the file in one write
    pub fn save(&self, records: &[Record]) -> Result<()> {
        let data = serde_json::to_vec(records).map_err(|source| ItemError::StorageFormat {
            path: self.path.clone(),
            source,
        })?;

        fs::write(&self.path, &data).map_err(|source| ItemError::StorageWrite {
            path: self.path.clone(),
            source,
        })?;

        tracing::trace!(
            "Saved {} records ({} bytes) to {}",
            records.len(),
            data.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Whether the file currently exists
    pub fn exists(&self) -> bool {
        match fs::metadata(&self.path) {
            Ok(meta) => meta.is_file(),
            Err(e) if e.kind() == ErrorKind::NotFound => false,
            Err(_) => true,
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}
