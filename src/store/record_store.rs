//! Record Store
//!
//! Owns the data file and serializes access to it.

use parking_lot::Mutex;

use crate::error::Result;

use super::{FileStore, Record};

/// The shared record store
///
/// ## Concurrency Model: Single Writer
///
/// Every access runs under `lock`:
/// - **Reads** (`read`): lock → load → inspect
/// - **Writes** (`write`): lock → load → mutate → save
///
/// `save` overwrites the file in place, so reads lock too. No two writers
/// start from the same collection.
///
/// The collection itself is never cached. Each call loads a fresh copy that
/// lives only for the duration of the closure.
pub struct RecordStore {
    /// The data file
    file: FileStore,

    /// Serializes load/mutate/save cycles
    lock: Mutex<()>,
}

impl RecordStore {
    /// Create a store over an already initialized file
    pub fn new(file: FileStore) -> Self {
        Self {
            file,
            lock: Mutex::new(()),
        }
    }

    /// Load the collection and inspect it
    pub fn read<T>(&self, f: impl FnOnce(&[Record]) -> T) -> Result<T> {
        let _guard = self.lock.lock();

        let records = self.file.load()?;
        Ok(f(&records))
    }

    /// Load the collection, mutate it, and save it back
    ///
    /// The collection is saved even when `f` leaves it unchanged.
    pub fn write<T>(&self, f: impl FnOnce(&mut Vec<Record>) -> T) -> Result<T> {
        let _guard = self.lock.lock();

        // Step 1: Load the current collection
        let mut records = self.file.load()?;

        // Step 2: Apply the mutation
        let output = f(&mut records);

        // Step 3: Persist the full collection
        self.file.save(&records)?;

        Ok(output)
    }

    /// Replace the whole collection
    pub fn replace(&self, records: &[Record]) -> Result<()> {
        let _guard = self.lock.lock();
        self.file.save(records)
    }
}
