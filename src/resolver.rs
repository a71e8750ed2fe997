//! Resolver Set
//!
//! The five operations behind the schema's root fields.
//!
//! ## Responsibilities
//! - Load the collection at the start of every call
//! - Apply the lookup or mutation with the legacy matching rules
//! - Save the collection after every mutation, whether or not it matched
//!
//! ## Matching Rules
//! - `get` / `update`: first record with the index wins
//! - `delete`: every record with the index is removed; the last one removed
//!   is returned
//! - Not found: `get` yields nothing, `update`/`delete` yield the zero-value
//!   record

use std::sync::Arc;

use crate::error::Result;
use crate::store::{Record, RecordStore};

/// The resolver set, bound to one record store
#[derive(Clone)]
pub struct Resolver {
    store: Arc<RecordStore>,
}

impl Resolver {
    /// Bind the resolvers to a store
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }

    /// First record with `index`, if any
    ///
    /// A missing index argument finds nothing.
    pub fn get(&self, index: Option<i64>) -> Result<Option<Record>> {
        self.store.read(|records| {
            let index = index?;
            records.iter().find(|r| r.index == index).cloned()
        })
    }

    /// The entire collection, in file order
    pub fn list(&self) -> Result<Vec<Record>> {
        self.store.read(|records| records.to_vec())
    }

    /// Append `{index, name}` without any duplicate check
    pub fn create(&self, index: i64, name: String) -> Result<Record> {
        let record = Record::new(index, name);

        self.store.write(|records| {
            records.push(record.clone());
        })?;

        tracing::debug!("Created item {}", record.index);
        Ok(record)
    }

    /// Rename the first record with `index`
    ///
    /// Without a `name` the record is returned untouched. The collection is
    /// saved even when nothing matched.
    pub fn update(&self, index: i64, name: Option<String>) -> Result<Record> {
        let updated = self.store.write(|records| {
            let record = records.iter_mut().find(|r| r.index == index)?;
            if let Some(name) = name {
                record.name = name;
            }
            Some(record.clone())
        })?;

        match updated {
            Some(record) => {
                tracing::debug!("Updated item {}", index);
                Ok(record)
            }
            None => {
                tracing::debug!("Update found no item {}", index);
                Ok(Record::zero())
            }
        }
    }

    /// Remove every record with `index`, returning the last one removed
    ///
    /// The collection is saved even when nothing matched.
    pub fn delete(&self, index: i64) -> Result<Record> {
        let (removed, last) = self.store.write(|records| {
            let before = records.len();
            let last = records.iter().rev().find(|r| r.index == index).cloned();
            records.retain(|r| r.index != index);
            (before - records.len(), last)
        })?;

        tracing::debug!("Deleted {} item(s) with index {}", removed, index);
        Ok(last.unwrap_or_default())
    }
}
