//! Store Module
//!
//! The record collection and its flat-file persistence.
//!
//! ## Responsibilities
//! - Define the `Record` entity and its persisted form
//! - Load/save the whole collection as one JSON document
//! - Serialize every load-mutate-save cycle behind a single writer
//!
//! ## File Format
//! ```text
//! [
//!   {"itemindex": 1, "itemname": "name1"},
//!   {"itemindex": 2, "itemname": "name2"},
//!   ...
//! ]
//! ```
//! The file is rewritten in full on every mutation. There is no
//! temp-file/rename step, so a crash mid-write can leave a truncated file.

mod record;
mod persistence;
mod record_store;

pub use record::{sample_collection, Record};
pub use persistence::FileStore;
pub use record_store::RecordStore;
