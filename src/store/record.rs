//! Record definitions
//!
//! The single entity kept by the service.

use serde::{Deserialize, Serialize};

/// One item of the collection
///
/// `index` is chosen by the caller and is not unique: two records may share
/// it. The default value `{index: 0, name: ""}` doubles as the "nothing
/// matched" result of update and delete.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "itemindex", default)]
    pub index: i64,

    #[serde(rename = "itemname", default)]
    pub name: String,
}

impl Record {
    /// Create a record
    pub fn new(index: i64, name: impl Into<String>) -> Self {
        Self {
            index,
            name: name.into(),
        }
    }

    /// The zero-value record
    pub fn zero() -> Self {
        Self::default()
    }

    /// Whether this is the zero-value record
    pub fn is_zero(&self) -> bool {
        self.index == 0 && self.name.is_empty()
    }
}

/// Sample data: `{i, "name{i}"}` for `i` in `1..=count`
pub fn sample_collection(count: i64) -> Vec<Record> {
    (1..=count).map(|i| Record::new(i, format!("name{}", i))).collect()
}
