//! Response definitions
//!
//! The `{data, errors}` envelope returned for every document.

use async_graphql::ServerError;
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::error::ItemError;

/// The response envelope
#[derive(Debug, Serialize)]
pub struct Response {
    /// Per-field results keyed by response key, or `null` if the document
    /// never executed
    pub data: JsonValue,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ServerError>,

    /// A storage error occurred while resolving some field
    #[serde(skip)]
    pub storage_failure: bool,
}

impl Response {
    /// A document that could not be executed at all
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            data: JsonValue::Null,
            errors: vec![ServerError::new(message, None)],
            storage_failure: false,
        }
    }

    /// Whether no errors were reported
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Error messages in report order
    pub fn messages(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.message.as_str()).collect()
    }

    /// Serialize the envelope
    pub fn to_json(&self) -> JsonValue {
        serde_json::to_value(self).unwrap_or(JsonValue::Null)
    }
}

impl From<async_graphql::Response> for Response {
    fn from(response: async_graphql::Response) -> Self {
        let storage_failure = response.errors.iter().any(|e| {
            e.source::<ItemError>()
                .map_or(false, ItemError::is_storage)
        });

        Self {
            data: response.data.into_json().unwrap_or(JsonValue::Null),
            errors: response.errors,
            storage_failure,
        }
    }
}
