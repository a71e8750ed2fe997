//! Query Module
//!
//! The GraphQL schema over the resolver set, and the response envelope.
//!
//! Documents are parsed, validated and executed by `async-graphql`. That
//! includes the standard validation rules, so a document naming an unknown
//! field, passing a mistyped argument, or asking for two different fields
//! under one response key is rejected before any resolver runs.
//!
//! ## Response Envelope
//! ```text
//! { "data": { <response key>: <value | null>, ... },
//!   "errors": [ { "message", "locations", "path" }, ... ] }
//! ```
//! `errors` is omitted when empty. A resolver that fails leaves `null`
//! under its key; its siblings still run.

mod schema;
mod response;

pub use schema::{
    build_schema, Item, ItemSchema, MutationRoot, QueryRoot, MAX_DEPTH, STORAGE_ERROR_MESSAGE,
};
pub use response::Response;
