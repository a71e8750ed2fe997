//! Network Module
//!
//! HTTP transport for the query endpoint.
//!
//! ## Architecture
//! - axum router with a single endpoint (GET and POST)
//! - The document comes from the `query` query-string parameter
//! - Resolvers run on the blocking pool; file I/O never blocks the runtime

mod server;
mod handlers;

pub use server::{create_router, wait_for_signal, Server};
pub use handlers::{execute_query, AppState, QueryParams};
