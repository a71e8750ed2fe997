//! # itemql
//!
//! A minimal item service with:
//! - One HTTP endpoint taking a GraphQL-style query document
//! - Five schema-bound operations: get, list, create, update, delete
//! - The whole collection persisted to a single JSON file
//! - Load-before / save-after on every call, under a single writer
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   HTTP Endpoint (axum)                       │
//! │                 GET/POST /Item?query=...                     │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │              GraphQL Schema (async-graphql)                  │
//! │          (parse → validate → resolve → envelope)             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                    Resolver Set                              │
//! │         get · list · create · update · delete                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                   Record Store                               │
//! │          (Mutex: load → mutate → save)                       │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!                       ▼
//!                ┌─────────────┐
//!                │  JSON file  │
//!                └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod store;
pub mod resolver;
pub mod query;
pub mod network;
pub mod engine;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{ItemError, Result};
pub use config::Config;
pub use engine::Engine;
pub use store::Record;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of itemql
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
