//! Engine Module
//!
//! The top-level coordinator that wires all components together.
//!
//! ## Responsibilities
//! - Prepare the data file on startup
//! - Own the record store and hand it to the resolver set
//! - Execute query documents through the GraphQL schema

use std::path::Path;
use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;
use crate::query::{build_schema, ItemSchema, Response};
use crate::resolver::Resolver;
use crate::store::{FileStore, Record, RecordStore};

/// The item service engine
///
/// Cheap to share behind an `Arc`; every method takes `&self`. Concurrent
/// documents are serialized per resolver call by the record store.
pub struct Engine {
    /// Engine configuration
    config: Config,

    /// The shared record store
    store: Arc<RecordStore>,

    /// The resolver set bound to `store`
    resolver: Resolver,

    /// GraphQL schema over the resolver set
    schema: ItemSchema,
}

impl Engine {
    /// Open an engine with the given config
    ///
    /// On startup:
    /// 1. Validate the config
    /// 2. Create the data file if missing (when allowed)
    /// 3. Load it once so a broken file is reported now
    /// 4. Bind the resolver set to the store
    pub fn open(config: Config) -> Result<Self> {
        // Step 1: Reject unusable settings
        config.validate()?;

        // Step 2 + 3: Prepare and check the data file
        let file = FileStore::new(&config.data_file);
        let count = file.init(config.create_if_missing)?;
        tracing::info!(
            "Opened {} with {} item(s)",
            config.data_file.display(),
            count
        );

        // Step 4: Bind the resolvers to the store
        let store = Arc::new(RecordStore::new(file));
        let resolver = Resolver::new(Arc::clone(&store));
        let schema = build_schema(resolver.clone());

        Ok(Self {
            config,
            store,
            resolver,
            schema,
        })
    }

    /// Open with a data file path (convenience method)
    ///
    /// Uses default config with the specified data file
    pub fn open_path(path: &Path) -> Result<Self> {
        let config = Config::builder().data_file(path).build();
        Self::open(config)
    }

    /// Execute a query document
    ///
    /// Must run inside a Tokio runtime; resolvers use the blocking pool.
    pub async fn execute(&self, document: &str) -> Response {
        let response = Response::from(self.schema.execute(document).await);

        if !response.is_ok() {
            tracing::warn!("errors: {:?}", response.messages());
        }
        response
    }

    /// Overwrite the collection with the given records
    pub fn replace_all(&self, records: &[Record]) -> Result<()> {
        self.store.replace(records)?;
        tracing::info!("Replaced collection with {} item(s)", records.len());
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the resolver set
    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Get the data file path
    pub fn data_file(&self) -> &Path {
        &self.config.data_file
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
