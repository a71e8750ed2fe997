//! Schema definitions
//!
//! Declares the root fields and binds each one to the resolver set. Parsing,
//! validation, argument coercion and execution are done by `async-graphql`.
//!
//! ```text
//! type Query {
//!   get(itemindex: Int): Item
//!   list: [Item!]
//! }
//!
//! type Mutation {
//!   create(itemindex: Int!, itemname: String!): Item
//!   update(itemindex: Int!, itemname: String): Item
//!   delete(itemindex: Int!): Item
//! }
//!
//! type Item {
//!   itemindex: Int!
//!   itemname: String!
//! }
//! ```
//!
//! Every root field is nullable, so a failing resolver nulls only its own key.

use async_graphql::{Context, EmptySubscription, Error, Object, Schema};

use crate::error::{ItemError, Result};
use crate::resolver::Resolver;
use crate::store::Record;

/// Deepest selection nesting accepted in a document
pub const MAX_DEPTH: usize = 32;

/// Message returned to clients in place of a storage error
pub const STORAGE_ERROR_MESSAGE: &str = "Item storage is unavailable";

/// The item schema served by this crate
pub type ItemSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with the resolver set as context data
pub fn build_schema(resolver: Resolver) -> ItemSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(resolver)
        .limit_depth(MAX_DEPTH)
        .finish()
}

// =============================================================================
// Item Type
// =============================================================================

/// One stored record
pub struct Item(pub Record);

#[Object]
impl Item {
    async fn itemindex(&self) -> i64 {
        self.0.index
    }

    async fn itemname(&self) -> &str {
        &self.0.name
    }
}

// =============================================================================
// Root Types
// =============================================================================

/// Read-only root fields
pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    /// Get item by index
    async fn get(&self, ctx: &Context<'_>, itemindex: Option<i64>) -> async_graphql::Result<Option<Item>> {
        let found = run_resolver(ctx, move |resolver| resolver.get(itemindex)).await?;
        Ok(found.map(Item))
    }

    /// Get item list
    async fn list(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Vec<Item>>> {
        let records = run_resolver(ctx, |resolver| resolver.list()).await?;
        Ok(Some(records.into_iter().map(Item).collect()))
    }
}

/// Mutating root fields; executed serially in document order
pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    /// Create new item
    async fn create(
        &self,
        ctx: &Context<'_>,
        itemindex: i64,
        itemname: String,
    ) -> async_graphql::Result<Option<Item>> {
        let record = run_resolver(ctx, move |resolver| resolver.create(itemindex, itemname)).await?;
        Ok(Some(Item(record)))
    }

    /// Update item by index
    async fn update(
        &self,
        ctx: &Context<'_>,
        itemindex: i64,
        itemname: Option<String>,
    ) -> async_graphql::Result<Option<Item>> {
        let record = run_resolver(ctx, move |resolver| resolver.update(itemindex, itemname)).await?;
        Ok(Some(Item(record)))
    }

    /// Delete item by index
    async fn delete(&self, ctx: &Context<'_>, itemindex: i64) -> async_graphql::Result<Option<Item>> {
        let record = run_resolver(ctx, move |resolver| resolver.delete(itemindex)).await?;
        Ok(Some(Item(record)))
    }
}

// =============================================================================
// Resolver Bridge
// =============================================================================

/// Run a resolver on the blocking pool; it does whole-file I/O
async fn run_resolver<T, F>(ctx: &Context<'_>, op: F) -> async_graphql::Result<T>
where
    T: Send + 'static,
    F: FnOnce(&Resolver) -> Result<T> + Send + 'static,
{
    let resolver = ctx.data::<Resolver>()?.clone();

    match tokio::task::spawn_blocking(move || op(&resolver)).await {
        Ok(result) => result.map_err(field_error),
        Err(e) => {
            tracing::error!("Resolver task failed: {}", e);
            Err(Error::new("Internal server error"))
        }
    }
}

/// Convert a resolver error into a field error
///
/// Storage errors are logged with their detail and reach the client as
/// [`STORAGE_ERROR_MESSAGE`]; the `ItemError` stays attached as the source.
fn field_error(err: ItemError) -> Error {
    if err.is_storage() {
        tracing::error!("Storage failure: {}", err);
        let mut error = Error::new_with_source(err);
        error.message = STORAGE_ERROR_MESSAGE.to_string();
        error
    } else {
        Error::new(err.to_string())
    }
}
