//! # Recipe Store Adapter
//!
//! Translates domain operations into key-value store primitives. The
//! production implementation is [`DynamoStore`]; [`MemoryStore`] is a
//! substitute for tests and local development.
//!
//! The adapter is constructed once at startup and handed to the HTTP layer
//! as `Arc<dyn RecipeStore>` — there is no process-wide store handle.

pub mod dynamo;
pub mod errors;
pub mod memory;

use async_trait::async_trait;

use crate::model::{NewRecipe, Recipe};

pub use dynamo::DynamoStore;
pub use errors::{StoreError, StoreResult};
pub use memory::MemoryStore;

/// Domain-level operations against the recipe table.
///
/// All three operations perform I/O against the backing store and suspend
/// for its duration. No retries happen at this layer.
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Full-table scan. Backing stores page their results; implementations
    /// must follow the continuation token until the scan is exhausted and
    /// return the accumulated items in scan order. A single undecodable
    /// item fails the whole call.
    async fn list_all(&self) -> StoreResult<Vec<Recipe>>;

    /// Mint a fresh id, write the recipe unconditionally, and return the
    /// constructed record. No existence check is performed; the id is
    /// freshly generated so collisions are negligible.
    async fn create(&self, new: NewRecipe) -> StoreResult<Recipe>;

    /// Delete by primary key. Idempotent: deleting an absent id succeeds.
    async fn delete_by_id(&self, id: &str) -> StoreResult<()>;
}
