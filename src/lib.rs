//! recipeshare - A recipe sharing API backed by DynamoDB
//!
//! Stores, lists, and deletes recipe records (title, ordered ingredients,
//! ordered steps) in a key-value table, exposed over HTTP with JSON bodies.

pub mod http_server;
pub mod model;
pub mod store;

pub use http_server::{HttpServer, HttpServerConfig};
pub use model::{Ingredient, NewRecipe, Recipe, Step};
pub use store::{DynamoStore, MemoryStore, RecipeStore, StoreError, StoreResult};
