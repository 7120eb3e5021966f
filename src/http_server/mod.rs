//! # Recipe HTTP Server Module
//!
//! Axum server exposing the recipe store over HTTP with JSON bodies.
//!
//! # Endpoints
//!
//! - `GET /health` - Liveness check (no store dependency)
//! - `GET /recipes` - List every stored recipe
//! - `POST /recipes` - Create a recipe (the server assigns the id)
//! - `DELETE /recipes/{id}` - Delete by id (idempotent)

pub mod config;
pub mod recipe_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use recipe_routes::{MessageResponse, RecipeState};
pub use server::HttpServer;
