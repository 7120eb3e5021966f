//! Recipe HTTP Routes
//!
//! Endpoints for listing, creating, and deleting recipes, plus the liveness
//! check. Each handler is stateless; all durable state lives in the store.
//!
//! Store failures follow the inherited fail-soft contract: the handler
//! answers `200` with a `{"message": "Error ..."}` body instead of an error
//! status, so callers must inspect the body shape to detect failure. The
//! `strict_errors` flag switches those answers to `500` with the same body.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::model::NewRecipe;
use crate::store::RecipeStore;

// ==================
// Shared State
// ==================

/// Recipe state shared across handlers
pub struct RecipeState {
    pub store: Arc<dyn RecipeStore>,
    pub strict_errors: bool,
}

impl RecipeState {
    pub fn new(store: Arc<dyn RecipeStore>) -> Self {
        Self {
            store,
            strict_errors: false,
        }
    }

    pub fn strict(store: Arc<dyn RecipeStore>) -> Self {
        Self {
            store,
            strict_errors: true,
        }
    }
}

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Inbound create payload. The recipe envelope's own `id` field, if a client
/// sends one, is dropped by deserialization; the server always mints its own.
pub type CreateRecipeRequest = NewRecipe;

// ==================
// Recipe Routes
// ==================

/// Create recipe routes
pub fn recipe_routes(state: Arc<RecipeState>) -> Router {
    Router::new()
        .route(
            "/recipes",
            get(list_recipes_handler).post(create_recipe_handler),
        )
        .route("/recipes/:id", delete(delete_recipe_handler))
        .with_state(state)
}

/// Liveness route; answers without touching the store.
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

// ==================
// Handlers
// ==================

async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(MessageResponse {
            message: "Service is healthy".to_string(),
        }),
    )
}

async fn list_recipes_handler(State(state): State<Arc<RecipeState>>) -> Response {
    match state.store.list_all().await {
        Ok(recipes) => (StatusCode::OK, Json(recipes)).into_response(),
        Err(e) => fail_soft(&state, format!("Error retrieving recipes: {e}")),
    }
}

async fn create_recipe_handler(
    State(state): State<Arc<RecipeState>>,
    Json(request): Json<CreateRecipeRequest>,
) -> Response {
    match state.store.create(request).await {
        Ok(recipe) => {
            tracing::info!(id = %recipe.id, title = %recipe.title, "recipe created");
            message_ok("Recipe created successfully".to_string())
        }
        Err(e) => fail_soft(&state, format!("Error creating recipe: {e}")),
    }
}

async fn delete_recipe_handler(
    State(state): State<Arc<RecipeState>>,
    Path(id): Path<String>,
) -> Response {
    match state.store.delete_by_id(&id).await {
        // Deleting an absent id reports success too; the store's delete is
        // idempotent and the two outcomes are not distinguished.
        Ok(()) => {
            tracing::info!(id = %id, "recipe deleted");
            message_ok(format!("Recipe {id} deleted successfully"))
        }
        Err(e) => fail_soft(&state, format!("Error deleting recipe: {e}")),
    }
}

fn message_ok(message: String) -> Response {
    (StatusCode::OK, Json(MessageResponse { message })).into_response()
}

fn fail_soft(state: &RecipeState, message: String) -> Response {
    tracing::error!("{message}");
    let status = if state.strict_errors {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        StatusCode::OK
    };
    (status, Json(MessageResponse { message })).into_response()
}
