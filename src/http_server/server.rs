//! # HTTP Server
//!
//! Router assembly and startup for the recipe API.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::Method;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::config::HttpServerConfig;
use super::recipe_routes::{health_routes, recipe_routes, RecipeState};
use crate::store::RecipeStore;

/// HTTP server for the recipe API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new server over the given store with default configuration
    pub fn new(store: Arc<dyn RecipeStore>) -> Self {
        Self::with_config(HttpServerConfig::default(), store)
    }

    /// Create a new server with custom configuration
    pub fn with_config(config: HttpServerConfig, store: Arc<dyn RecipeStore>) -> Self {
        let router = Self::build_router(&config, store);
        Self { config, router }
    }

    /// Build the router with all endpoints
    fn build_router(config: &HttpServerConfig, store: Arc<dyn RecipeStore>) -> Router {
        let state = Arc::new(RecipeState {
            store,
            strict_errors: config.strict_errors,
        });

        let cors = if config.cors_origins.is_empty() {
            // No origins configured: permissive, for non-production use.
            // The wildcard origin cannot carry credentials.
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods([Method::GET, Method::POST, Method::DELETE])
                .allow_headers(AllowHeaders::mirror_request())
                .allow_credentials(true)
        };

        Router::new()
            .merge(health_routes())
            .merge(recipe_routes(state))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

        tracing::info!("Starting recipe API server on {addr}");
        tracing::info!("Health check: http://{addr}/health");

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}
