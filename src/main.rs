//! Recipe API entry point
//!
//! Bootstrap only: initialize logging, resolve AWS configuration through the
//! default provider chain, construct the DynamoDB store adapter, and hand it
//! to the HTTP server. All request handling lives in the library.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use recipeshare::{DynamoStore, HttpServer, HttpServerConfig};

const DEFAULT_TABLE: &str = "recipes";

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("recipeshare=info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().compact())
        .init();

    let table =
        std::env::var("RECIPESHARE_TABLE").unwrap_or_else(|_| DEFAULT_TABLE.to_string());

    // Region and credentials come from the environment, shared config files,
    // or instance metadata; nothing is validated here.
    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let client = aws_sdk_dynamodb::Client::new(&aws_config);
    let store = Arc::new(DynamoStore::new(client, table));

    tracing::info!(table = store.table(), "recipe store ready");

    let server = HttpServer::with_config(HttpServerConfig::from_env(), store);
    server.start().await
}
