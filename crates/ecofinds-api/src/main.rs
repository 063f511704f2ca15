//! EcoFinds API server entry point.

use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use ecofinds_api::{routes, state};
use ecofinds_checkout::processor::SimulatedOrderProcessor;
use ecofinds_core::clock::SystemClock;
use ecofinds_store::FileDocumentStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting EcoFinds API server");

    // Read configuration from environment.
    let data_dir = std::env::var("DATA_DIR").unwrap_or_else(|_| "./data".to_string());
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .map_err(|e| format!("PORT must be a valid u16: {e}"))?;
    let checkout_delay_ms: u64 = std::env::var("CHECKOUT_DELAY_MS")
        .unwrap_or_else(|_| "2000".to_string())
        .parse()
        .map_err(|e| format!("CHECKOUT_DELAY_MS must be a valid u64: {e}"))?;

    // Build application state.
    let store = FileDocumentStore::new(&data_dir)?;
    let app_state = state::AppState::new(
        Arc::new(SystemClock),
        Arc::new(store),
        Arc::new(SimulatedOrderProcessor::new(Duration::from_millis(
            checkout_delay_ms,
        ))),
    );

    // Build router.
    // TODO: Replace CorsLayer::permissive() with restricted origins for production.
    let app = Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/cart", routes::cart::router())
        .nest("/api/v1", routes::checkout::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server.
    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .map_err(|e| format!("invalid HOST:PORT combination: {e}"))?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
