//! SMS registration service - entry point.

use sms_registration_api::{
    api::{create_router, AppState},
    config::Config,
    store::UserStore,
};
use std::net::SocketAddr;
use telnyx_client::TelnyxClient;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    // Load configuration; a missing TELNYX__API_KEY fails here.
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log.level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SMS registration API");

    // Initialize the Telnyx event client
    let telnyx = match TelnyxClient::new(config.telnyx.api_key.clone()) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to create Telnyx client: {}", e);
            std::process::exit(1);
        }
    };

    // Open the user store, creating the database file and schema if absent
    let store = match UserStore::connect(&config.database.url).await {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to open user store: {}", e);
            std::process::exit(1);
        }
    };

    // Create application state and router
    let state = AppState::new(store, telnyx);
    let app = create_router(state);

    let addr = SocketAddr::new(
        config.server.listen_addr.parse().unwrap_or([0, 0, 0, 0].into()),
        config.server.port,
    );

    info!("Listening on {}", addr);

    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    // Run server
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}
