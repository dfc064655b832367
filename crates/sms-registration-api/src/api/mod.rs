//! HTTP API for the registration service.

mod handlers;
mod types;

pub use handlers::*;
pub use types::*;

use crate::store::UserStore;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use telnyx_client::TelnyxClient;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// SQLite-backed user store
    pub store: UserStore,
    /// Telnyx event client
    pub telnyx: Arc<TelnyxClient>,
}

impl AppState {
    /// Create new application state.
    pub fn new(store: UserStore, telnyx: TelnyxClient) -> Self {
        Self {
            store,
            telnyx: Arc::new(telnyx),
        }
    }
}

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health))
        .route("/users", post(handlers::register_user))
        .route("/webhooks/telnyx", post(handlers::telnyx_webhook))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &axum::http::Request<_>| {
                    let method = req.method().clone();
                    let uri = req.uri().clone();
                    tracing::info_span!("http_request", %method, uri = %uri)
                })
                .on_response(
                    |res: &axum::http::Response<_>,
                     _latency: std::time::Duration,
                     _span: &tracing::Span| {
                        let status = res.status();
                        if status.is_server_error() {
                            tracing::error!(%status, "response");
                        } else {
                            tracing::debug!(%status, "response");
                        }
                    },
                ),
        )
        .with_state(state)
}
