//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes
//! - Shared application state (the policy configuration cell)
//! - Error-to-response mapping

pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::http::{Method, header};
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use cashtill_core::change::PolicyConfig;

/// Application state shared across handlers.
#[derive(Clone, Default)]
pub struct AppState {
    /// Policy configuration cell. Calculations snapshot it under a read
    /// lock; the config endpoint replaces it wholesale under the write lock.
    pub config: Arc<RwLock<PolicyConfig>>,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::routes())
        .nest("/api", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .with_state(state)
}
