//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod change;
pub mod config;
pub mod health;

/// Creates the `/api` router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(change::routes())
        .merge(config::routes())
}
