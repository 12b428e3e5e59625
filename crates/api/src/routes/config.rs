//! Policy configuration endpoints.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::AppState;
use cashtill_core::change::PolicyConfig;

/// Creates the configuration routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/config", get(get_config).post(set_config))
}

/// GET `/config` - Returns the current policy configuration.
async fn get_config(State(state): State<AppState>) -> Json<PolicyConfig> {
    Json(state.config.read().await.clone())
}

/// POST `/config` - Replaces the policy configuration wholesale.
///
/// No per-field merge: the posted document becomes the configuration, with
/// omitted fields taking their defaults.
async fn set_config(
    State(state): State<AppState>,
    Json(new_config): Json<PolicyConfig>,
) -> Json<PolicyConfig> {
    let mut config = state.config.write().await;
    *config = new_config;
    Json(config.clone())
}
