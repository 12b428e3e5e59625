//! Change calculation routes.

use std::collections::BTreeMap;
use std::str::FromStr;

use axum::extract::{Multipart, State};
use axum::routing::post;
use axum::{Json, Router};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::AppState;
use crate::error::ApiError;
use cashtill_core::change::{self, ChangeRequest, Coin, PolicyConfig};
use cashtill_shared::AppError;

/// Creates the change calculation routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/change", post(calculate_change))
        .route("/change/batch", post(calculate_batch))
        .route("/change/file", post(calculate_file))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for a change calculation.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateChangeRequest {
    /// Amount the customer owes.
    pub amount_owed: Decimal,
    /// Amount the customer paid.
    pub amount_paid: Decimal,
}

/// Response body for a change calculation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateChangeResponse {
    /// Echo of the amount owed.
    pub amount_owed: Decimal,
    /// Echo of the amount paid.
    pub amount_paid: Decimal,
    /// Total change due.
    pub change: Decimal,
    /// Denomination counts, descending by value, zero counts omitted.
    pub denominations: BTreeMap<Coin, u64>,
    /// Human-readable breakdown.
    pub formatted_change: String,
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Runs one calculation against a configuration snapshot.
fn run_calculation(
    request: CalculateChangeRequest,
    config: &PolicyConfig,
) -> Result<CalculateChangeResponse, ApiError> {
    let core_request = ChangeRequest::new(request.amount_owed, request.amount_paid);
    let mut rng = StdRng::from_os_rng();
    let result = change::calculate(&core_request, config, &mut rng)?;

    Ok(CalculateChangeResponse {
        amount_owed: request.amount_owed,
        amount_paid: request.amount_paid,
        change: result.total,
        formatted_change: change::format_result(&result),
        denominations: result.denominations,
    })
}

/// Processes requests in order, stopping at the first error.
///
/// Each iteration snapshots the current configuration, so a concurrent
/// config update never produces a torn read.
async fn process_sequence(
    state: &AppState,
    requests: Vec<CalculateChangeRequest>,
) -> Result<Vec<CalculateChangeResponse>, ApiError> {
    let mut responses = Vec::with_capacity(requests.len());

    for request in requests {
        let config = state.config.read().await.clone();
        responses.push(run_calculation(request, &config)?);
    }

    Ok(responses)
}

/// Parses newline-delimited `amountOwed,amountPaid` lines.
///
/// Blank lines are skipped. A line without exactly two fields, or with a
/// field that does not parse as a decimal amount, fails the whole upload.
fn parse_amount_lines(content: &str) -> Result<Vec<CalculateChangeRequest>, ApiError> {
    let mut requests = Vec::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut fields = line.split(',');
        let (Some(owed), Some(paid), None) = (fields.next(), fields.next(), fields.next()) else {
            return Err(AppError::MalformedInput(format!("invalid line format: {line}")).into());
        };

        requests.push(CalculateChangeRequest {
            amount_owed: parse_amount(owed, "amount owed")?,
            amount_paid: parse_amount(paid, "amount paid")?,
        });
    }

    Ok(requests)
}

fn parse_amount(field: &str, label: &str) -> Result<Decimal, ApiError> {
    let field = field.trim();
    Decimal::from_str(field)
        .map_err(|_| ApiError(AppError::MalformedInput(format!("invalid {label}: {field}"))))
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST `/change` - Calculates change for a single request.
async fn calculate_change(
    State(state): State<AppState>,
    Json(request): Json<CalculateChangeRequest>,
) -> Result<Json<CalculateChangeResponse>, ApiError> {
    let config = state.config.read().await.clone();
    Ok(Json(run_calculation(request, &config)?))
}

/// POST `/change/batch` - Calculates change for an ordered batch.
///
/// All-or-nothing: the first invalid entry aborts the whole batch.
async fn calculate_batch(
    State(state): State<AppState>,
    Json(requests): Json<Vec<CalculateChangeRequest>>,
) -> Result<Json<Vec<CalculateChangeResponse>>, ApiError> {
    Ok(Json(process_sequence(&state, requests).await?))
}

/// POST `/change/file` - Calculates change for an uploaded CSV file.
///
/// Expects a multipart `file` field holding newline-delimited
/// `amountOwed,amountPaid` lines. All-or-nothing like the batch endpoint.
async fn calculate_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Vec<CalculateChangeResponse>>, ApiError> {
    let mut content = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError(AppError::MalformedInput(format!("failed to read upload: {e}"))))?
    {
        if field.name() == Some("file") {
            content = Some(field.text().await.map_err(|e| {
                ApiError(AppError::MalformedInput(format!(
                    "failed to read file content: {e}"
                )))
            })?);
            break;
        }
    }

    let content = content
        .ok_or_else(|| ApiError(AppError::MalformedInput("missing file field".to_string())))?;

    let requests = parse_amount_lines(&content)?;
    debug!(entries = requests.len(), "processing uploaded amounts");

    Ok(Json(process_sequence(&state, requests).await?))
}
