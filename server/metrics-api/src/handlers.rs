//! HTTP handlers for the metrics API.

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use engagement_engine::{compute_metrics, UserMetrics};

use crate::state::AppState;

/// Response envelope for `/api/metrics`. Array order is rank order.
#[derive(Serialize)]
pub struct MetricsResponse {
  pub data: Vec<UserMetrics>,
}

pub async fn health() -> &'static str {
  "ok"
}

/// GET /api/metrics — recompute the full ranked batch from the dataset.
pub async fn metrics(State(state): State<Arc<AppState>>) -> Json<MetricsResponse> {
  let data = compute_metrics(&state.dataset);
  tracing::debug!(rows = data.len(), "computed metrics batch");
  Json(MetricsResponse { data })
}
