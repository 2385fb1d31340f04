use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub groups: usize,
    pub checked_at: String,
}

/// Liveness probe. Unauthenticated so load balancers can reach it.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        groups: state.catalog.len(),
        checked_at: Utc::now().to_rfc3339(),
    })
}
