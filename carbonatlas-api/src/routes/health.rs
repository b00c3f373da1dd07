/// Health check endpoint

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::app::AppState;

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// "ok" when the server and its database are reachable, "degraded"
    /// when the database check fails
    pub status: String,

    /// Server version
    pub version: String,

    /// Whether the database responded to a ping
    pub database: bool,
}

/// GET /health
///
/// Always returns 200; a failing database check is reported in the body
/// so load balancers can keep routing while operators investigate.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = carbonatlas_shared::db::pool::health_check(&state.db)
        .await
        .is_ok();

    let status = if database { "ok" } else { "degraded" };

    Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database,
    })
}
