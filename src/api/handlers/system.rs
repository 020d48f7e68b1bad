use axum::{extract::State, http::StatusCode, Json};
use tracing::warn;

use crate::api::{state::AppState, types::HealthResponse};

/// GET /health -- liveness probe, never touches the store
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        uptime_seconds: state.uptime_seconds(),
        store: None,
    })
}

/// GET /health/ready -- readiness probe backed by a store round trip
pub async fn readiness_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let (code, status) = match state.store.ping().await {
        Ok(()) => (StatusCode::OK, "ok"),
        Err(e) => {
            warn!("Readiness check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "degraded")
        }
    };

    (
        code,
        Json(HealthResponse {
            status: status.to_string(),
            uptime_seconds: state.uptime_seconds(),
            store: Some(state.store_kind.to_string()),
        }),
    )
}
