//! Liveness plus store reachability, outside `/api/v1`

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::http::server::AppState;

/// Body of `GET /health`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub store: &'static str,
    pub version: &'static str,
}

/// GET /health
///
/// 200 when the store answers a ping, 503 when it does not.
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (code, status, store) = match state.store().ping().await {
        Ok(()) => (StatusCode::OK, "ok", "reachable"),
        Err(e) => {
            tracing::warn!(error = %e, "Health check: store unreachable");
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", "unreachable")
        }
    };

    (
        code,
        Json(HealthResponse {
            status,
            store,
            version: env!("CARGO_PKG_VERSION"),
        }),
    )
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
