//! Health check endpoint
//!
//! Besides liveness, reports whether the directory holding the motifs file
//! exists. Saves fail with a write error while it is missing, so the service
//! reports `degraded` (still HTTP 200) until the front end's `static/data`
//! directory appears.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when saves cannot currently succeed
    pub status: &'static str,
    pub module: &'static str,
    pub version: &'static str,
    pub motifs_path: String,
    pub data_dir_present: bool,
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let data_dir_present = state
        .motifs_path
        .parent()
        .map(|dir| dir.is_dir())
        .unwrap_or(false);

    Json(HealthResponse {
        status: if data_dir_present { "ok" } else { "degraded" },
        module: "motif-save",
        version: env!("CARGO_PKG_VERSION"),
        motifs_path: state.motifs_path.display().to_string(),
        data_dir_present,
    })
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
