//! Motif save endpoint
//!
//! The request body is taken as raw bytes rather than through `Json<_>` so
//! that a missing content type, a malformed document or an oversized body all
//! come back in the same `{success, error}` shape as a failed write.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::{error, info};

use crate::AppState;

/// Body of a successful save
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub success: bool,
}

/// Failures while saving motifs; every variant maps to HTTP 500
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("Failed to read request body: {0}")]
    Body(String),

    #[error("Invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to write motifs: {0}")]
    Write(#[from] motif_common::Error),
}

impl From<BytesRejection> for SaveError {
    fn from(rejection: BytesRejection) -> Self {
        SaveError::Body(rejection.body_text())
    }
}

impl IntoResponse for SaveError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "success": false,
            "error": self.to_string(),
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

/// POST /api/save-motifs
///
/// Any valid JSON value is accepted and written verbatim (object key order
/// preserved) with two-space indentation.
pub async fn save_motifs(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<SaveResponse>, SaveError> {
    match persist(&state, body).await {
        Ok(()) => {
            info!("Saved motifs to {}", state.motifs_path.display());
            Ok(Json(SaveResponse { success: true }))
        }
        Err(e) => {
            error!("Saving motifs to {} failed: {}", state.motifs_path.display(), e);
            Err(e)
        }
    }
}

async fn persist(state: &AppState, body: Result<Bytes, BytesRejection>) -> Result<(), SaveError> {
    let bytes = body?;
    let motifs: Value = serde_json::from_slice(&bytes)?;
    motif_common::json_file::write_pretty_json_async(&state.motifs_path, &motifs).await?;
    Ok(())
}
