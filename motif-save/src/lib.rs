//! motif-save library - persists motif JSON posted by the web front end
//!
//! `POST /api/save-motifs` overwrites `static/data/motifs.json` with the
//! pretty-printed request body. No schema is enforced and no lock guards the
//! file: concurrent saves race and the last completed write wins.

use axum::extract::DefaultBodyLimit;
use axum::Router;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod api;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// File overwritten by every successful save
    pub motifs_path: Arc<PathBuf>,
    /// Largest accepted request body in bytes
    pub max_body_bytes: usize,
}

impl AppState {
    pub fn new(motifs_path: PathBuf, max_body_bytes: usize) -> Self {
        Self {
            motifs_path: Arc::new(motifs_path),
            max_body_bytes,
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    let body_limit = state.max_body_bytes;

    Router::new()
        .route("/api/save-motifs", post(api::save_motifs))
        .route("/build_info", get(api::get_build_info))
        .merge(api::health_routes())
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        // Front end dev server runs on its own origin
        .layer(CorsLayer::permissive())
}
