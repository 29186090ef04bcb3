//! Build identification, stamped by `build.rs`

use axum::response::Json;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct BuildInfo {
    pub version: &'static str,
    pub git_hash: &'static str,
    pub built_at: &'static str,
    pub profile: &'static str,
}

pub const BUILD_INFO: BuildInfo = BuildInfo {
    version: env!("CARGO_PKG_VERSION"),
    git_hash: env!("GIT_HASH"),
    built_at: env!("BUILD_TIMESTAMP"),
    profile: env!("BUILD_PROFILE"),
};

impl BuildInfo {
    /// One-line identification for the startup log
    pub fn banner(&self) -> String {
        format!(
            "motif-save v{} [{}] built {} ({})",
            self.version, self.git_hash, self.built_at, self.profile
        )
    }
}

/// GET /build_info
pub async fn get_build_info() -> Json<BuildInfo> {
    Json(BUILD_INFO)
}
