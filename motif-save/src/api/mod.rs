//! HTTP API handlers for motif-save

pub mod buildinfo;
pub mod health;
pub mod motifs;

pub use buildinfo::get_build_info;
pub use health::health_routes;
pub use motifs::{save_motifs, SaveError, SaveResponse};
