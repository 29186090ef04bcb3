//! # Motif Tools Common Library
//!
//! Shared code for the motif save service and the track manifest generator:
//! - Error type
//! - Project root resolution and TOML configuration
//! - Project directory layout (fixed output/input locations)
//! - Pretty JSON file writing
//! - Tracing subscriber setup

pub mod config;
pub mod error;
pub mod json_file;
pub mod logging;
pub mod paths;

pub use error::{Error, Result};
pub use paths::ProjectLayout;
