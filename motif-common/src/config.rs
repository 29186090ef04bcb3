//! Configuration loading and project root resolution
//!
//! Both binaries resolve the web application's project root the same way:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable `MOTIF_PROJECT_ROOT`
//! 3. `project_root` in the TOML config file
//! 4. Current working directory (fallback)
//!
//! A missing TOML file is never fatal: a warning is logged and compiled
//! defaults are used.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Environment variable overriding the project root
pub const PROJECT_ROOT_ENV: &str = "MOTIF_PROJECT_ROOT";

/// Directory name under the user config dir holding `config.toml`
const CONFIG_DIR_NAME: &str = "motif-tools";

/// Bootstrap configuration loaded from TOML file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    /// Web application project root (contains `static/` and `src/`)
    #[serde(default)]
    pub project_root: Option<PathBuf>,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// HTTP settings for the motif save service
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Largest accepted request body in bytes
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5173
}

fn default_max_body_bytes() -> usize {
    16 * 1024 * 1024
}

impl TomlConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load configuration from an explicit file
    ///
    /// Unlike [`TomlConfig::load`], a missing file is an error here: the
    /// caller asked for this file specifically.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::NotFound(format!("config file {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;
        Self::from_toml_str(&content)
    }

    /// Load configuration, falling back to defaults when no file exists
    ///
    /// `explicit` takes precedence over the per-user default location.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            info!("Loading config from {}", path.display());
            return Self::from_file(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => {
                info!("Loading config from {}", path.display());
                Self::from_file(&path)
            }
            Some(path) => {
                warn!(
                    "Config file not found at {}, using defaults",
                    path.display()
                );
                Ok(Self::default())
            }
            None => {
                warn!("Could not determine config directory, using defaults");
                Ok(Self::default())
            }
        }
    }
}

/// Per-user config file location (`~/.config/motif-tools/config.toml` on Linux)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME).join("config.toml"))
}

/// Resolves the project root following the documented priority order
#[derive(Debug, Clone)]
pub struct ProjectRootResolver {
    module_name: String,
    cli_arg: Option<PathBuf>,
    config_root: Option<PathBuf>,
}

impl ProjectRootResolver {
    pub fn new(module_name: &str) -> Self {
        Self {
            module_name: module_name.to_string(),
            cli_arg: None,
            config_root: None,
        }
    }

    /// Set the command-line override (priority 1)
    pub fn with_cli_arg(mut self, cli_arg: Option<PathBuf>) -> Self {
        self.cli_arg = cli_arg;
        self
    }

    /// Take `project_root` from a loaded config (priority 3)
    pub fn with_config(mut self, config: &TomlConfig) -> Self {
        self.config_root = config.project_root.clone();
        self
    }

    pub fn resolve(&self) -> PathBuf {
        if let Some(path) = &self.cli_arg {
            debug!("{}: project root from command line", self.module_name);
            return path.clone();
        }

        if let Ok(path) = std::env::var(PROJECT_ROOT_ENV) {
            if !path.is_empty() {
                debug!("{}: project root from {}", self.module_name, PROJECT_ROOT_ENV);
                return PathBuf::from(path);
            }
        }

        if let Some(path) = &self.config_root {
            debug!("{}: project root from config file", self.module_name);
            return path.clone();
        }

        debug!("{}: project root defaults to working directory", self.module_name);
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
    }
}
