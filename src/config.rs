// File: ./src/config.rs
// Handles configuration loading and defaults.
use crate::context::AppContext;
use crate::store::DEFAULT_EXPORT_ROOT;
use anyhow::Result;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

fn default_export_root() -> PathBuf {
    PathBuf::from(DEFAULT_EXPORT_ROOT)
}
fn default_bind() -> String {
    "127.0.0.1:5173".to_string()
}
fn default_server_url() -> String {
    "http://127.0.0.1:5173".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Directory holding one subdirectory per run.
    #[serde(default = "default_export_root")]
    pub export_root: PathBuf,
    /// Listen address of `schedview-serve`.
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Where the viewer finds `schedview-serve`.
    #[serde(default = "default_server_url")]
    pub server_url: String,
    #[serde(default)]
    pub static_dir: Option<PathBuf>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export_root: default_export_root(),
            bind: default_bind(),
            server_url: default_server_url(),
            static_dir: None,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load the configuration from disk using an explicit context.
    ///
    /// A missing file is not an error: the defaults apply. Unreadable or
    /// malformed files are.
    pub fn load(ctx: &dyn AppContext) -> Result<Self> {
        let path = ctx.get_config_file_path()?;
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
        })?;

        Self::from_toml(&contents).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e)
        })
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.bind
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid bind address '{}': {}", self.bind, e))
    }

    pub fn level_filter(&self) -> Result<LevelFilter> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| anyhow::anyhow!("Invalid log level '{}'", self.log_level))
    }
}
