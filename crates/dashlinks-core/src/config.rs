use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::hostname::{DEFAULT_DOMAIN, DEFAULT_HOSTNAME_ENV};

/// Global configuration loaded from `~/.config/dashlinks/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashlinksConfig {
    /// Domain used when the current hostname has no suffix after its first label.
    #[serde(default = "default_domain")]
    pub default_domain: String,
    /// Hostname used when none is given on the command line or in the environment.
    #[serde(default)]
    pub hostname: Option<String>,
    /// Environment variable consulted for the current hostname.
    #[serde(default = "default_hostname_env")]
    pub hostname_env: String,
}

fn default_domain() -> String {
    DEFAULT_DOMAIN.to_string()
}

fn default_hostname_env() -> String {
    DEFAULT_HOSTNAME_ENV.to_string()
}

impl Default for DashlinksConfig {
    fn default() -> Self {
        Self {
            default_domain: default_domain(),
            hostname: None,
            hostname_env: default_hostname_env(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("dashlinks")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<DashlinksConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = DashlinksConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path. The file must exist.
pub fn load_from(path: &Path) -> Result<DashlinksConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: DashlinksConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
