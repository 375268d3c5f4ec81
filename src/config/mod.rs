//! Optional user configuration
//!
//! Read from `$PI_FZF_CONFIG`, or `<config dir>/pi-fzf/config.toml` when that is unset.
//! Every field is optional and a missing default file simply means defaults:
//!
//! ```toml
//! sessions_dir = "/Users/alice/.pi/agent/sessions"
//! timestamp_formats = ["rfc3339", "%Y-%m-%dT%H:%M:%S%.3fZ"]
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::utils::{TimestampFormat, default_sessions_dir, sessions_dir_from_env};

/// Explicit config file location
pub const CONFIG_ENV: &str = "PI_FZF_CONFIG";

const CONFIG_DIR_NAME: &str = "pi-fzf";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Root scanned for session logs
    pub sessions_dir: Option<PathBuf>,
    /// Header timestamp formats tried in order: `"rfc3339"` or strftime patterns
    pub timestamp_formats: Vec<String>,
}

impl Config {
    /// Load from `$PI_FZF_CONFIG` or the platform config directory
    ///
    /// # Errors
    ///
    /// Returns an error if `$PI_FZF_CONFIG` names a file that can't be read, or if the
    /// config file is not valid TOML for [`Config`].
    pub fn load() -> Result<Self> {
        if let Some(path) = env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
            return Self::load_from(Path::new(&path));
        }

        match dirs::config_dir() {
            Some(dir) => {
                let path = dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME);
                if path.exists() {
                    Self::load_from(&path)
                } else {
                    debug!(path = %path.display(), "no config file, using defaults");
                    Ok(Self::default())
                }
            }
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Configured timestamp formats, or the built-in list when none are configured
    pub fn timestamp_formats(&self) -> Vec<TimestampFormat> {
        if self.timestamp_formats.is_empty() {
            TimestampFormat::defaults()
        } else {
            self.timestamp_formats.iter().map(|f| TimestampFormat::from_config(f)).collect()
        }
    }

    /// Sessions root: CLI flag, then `$PI_CODING_AGENT_DIR/sessions`, then the config
    /// file, then `~/.pi/agent/sessions`
    pub fn resolve_sessions_dir(&self, flag: Option<&Path>) -> Result<PathBuf> {
        if let Some(dir) = flag {
            return Ok(dir.to_path_buf());
        }
        if let Some(dir) = sessions_dir_from_env() {
            return Ok(dir);
        }
        if let Some(dir) = &self.sessions_dir {
            return Ok(dir.clone());
        }
        default_sessions_dir()
    }
}
