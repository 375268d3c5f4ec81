use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Pi's own override for its data directory; sessions live in its `sessions/` subdirectory
pub const AGENT_DIR_ENV: &str = "PI_CODING_AGENT_DIR";

/// Sessions directory derived from `PI_CODING_AGENT_DIR`, if set and non-empty
pub fn sessions_dir_from_env() -> Option<PathBuf> {
    sessions_dir_from_agent_dir(env::var_os(AGENT_DIR_ENV))
}

fn sessions_dir_from_agent_dir(agent_dir: Option<OsString>) -> Option<PathBuf> {
    agent_dir.filter(|dir| !dir.is_empty()).map(|dir| PathBuf::from(dir).join("sessions"))
}

/// Get Pi's default sessions directory (~/.pi/agent/sessions)
pub fn default_sessions_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not find home directory")?;
    Ok(home.join(".pi").join("agent").join("sessions"))
}
