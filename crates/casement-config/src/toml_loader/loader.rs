//! Core TOML config loading: read from path or platform default.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::schema::CasementConfig;
use crate::validation;
use casement_common::ConfigError;
use tracing::{info, warn};

use super::template::default_config_toml;

const APP_DIR: &str = "casement";
const CONFIG_FILE: &str = "config.toml";

/// `<config_dir>/casement/config.toml` for the current platform.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
        .ok_or_else(|| ConfigError::ParseError("no platform config directory".into()))
}

/// Write the commented template to `path` unless a file is already there.
///
/// Returns `true` when the template was written. An existing file is left
/// untouched, even if it does not parse.
pub fn create_default_config(path: &Path) -> Result<bool, ConfigError> {
    let write_err = |e: std::io::Error| {
        ConfigError::ParseError(format!("cannot write {}: {e}", path.display()))
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(false),
        Err(e) => return Err(write_err(e)),
    };
    file.write_all(default_config_toml().as_bytes())
        .map_err(write_err)?;

    info!(path = %path.display(), "wrote default config");
    Ok(true)
}

/// Load config from a specific TOML file path.
///
/// Missing fields take serde defaults. If validation fails, a warning is
/// logged and the parsed config is returned as-is.
pub fn load_from_path(path: &Path) -> Result<CasementConfig, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: CasementConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On Linux: `~/.config/casement/config.toml`
///
/// A missing file is created from the template and defaults are returned.
pub fn load_default() -> Result<CasementConfig, ConfigError> {
    let path = default_config_path()?;

    if create_default_config(&path)? {
        return Ok(CasementConfig::default());
    }

    load_from_path(&path)
}
