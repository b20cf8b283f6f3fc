//! Config file loading for the terminal binary.
//!
//! The game variant lives in a TOML file. A missing file is created with the
//! defaults so players have something to edit.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::core::{ConfigError, GameConfig};

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV_VAR: &str = "BLOCKFALL_CONFIG";

// Used when the platform has no config directory
const FALLBACK_CONFIG_PATH: &str = "config/blockfall.toml";

#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    Parse(toml::de::Error),
    Serialize(toml::ser::Error),
    Invalid(ConfigError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "config file I/O failed: {e}"),
            LoadError::Parse(e) => write!(f, "config file is not valid TOML: {e}"),
            LoadError::Serialize(e) => write!(f, "could not serialize config: {e}"),
            LoadError::Invalid(e) => write!(f, "invalid config: {e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Parse(e) => Some(e),
            LoadError::Serialize(e) => Some(e),
            LoadError::Invalid(e) => Some(e),
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        LoadError::Io(err)
    }
}

impl From<toml::de::Error> for LoadError {
    fn from(err: toml::de::Error) -> Self {
        LoadError::Parse(err)
    }
}

impl From<toml::ser::Error> for LoadError {
    fn from(err: toml::ser::Error) -> Self {
        LoadError::Serialize(err)
    }
}

impl From<ConfigError> for LoadError {
    fn from(err: ConfigError) -> Self {
        LoadError::Invalid(err)
    }
}

/// Where the config file lives.
///
/// `$BLOCKFALL_CONFIG` wins, then the platform config directory, then a path
/// relative to the working directory.
pub fn config_file_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        return PathBuf::from(path);
    }

    match dirs::config_dir() {
        Some(dir) => dir.join("blockfall").join("config.toml"),
        None => PathBuf::from(FALLBACK_CONFIG_PATH),
    }
}

/// Load the config from [`config_file_path`].
pub fn load_config() -> Result<GameConfig, LoadError> {
    load_config_from_path(&config_file_path())
}

/// Parse and validate the config at `path`, writing defaults if it is missing.
pub fn load_config_from_path(path: &Path) -> Result<GameConfig, LoadError> {
    if !path.exists() {
        let config = GameConfig::default();
        save_config_to_path(path, &config)?;
        info!("wrote default config to {}", path.display());
        return Ok(config);
    }

    let contents = fs::read_to_string(path)?;
    let config: GameConfig = toml::from_str(&contents)?;
    config.validate()?;
    debug!(
        "loaded {}x{} config with {} shapes from {}",
        config.rows,
        config.cols,
        config.shapes.len(),
        path.display()
    );
    Ok(config)
}

/// Write `config` as pretty TOML, creating parent directories.
pub fn save_config_to_path(path: &Path, config: &GameConfig) -> Result<(), LoadError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let toml_string = toml::to_string_pretty(config)?;
    fs::write(path, toml_string)?;
    Ok(())
}
