use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::ClerkError;

const CONFIG_DIR_NAME: &str = "cisco-clerk";
const CONFIG_FILE_NAME: &str = "config.yaml";

/// User settings, read from `config.yaml`.
///
/// ```yaml
/// default_format: csv
/// output_dir: /srv/inventory
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClerkConfig {
    /// Format used when `--format` is not given
    pub default_format: String,
    /// Where `export` writes when `--output-dir` is not given
    pub output_dir: Option<PathBuf>,
}

impl Default for ClerkConfig {
    fn default() -> Self {
        Self {
            default_format: "table".to_string(),
            output_dir: None,
        }
    }
}

impl ClerkConfig {
    /// Loads `explicit` if given, else the per-user config file if it
    /// exists, else the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ClerkError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match default_config_path() {
                Some(path) if path.is_file() => Self::from_file(&path),
                _ => {
                    debug!("no config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ClerkError> {
        let content = fs::read_to_string(path).map_err(|source| ClerkError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&content).map_err(|source| ClerkError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty file deserializes to unit, not to an empty mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// `--output-dir`, else the configured directory, else the working directory.
    pub fn export_dir(&self, cli_dir: Option<&Path>) -> PathBuf {
        cli_dir
            .map(Path::to_path_buf)
            .or_else(|| self.output_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// `~/.config/cisco-clerk/config.yaml` on Linux.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
