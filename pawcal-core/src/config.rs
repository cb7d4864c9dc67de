//! pawcal configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{PawcalError, PawcalResult};

static DEFAULT_DATA_DIR: &str = "~/.local/share/pawcal";
pub const DEFAULT_SERVER_PORT: u16 = 4097;

const STORE_FILE: &str = "store.json";
const SESSION_FILE: &str = "session.toml";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_server_port() -> u16 {
    DEFAULT_SERVER_PORT
}

/// Configuration at ~/.config/pawcal/config.toml, overridable with
/// `PAWCAL_*` environment variables.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PawcalConfig {
    /// Where the event store and session live
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// REST backend that accepted changes are mirrored to. Local only when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base_url: Option<String>,

    #[serde(default = "default_server_port")]
    pub server_port: u16,
}

impl Default for PawcalConfig {
    fn default() -> Self {
        PawcalConfig {
            data_dir: default_data_dir(),
            api_base_url: None,
            server_port: DEFAULT_SERVER_PORT,
        }
    }
}

impl PawcalConfig {
    pub fn config_path() -> PawcalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| PawcalError::Config("Could not determine config directory".into()))?
            .join("pawcal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the user's config, writing a commented default file on first run.
    pub fn load() -> PawcalResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> PawcalResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("PAWCAL").try_parsing(true))
            .build()
            .map_err(|e| PawcalError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| PawcalError::Config(e.to_string()))
    }

    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();
        PathBuf::from(full_path_str)
    }

    pub fn store_path(&self) -> PathBuf {
        self.data_path().join(STORE_FILE)
    }

    pub fn session_path(&self) -> PathBuf {
        self.data_path().join(SESSION_FILE)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> PawcalResult<()> {
        let contents = format!(
            "\
# pawcal configuration

# Where the event store and login session are kept:
# data_dir = \"{}\"

# Booking backend to mirror accepted changes to:
# api_base_url = \"https://api.example.com/v1\"

# Port for pawcal-server:
# server_port = {}
",
            DEFAULT_DATA_DIR, DEFAULT_SERVER_PORT
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                PawcalError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| PawcalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_file_parses_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pawcal/config.toml");

        PawcalConfig::create_default_config(&path).unwrap();
        let config = PawcalConfig::load_from(&path).unwrap();

        assert_eq!(config.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
        assert_eq!(config.server_port, DEFAULT_SERVER_PORT);
    }

    #[test]
    fn test_values_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "data_dir = \"/srv/pawcal\"\napi_base_url = \"http://localhost:8080/api\"\nserver_port = 9000\n",
        )
        .unwrap();

        let config = PawcalConfig::load_from(&path).unwrap();

        assert_eq!(config.api_base_url.as_deref(), Some("http://localhost:8080/api"));
        assert_eq!(config.server_port, 9000);
        assert_eq!(config.store_path(), PathBuf::from("/srv/pawcal/store.json"));
        assert_eq!(config.session_path(), PathBuf::from("/srv/pawcal/session.toml"));
    }
}
