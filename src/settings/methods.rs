// Standard library
use std::env;
use std::path::{Path, PathBuf};

// 3rd party crates
use config::{Config, File};

// Current module imports
use super::constants::{
    CONFIG_DIR_NAME, CONFIG_ENV_VAR, CONFIG_FILE_NAME, ENV_API_KEY, ENV_API_SECRET,
};
use super::errors::SettingsError;
use super::types::{Credentials, Settings};

impl Settings {
    /// Loads the configuration for this run. A missing, unreadable or
    /// structurally invalid file is an error; nothing is silently
    /// defaulted except the per-field fallbacks applied after parsing.
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads settings from an explicit configuration file path.
    pub fn load_from(config_path: &Path) -> Result<Self, SettingsError> {
        let config_file: &str = config_path
            .to_str()
            .ok_or_else(|| SettingsError::InvalidPath(config_path.to_path_buf()))?;

        let settings: Settings = Config::builder()
            .add_source(File::with_name(config_file))
            .build()?
            .try_deserialize()?;

        Ok(settings)
    }

    /// Determines the configuration file path.
    fn config_path() -> Result<PathBuf, SettingsError> {
        if let Ok(path) = env::var(CONFIG_ENV_VAR) {
            Ok(PathBuf::from(path))
        } else if let Some(config_dir) = dirs::config_dir() {
            Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
        } else {
            Err(SettingsError::NoConfigDir)
        }
    }
}

impl Credentials {
    /// Resolves the API credentials from the process environment. The
    /// environment wins or the run fails: when either variable is absent
    /// or empty this returns an error even if the configuration file
    /// carries credential values, so a misconfigured environment is never
    /// papered over mid-flight.
    pub fn from_env() -> Result<Self, SettingsError> {
        let api_key: String = env::var(ENV_API_KEY).unwrap_or_default();
        let secret_key: String = env::var(ENV_API_SECRET).unwrap_or_default();

        if api_key.is_empty() || secret_key.is_empty() {
            return Err(SettingsError::MissingCredentials);
        }

        Ok(Self {
            api_key,
            secret_key,
        })
    }
}
