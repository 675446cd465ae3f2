// Standard library
use std::path::PathBuf;

// 3rd party crates
use thiserror::Error;

/// Errors raised while resolving the run's configuration. All of them are
/// fatal before the update cycle starts.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to load configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Configuration file path contains invalid UTF-8 characters: {0:?}")]
    InvalidPath(PathBuf),

    #[error("Could not determine the configuration directory")]
    NoConfigDir,

    #[error("API key or secret not set; both DNS_APIKEY and DNS_APISECRET are required")]
    MissingCredentials,
}
