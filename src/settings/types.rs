// Standard library
use std::fmt;
use std::path::PathBuf;

// 3rd party crates
use serde::Deserialize;

// Current module imports
use super::constants::{DEFAULT_IP_FILE, DEFAULT_LOG_FILE};

/// Immutable snapshot of one run's configuration, deserialized from the
/// YAML configuration file.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub ipapi: Ipapi,
    pub dnsapi: Dnsapi,

    /// Target DNS records. Modeled as a list, but only the first entry is
    /// acted upon per run; a documented limitation.
    #[serde(default)]
    pub domains: Vec<Domain>,

    /// Marker file holding the last successfully-applied IP.
    #[serde(default = "default_ip_file")]
    pub ipfile: PathBuf,

    #[serde(default = "default_log_file")]
    pub logfile: PathBuf,
    #[serde(default)]
    pub logging: bool,
    #[serde(default)]
    pub logging_level: String,
}

/// IP discovery services; the first address is the primary one.
#[derive(Debug, Deserialize, Clone)]
pub struct Ipapi {
    pub address: Vec<String>,
}

/// Provider endpoint templates and file-configured credentials. The file
/// credentials are superseded by the environment; see [`Credentials`].
#[derive(Debug, Deserialize, Clone)]
pub struct Dnsapi {
    pub update_endpoint: String,
    pub read_endpoint: String,
    #[serde(default)]
    pub apikey: String,
    #[serde(default)]
    pub secretkey: String,
}

/// One target DNS record descriptor.
#[derive(Debug, Deserialize, Clone)]
pub struct Domain {
    pub domain: String,
    #[serde(default)]
    pub subdomain: Option<String>,
    #[serde(default)]
    pub wildcard: bool,
    #[serde(default)]
    pub id: String,
}

/// API credentials resolved once at startup, held in memory only and never
/// persisted.
#[derive(Clone)]
pub struct Credentials {
    pub api_key: String,
    pub secret_key: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

fn default_ip_file() -> PathBuf {
    PathBuf::from(DEFAULT_IP_FILE)
}

fn default_log_file() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_FILE)
}
