/// Environment variable overriding the configuration file location.
pub const CONFIG_ENV_VAR: &str = "DDNS_SYNC_CONFIG_PATH";

/// Directory under the platform configuration root holding our config file.
pub const CONFIG_DIR_NAME: &str = "ddns-sync";
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Environment variables carrying the provider credentials.
pub const ENV_API_KEY: &str = "DNS_APIKEY";
pub const ENV_API_SECRET: &str = "DNS_APISECRET";

/// Fallback marker and log file locations when the configuration omits them.
pub const DEFAULT_IP_FILE: &str = "current_ip.txt";
pub const DEFAULT_LOG_FILE: &str = "ip_update.log";
