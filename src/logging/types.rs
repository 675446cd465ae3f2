// Standard library
use std::path::PathBuf;

// 3rd party crates
use tracing_subscriber::filter::LevelFilter;

// Project imports
use crate::settings::constants::DEFAULT_LOG_FILE;
use crate::settings::types::Settings;

/// Message severities, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    All,
    Warning,
    Error,
}

/// Logging configuration, constructed once at startup and handed to the
/// subscriber. There is no process-global logging state beyond the
/// subscriber itself.
#[derive(Debug, Clone)]
pub struct LogSettings {
    pub enabled: bool,
    pub level: LogLevel,
    pub file: PathBuf,
}

impl LogLevel {
    /// Resolves a configuration label. An unrecognized or missing label
    /// falls back to the strictest threshold; unknown configuration must
    /// never increase verbosity.
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "all" => LogLevel::All,
            "warning" => LogLevel::Warning,
            _ => LogLevel::Error,
        }
    }

    pub fn level_filter(self) -> LevelFilter {
        match self {
            LogLevel::All => LevelFilter::TRACE,
            LogLevel::Warning => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
        }
    }
}

impl LogSettings {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            enabled: settings.logging,
            level: LogLevel::from_label(&settings.logging_level),
            file: settings.logfile.clone(),
        }
    }
}

impl Default for LogSettings {
    /// Pre-configuration defaults, used when the run fails before its
    /// configuration is loaded so the failure is still reported.
    fn default() -> Self {
        Self {
            enabled: true,
            level: LogLevel::Error,
            file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}
