// 3rd party crates
use tracing_subscriber::EnvFilter;

// Current module imports
use super::impls::DualWriter;
use super::types::{LogLevel, LogSettings};

/// Builds the severity filter for a run: the configured threshold as the
/// default directive, with the HTTP stack pinned to errors so an `all`
/// threshold does not drown the log in client internals.
pub fn build_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(level.level_filter().into())
        .parse_lossy("hyper_util=error,hyper=error,reqwest=error,rustls=error")
}

/// Installs the global subscriber from the resolved logging configuration.
/// Best-effort: a failure to install (for example a second initialization)
/// must never take the process down.
pub fn init(log: &LogSettings) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(log.level))
        .with_level(true)
        .with_ansi(false)
        .with_writer(DualWriter::new(log))
        .try_init();
}
