// 3rd party crates
use thiserror::Error;

/// Custom error type for public-IP discovery. Every variant is fatal for
/// the run; retry, if any, belongs to the scheduler that re-invokes the
/// program.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("No IP discovery endpoints configured")]
    NoEndpointsConfigured,

    #[error("Failed to reach IP discovery endpoint '{endpoint}': {message}")]
    RequestFailed { endpoint: String, message: String },

    #[error("IP discovery endpoint '{endpoint}' responded with HTTP {status}")]
    BadStatus { endpoint: String, status: String },

    #[error("Failed to decode IP discovery response from '{endpoint}': {message}")]
    InvalidResponse { endpoint: String, message: String },

    #[error("Discovery response field 'ip' is not a valid IP address: '{value}'")]
    MalformedIp { value: String },
}
