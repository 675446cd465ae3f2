// 3rd party crates
use thiserror::Error;

/// Custom error type for provider operations.
#[derive(Debug, Error)]
pub enum PorkbunError {
    #[error("No domains configured")]
    NoDomainsConfigured,

    #[error("API key or secret is not set")]
    MissingCredentials,

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Failed to send {operation} request for domain '{domain}': {message}")]
    RequestFailed {
        operation: &'static str,
        domain: String,
        message: String,
    },

    #[error("Provider rejected the update for domain '{domain}': {status}")]
    UpdateRejected { domain: String, status: String },

    #[error("Provider rejected the record read for domain '{domain}': {status}")]
    ReadRejected { domain: String, status: String },

    #[error("Failed to decode provider response for domain '{domain}': {message}")]
    InvalidResponse { domain: String, message: String },
}
