// Standard library
use std::net::IpAddr;

// 3rd party crates
use async_trait::async_trait;

/// Core trait a DNS provider client implements.
///
/// There is exactly one concrete provider today; the trait is the seam the
/// orchestrator talks through, not a multi-provider registry.
#[async_trait]
#[allow(unused)]
pub trait DnsProvider: Send + Sync {
    /// Provider-specific configuration.
    type Config: Clone + Send + Sync;

    /// Provider-specific error type.
    type Error: std::error::Error + Send + Sync;

    /// Creates a provider client from its configuration.
    fn new(config: Self::Config) -> Result<Self, Self::Error>
    where
        Self: Sized;

    /// Pushes `ip` to the provider record for the first configured domain.
    ///
    /// Preconditions are those of [`DnsProvider::validate_config`]; they
    /// are re-checked before any network traffic.
    async fn update_record(&self, ip: &IpAddr) -> Result<(), Self::Error>;

    /// Checks the preconditions for an authenticated call: at least one
    /// domain configured and non-empty credentials.
    fn validate_config(&self) -> Result<(), Self::Error>;

    /// Provider name for diagnostics.
    fn get_name(&self) -> &str;
}
