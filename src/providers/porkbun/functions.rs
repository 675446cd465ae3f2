// Standard library
use std::time::Duration;

// 3rd party crates
use reqwest::Client;

// Project imports
use crate::providers::DnsProvider;
use crate::settings::types::{Credentials, Settings};

// Current module imports
use super::constants::REQUEST_TIMEOUT_SECS;
use super::errors::PorkbunError;
use super::types::{Porkbun, PorkbunConfig};

/// Creates a reqwest client for the provider API. Authentication rides in
/// each request body, so no default headers are needed; the client timeout
/// bounds every call.
pub(super) fn create_reqwest_client() -> Result<Client, PorkbunError> {
    let client: Client = Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
        .map_err(PorkbunError::HttpClient)?;

    Ok(client)
}

/// Builds the provider client from the loaded settings and the resolved
/// environment credentials. The resolved credentials supersede any
/// `dnsapi.apikey`/`secretkey` values carried by the file.
pub fn get_porkbun(settings: &Settings, credentials: Credentials) -> Result<Porkbun, PorkbunError> {
    let config = PorkbunConfig {
        update_endpoint: settings.dnsapi.update_endpoint.clone(),
        read_endpoint: settings.dnsapi.read_endpoint.clone(),
        credentials,
        domains: settings.domains.clone(),
    };

    Porkbun::new(config)
}
