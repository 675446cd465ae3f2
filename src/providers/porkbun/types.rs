// 3rd party crates
use reqwest::Client;
use serde::Deserialize;

// Project imports
use crate::settings::types::{Credentials, Domain};

/// Client for the provider's record read/update API.
#[derive(Debug, Clone)]
pub struct Porkbun {
    pub config: PorkbunConfig,
    pub client: Client,
}

/// Configuration for provider API interactions: endpoint templates, the
/// resolved credentials, and the target domains.
#[derive(Debug, Clone)]
pub struct PorkbunConfig {
    pub update_endpoint: String,
    pub read_endpoint: String,
    pub credentials: Credentials,
    pub domains: Vec<Domain>,
}

/// Response to a record read request.
#[derive(Debug, Deserialize)]
pub struct ReadResponse {
    pub status: String,
    #[serde(default)]
    pub records: Vec<DnsRecord>,
}

/// One DNS record as the provider API reports it.
#[derive(Debug, Deserialize, Clone)]
pub struct DnsRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub content: String,
    pub ttl: String,
    #[serde(default)]
    pub prio: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}
