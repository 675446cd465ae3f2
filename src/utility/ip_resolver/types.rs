// 3rd party crates
use reqwest::Client;
use serde::Deserialize;

// Project imports
use crate::settings::types::Ipapi;

/// Queries the configured "what is my IP" service.
#[derive(Debug, Clone)]
pub struct IpResolver {
    pub config: Ipapi,
    pub client: Client,
}

/// Body shape the discovery endpoint must answer with.
#[derive(Debug, Deserialize)]
pub struct IpApiResponse {
    pub ip: String,
}
