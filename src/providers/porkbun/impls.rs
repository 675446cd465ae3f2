// Standard library
use std::net::IpAddr;

// 3rd party crates
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{json, Value};
use tracing::{debug, info, warn};

// Project imports
use crate::providers::traits::DnsProvider;

// Current module imports
use super::constants::RECORD_TTL;
use super::errors::PorkbunError;
use super::functions::create_reqwest_client;
use super::types::{Porkbun, PorkbunConfig, ReadResponse};

#[async_trait]
impl DnsProvider for Porkbun {
    type Config = PorkbunConfig;
    type Error = PorkbunError;

    fn new(config: PorkbunConfig) -> Result<Self, PorkbunError> {
        let client = create_reqwest_client()?;
        Ok(Self { config, client })
    }

    /// Pushes `ip` to the record of the first configured domain. Success is
    /// a completed request with HTTP 200 exactly and a JSON-decodable body;
    /// everything else leaves the provider state unknown and is an error.
    async fn update_record(&self, ip: &IpAddr) -> Result<(), PorkbunError> {
        self.validate_config()?;

        let target = &self.config.domains[0];
        let domain: &str = &target.domain;
        let url: String = format!("{}/{}", self.config.update_endpoint, domain);

        if self.config.domains.len() > 1 {
            warn!(
                "{} domains configured; only '{}' is updated per run",
                self.config.domains.len(),
                domain
            );
        }

        info!(domain = %domain, "Updating DNS record to {}", ip);
        debug!(
            url = %url,
            subdomain = %target.subdomain.as_deref().unwrap_or(""),
            wildcard = target.wildcard,
            record_id = %target.id,
            "Sending update request"
        );

        let response = self
            .client
            .post(&url)
            .json(&json!({
                "apikey": self.config.credentials.api_key,
                "secretapikey": self.config.credentials.secret_key,
                "content": ip.to_string(),
                "ttl": RECORD_TTL,
            }))
            .send()
            .await
            .map_err(|e| PorkbunError::RequestFailed {
                operation: "update",
                domain: domain.to_string(),
                message: e.to_string(),
            })?;

        // The status is inspected before any decode attempt, so a failed
        // body is never parsed.
        let status = response.status();
        if status != StatusCode::OK {
            return Err(PorkbunError::UpdateRejected {
                domain: domain.to_string(),
                status: status.to_string(),
            });
        }

        // Decode into a freshly allocated value; a 200 with an undecodable
        // body is still a failed update.
        let _body: Value = response
            .json()
            .await
            .map_err(|e| PorkbunError::InvalidResponse {
                domain: domain.to_string(),
                message: e.to_string(),
            })?;

        info!(domain = %domain, "DNS record updated");
        Ok(())
    }

    fn validate_config(&self) -> Result<(), PorkbunError> {
        if self.config.domains.is_empty() {
            return Err(PorkbunError::NoDomainsConfigured);
        }

        if self.config.credentials.api_key.trim().is_empty()
            || self.config.credentials.secret_key.trim().is_empty()
        {
            return Err(PorkbunError::MissingCredentials);
        }

        Ok(())
    }

    fn get_name(&self) -> &str {
        "porkbun"
    }
}

impl Porkbun {
    /// Fetches the provider's existing records for the first configured
    /// domain. Independent of the update flow; the update decision never
    /// consults it.
    pub async fn read_records(&self) -> Result<ReadResponse, PorkbunError> {
        self.validate_config()?;

        let domain: &str = &self.config.domains[0].domain;
        let url: String = format!("{}/{}", self.config.read_endpoint, domain);

        debug!(url = %url, "Requesting DNS records");

        let response = self
            .client
            .post(&url)
            .json(&json!({
                "apikey": self.config.credentials.api_key,
                "secretapikey": self.config.credentials.secret_key,
            }))
            .send()
            .await
            .map_err(|e| PorkbunError::RequestFailed {
                operation: "read",
                domain: domain.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(PorkbunError::ReadRejected {
                domain: domain.to_string(),
                status: status.to_string(),
            });
        }

        let records: ReadResponse =
            response
                .json()
                .await
                .map_err(|e| PorkbunError::InvalidResponse {
                    domain: domain.to_string(),
                    message: e.to_string(),
                })?;

        info!(
            domain = %domain,
            status = %records.status,
            count = records.records.len(),
            "Received DNS records"
        );
        for record in &records.records {
            debug!(
                id = %record.id,
                name = %record.name,
                record_type = %record.record_type,
                content = %record.content,
                ttl = %record.ttl,
                prio = record.prio.as_deref().unwrap_or(""),
                notes = record.notes.as_deref().unwrap_or(""),
                "Record"
            );
        }

        Ok(records)
    }
}
