// Standard library
use std::net::IpAddr;
use std::time::Duration;

// 3rd party crates
use reqwest::Client;
use tracing::debug;

// Project imports
use crate::settings::types::Ipapi;

// Current module imports
use super::constants::REQUEST_TIMEOUT_SECS;
use super::errors::ResolveError;
use super::types::{IpApiResponse, IpResolver};

impl IpResolver {
    pub fn new(config: Ipapi) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Resolves the current public IP from the primary discovery endpoint.
    /// One bounded attempt per invocation; anything other than a success
    /// status with a JSON body carrying a string `ip` field is an error.
    pub async fn resolve(&self) -> Result<IpAddr, ResolveError> {
        let endpoint: &String = self
            .config
            .address
            .first()
            .ok_or(ResolveError::NoEndpointsConfigured)?;

        debug!(endpoint = %endpoint, "Requesting current public IP");

        let response = self
            .client
            .get(endpoint)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .send()
            .await
            .map_err(|e| ResolveError::RequestFailed {
                endpoint: endpoint.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResolveError::BadStatus {
                endpoint: endpoint.clone(),
                status: status.to_string(),
            });
        }

        let body: IpApiResponse =
            response
                .json()
                .await
                .map_err(|e| ResolveError::InvalidResponse {
                    endpoint: endpoint.clone(),
                    message: e.to_string(),
                })?;

        body.ip
            .parse()
            .map_err(|_| ResolveError::MalformedIp { value: body.ip })
    }
}

#[cfg(test)]
mod test {
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn resolver(addresses: Vec<String>) -> IpResolver {
        IpResolver::new(Ipapi { address: addresses })
    }

    #[tokio::test]
    async fn test_resolve_200() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"ip": "203.0.113.7"})),
            )
            .mount(&server)
            .await;

        let ip = resolver(vec![server.uri()])
            .resolve()
            .await
            .expect("HTTP 200 with an ip field must resolve");
        assert_eq!(ip.to_string(), "203.0.113.7");
    }

    #[tokio::test]
    async fn test_resolve_uses_the_first_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"ip": "203.0.113.7"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        // The second address does not exist; it must never be contacted.
        let ip = resolver(vec![server.uri(), "http://192.0.2.1:9".to_string()])
            .resolve()
            .await
            .expect("primary endpoint answers");
        assert_eq!(ip.to_string(), "203.0.113.7");
    }

    #[tokio::test]
    async fn test_resolve_wrong_field_name() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"address": "203.0.113.7"})),
            )
            .mount(&server)
            .await;

        let err = resolver(vec![server.uri()])
            .resolve()
            .await
            .expect_err("a body without an 'ip' field must be rejected");
        assert!(matches!(err, ResolveError::InvalidResponse { .. }));
    }

    #[tokio::test]
    async fn test_resolve_non_string_ip_field() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ip": 42})))
            .mount(&server)
            .await;

        let err = resolver(vec![server.uri()])
            .resolve()
            .await
            .expect_err("a non-string 'ip' field must be rejected");
        assert!(matches!(err, ResolveError::InvalidResponse { .. }));
    }

    #[tokio::test]
    async fn test_resolve_malformed_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = resolver(vec![server.uri()])
            .resolve()
            .await
            .expect_err("a non-JSON body must be rejected");
        assert!(matches!(err, ResolveError::InvalidResponse { .. }));
    }

    #[tokio::test]
    async fn test_resolve_malformed_address() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"ip": "203.0.113"})),
            )
            .mount(&server)
            .await;

        let err = resolver(vec![server.uri()])
            .resolve()
            .await
            .expect_err("a malformed address must be rejected");
        match err {
            ResolveError::MalformedIp { value } => assert_eq!(value, "203.0.113"),
            other => panic!("expected MalformedIp, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_resolve_5xx() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = resolver(vec![server.uri()])
            .resolve()
            .await
            .expect_err("HTTP 500 must be rejected");
        match err {
            ResolveError::BadStatus { status, .. } => assert!(status.contains("500")),
            other => panic!("expected BadStatus, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_resolve_without_endpoints() {
        let err = resolver(Vec::new())
            .resolve()
            .await
            .expect_err("an empty endpoint list cannot resolve");
        assert!(matches!(err, ResolveError::NoEndpointsConfigured));
    }

    #[tokio::test]
    async fn test_resolve_unreachable_endpoint() {
        let err = resolver(vec!["http://127.0.0.1:1".to_string()])
            .resolve()
            .await
            .expect_err("a connection failure must surface as an error");
        assert!(matches!(err, ResolveError::RequestFailed { .. }));
    }
}
