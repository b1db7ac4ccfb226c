//! Inventory gateway client implementation using reqwest.

use std::collections::HashSet;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::domain::{
    AppError, InstanceId, InterfaceId, InventoryConfig, RawNetworkInterface, RawReservation,
    UpstreamCause,
};
use crate::ports::InventoryService;

const X_INVENTORY_REGION: &str = "X-Inventory-Region";
const DESCRIBE_NETWORK_INTERFACES: &str = "DescribeNetworkInterfaces";
const DESCRIBE_INSTANCES: &str = "DescribeInstances";

/// Failure talking to the inventory gateway.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid endpoint: {0}")]
    Endpoint(#[from] url::ParseError),

    #[error("Inventory API error ({status}{}): {message}", code_suffix(.code))]
    Status { status: u16, code: Option<String>, message: String },

    #[error("Pagination token '{token}' was returned twice")]
    RepeatedToken { token: String },
}

fn code_suffix(code: &Option<String>) -> String {
    code.as_deref().map(|c| format!(", {}", c)).unwrap_or_default()
}

/// HTTP client for the inventory gateway.
///
/// Each describe call is a JSON POST to `<endpoint>/<Action>` using the
/// provider's PascalCase shapes. Paginated responses are followed through
/// `NextToken` until exhausted.
#[derive(Clone)]
pub struct HttpInventoryClient {
    endpoint: Url,
    region: Option<String>,
    token: Option<String>,
    client: Client,
}

impl std::fmt::Debug for HttpInventoryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpInventoryClient")
            .field("endpoint", &self.endpoint)
            .field("region", &self.region)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl HttpInventoryClient {
    /// Create a new client for `endpoint` with an optional bearer token.
    pub fn new(
        endpoint: &Url,
        token: Option<String>,
        config: &InventoryConfig,
    ) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::config_error(format!("Failed to create HTTP client: {}", e)))?;

        let mut endpoint = endpoint.clone();
        if !endpoint.path().ends_with('/') {
            let path = format!("{}/", endpoint.path());
            endpoint.set_path(&path);
        }

        Ok(Self { endpoint, region: config.region.clone(), token, client })
    }

    /// Create from configuration, reading the token from `config.token_env` when set.
    pub fn from_config(endpoint: &Url, config: &InventoryConfig) -> Result<Self, AppError> {
        let token = std::env::var(&config.token_env).ok().filter(|t| !t.trim().is_empty());
        if token.is_none() {
            debug!(token_env = %config.token_env, "no bearer token in environment");
        }
        Self::new(endpoint, token, config)
    }

    fn post<B, R>(&self, action: &str, body: &B) -> Result<R, TransportError>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let url = self.endpoint.join(action)?;
        let mut request = self.client.post(url).header(CONTENT_TYPE, "application/json").json(body);
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token));
        }
        if let Some(region) = &self.region {
            request = request.header(X_INVENTORY_REGION, region);
        }

        let response = request.send()?;
        let status = response.status();
        if status.is_success() {
            return Ok(response.json()?);
        }

        let text = response.text().unwrap_or_default();
        let (code, message) = parse_error_body(&text);
        Err(TransportError::Status {
            status: status.as_u16(),
            code,
            message: message.unwrap_or_else(|| {
                if text.trim().is_empty() { status.to_string() } else { text.trim().to_string() }
            }),
        })
    }

    fn all_network_interfaces(
        &self,
        filter: Option<&[InterfaceId]>,
    ) -> Result<Vec<RawNetworkInterface>, TransportError> {
        let mut interfaces = Vec::new();
        let mut next_token: Option<String> = None;
        let mut seen = HashSet::new();
        let mut page = 0;

        loop {
            let request = DescribeNetworkInterfacesRequest {
                network_interface_ids: filter,
                next_token: next_token.as_deref(),
            };
            let response: DescribeNetworkInterfacesResponse =
                self.post(DESCRIBE_NETWORK_INTERFACES, &request)?;
            page += 1;
            debug!(page, count = response.network_interfaces.len(), "network interface page");

            interfaces.extend(response.network_interfaces);
            match response.next_token.filter(|t| !t.is_empty()) {
                Some(token) => next_token = Some(advance(&mut seen, token)?),
                None => return Ok(interfaces),
            }
        }
    }

    fn all_reservations(&self, ids: &[InstanceId]) -> Result<Vec<RawReservation>, TransportError> {
        let mut reservations = Vec::new();
        let mut next_token: Option<String> = None;
        let mut seen = HashSet::new();
        let mut page = 0;

        loop {
            let request =
                DescribeInstancesRequest { instance_ids: ids, next_token: next_token.as_deref() };
            let response: DescribeInstancesResponse = self.post(DESCRIBE_INSTANCES, &request)?;
            page += 1;
            debug!(page, count = response.reservations.len(), "reservation page");

            reservations.extend(response.reservations);
            match response.next_token.filter(|t| !t.is_empty()) {
                Some(token) => next_token = Some(advance(&mut seen, token)?),
                None => return Ok(reservations),
            }
        }
    }
}

impl InventoryService for HttpInventoryClient {
    fn describe_network_interfaces(
        &self,
        filter: Option<&[InterfaceId]>,
    ) -> Result<Vec<RawNetworkInterface>, UpstreamCause> {
        Ok(self.all_network_interfaces(filter)?)
    }

    fn describe_instances(&self, ids: &[InstanceId]) -> Result<Vec<RawReservation>, UpstreamCause> {
        Ok(self.all_reservations(ids)?)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct DescribeNetworkInterfacesRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    network_interface_ids: Option<&'a [InterfaceId]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_token: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DescribeNetworkInterfacesResponse {
    #[serde(default)]
    network_interfaces: Vec<RawNetworkInterface>,
    #[serde(default)]
    next_token: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct DescribeInstancesRequest<'a> {
    instance_ids: &'a [InstanceId],
    #[serde(skip_serializing_if = "Option::is_none")]
    next_token: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DescribeInstancesResponse {
    #[serde(default)]
    reservations: Vec<RawReservation>,
    #[serde(default)]
    next_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Record a continuation token, rejecting one the gateway already handed out.
fn advance(seen: &mut HashSet<String>, token: String) -> Result<String, TransportError> {
    if !seen.insert(token.clone()) {
        return Err(TransportError::RepeatedToken { token });
    }
    Ok(token)
}

/// Extract `(code, message)` from an `{"Error": {...}}` body, if it has that shape.
fn parse_error_body(text: &str) -> (Option<String>, Option<String>) {
    match serde_json::from_str::<ErrorEnvelope>(text) {
        Ok(envelope) => (envelope.error.code, envelope.error.message),
        Err(_) => (None, None),
    }
}
