//! Infoblox WAPI client.
//!
//! Read-only queries against the WAPI plus the public breed listing. Every
//! call is a single GET; nothing is retried or cached.

use reqwest::{RequestBuilder, header::ACCEPT};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use super::error::ClientError;
use super::models::{Breed, BreedPage, DnsRecord, GridMember, Zone};
use crate::core::config::InfobloxConfig;

const JSON_MEDIA_TYPE: &str = "application/json";

/// Client for the WAPI endpoints used by the tools and the REST API.
///
/// Holds credentials only; it is cheap to share behind an `Arc`.
pub struct InfobloxClient {
    http: reqwest::Client,
    base_url: String,
    username: String,
    password: String,
    breeds_url: String,
}

impl InfobloxClient {
    /// Build a client from the connection settings.
    ///
    /// Idle connections are not kept, so each call opens its own connection.
    pub fn new(config: &InfobloxConfig) -> Result<Self, ClientError> {
        if !config.verify_ssl {
            warn!("TLS certificate verification is disabled for WAPI requests");
        }

        let http = reqwest::Client::builder()
            .danger_accept_invalid_certs(!config.verify_ssl)
            .pool_max_idle_per_host(0)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            username: config.username.clone(),
            password: config.password.clone(),
            breeds_url: config.breeds_url.clone(),
        })
    }

    #[cfg(test)]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Retrieve all authoritative DNS zones.
    #[instrument(skip(self))]
    pub async fn get_zones(&self) -> Result<Vec<Zone>, ClientError> {
        let zones: Vec<Zone> = fetch_json(self.wapi_get("zone_auth")).await?;
        debug!("Fetched {} zone(s)", zones.len());
        Ok(zones)
    }

    /// Retrieve the A records of one zone.
    ///
    /// Filtering happens upstream; an unknown zone yields an empty list.
    #[instrument(skip(self))]
    pub async fn get_records(&self, zone: &str) -> Result<Vec<DnsRecord>, ClientError> {
        let request = self.wapi_get("record:a").query(&[("zone", zone)]);
        let records: Vec<DnsRecord> = fetch_json(request).await?;
        debug!("Fetched {} record(s) in zone {}", records.len(), zone);
        Ok(records)
    }

    /// Retrieve all grid members and their status.
    #[instrument(skip(self))]
    pub async fn get_grid_members(&self) -> Result<Vec<GridMember>, ClientError> {
        let members: Vec<GridMember> = fetch_json(self.wapi_get("member")).await?;
        debug!("Fetched {} grid member(s)", members.len());
        Ok(members)
    }

    /// Retrieve the breed listing from the public reference API.
    #[instrument(skip(self))]
    pub async fn get_breeds(&self) -> Result<Vec<Breed>, ClientError> {
        let request = self
            .http
            .get(&self.breeds_url)
            .header(ACCEPT, JSON_MEDIA_TYPE);
        let page: BreedPage = fetch_json(request).await?;
        debug!("Fetched {} breed(s)", page.data.len());
        Ok(page.data)
    }

    fn wapi_get(&self, object: &str) -> RequestBuilder {
        self.http
            .get(format!("{}/{}", self.base_url, object))
            .basic_auth(&self.username, Some(&self.password))
            .header(ACCEPT, JSON_MEDIA_TYPE)
    }
}

/// Send a request and decode the whole body as `T`.
async fn fetch_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ClientError> {
    let response = request.send().await?;
    let url = response.url().to_string();
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(ClientError::Status { url, status, body });
    }

    serde_json::from_str(&body).map_err(|e| ClientError::malformed(url, e.to_string()))
}
