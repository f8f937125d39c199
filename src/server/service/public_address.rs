//! Public address discovery.
//!
//! Looks up the host's externally reachable IP address and records the resulting
//! validation base URL in a plain-text file, so operators can hand it to clients.
//! Failures here never affect the key store; the caller logs them and moves on.

use serde::Deserialize;
use std::path::Path;

use crate::server::error::AppError;

/// Default IP lookup endpoint.
pub const IPIFY_URL: &str = "https://api.ipify.org?format=json";

#[derive(Deserialize)]
struct IpLookupResponse {
    ip: String,
}

/// Service discovering and publishing the public base URL.
pub struct PublicAddressService {
    http_client: reqwest::Client,
    lookup_url: String,
}

impl PublicAddressService {
    /// Creates a service using the default IP lookup endpoint.
    ///
    /// # Arguments
    /// - `http_client` - Shared HTTP client
    ///
    /// # Returns
    /// - `PublicAddressService` - New service instance
    pub fn new(http_client: reqwest::Client) -> Self {
        Self::with_lookup_url(http_client, IPIFY_URL)
    }

    /// Creates a service querying a custom endpoint returning `{ "ip": "..." }`.
    pub fn with_lookup_url(http_client: reqwest::Client, lookup_url: impl Into<String>) -> Self {
        Self {
            http_client,
            lookup_url: lookup_url.into(),
        }
    }

    /// Discovers the public base URL for the given port.
    ///
    /// # Returns
    /// - `Ok(String)` - `http://<ip>:<port>`
    /// - `Err(AppError::ReqwestErr)` - Lookup failed or returned an error status
    pub async fn discover(&self, port: u16) -> Result<String, AppError> {
        let response: IpLookupResponse = self
            .http_client
            .get(&self.lookup_url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(format!("http://{}:{}", response.ip, port))
    }

    /// Discovers the public base URL and overwrites `path` with it.
    ///
    /// # Returns
    /// - `Ok(String)` - The URL that was written
    /// - `Err(AppError)` - Lookup or write failed; `path` is left untouched on lookup failure
    pub async fn publish(&self, port: u16, path: &Path) -> Result<String, AppError> {
        let url = self.discover(port).await?;

        tokio::fs::write(path, &url).await?;

        Ok(url)
    }
}
