//! Main CarePoints API client.

use crate::error::{ClientError, Result};
use crate::patients::PatientsClient;
use crate::types::ServerConfig;
use crate::users::UsersClient;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Main client for the loyalty-points API.
///
/// Holds the shared HTTP client and the normalized base URL, both fixed at
/// construction. Collection operations are reached through the `users()`
/// and `patients()` sub-clients.
///
/// # Example
///
/// ```ignore
/// use carepoints_server_client::{CarePointsClient, ServerConfig};
///
/// let config = ServerConfig::new("https://loyalty.example.com");
/// let client = CarePointsClient::new(config)?;
///
/// let users = client.users().list().await?;
/// println!("Found {} staff accounts", users.len());
/// ```
pub struct CarePointsClient {
    http: Client,
    base_url: String,
}

impl CarePointsClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ServerConfig) -> Result<Self> {
        // Validate URL
        if config.url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        // Parse and normalize URL
        let base_url = config.url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        // Create HTTP client with reasonable defaults
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("CarePoints/{} (Admin)", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Request)?;

        debug!(url = %base_url, "Server client configured");

        Ok(Self { http, base_url })
    }

    /// The normalized base URL.
    pub fn url(&self) -> &str {
        &self.base_url
    }

    /// Client for the staff account collection.
    pub fn users(&self) -> UsersClient<'_> {
        UsersClient::new(&self.http, &self.base_url)
    }

    /// Client for the patient registry.
    pub fn patients(&self) -> PatientsClient<'_> {
        PatientsClient::new(&self.http, &self.base_url)
    }
}

/// Map a transport error from `send()` into the client taxonomy.
///
/// Connect failures and timeouts mean the server never saw the request;
/// everything else stays a plain request error.
pub(crate) fn transport_error(e: reqwest::Error) -> ClientError {
    if e.is_connect() || e.is_timeout() {
        ClientError::Unreachable(e.to_string())
    } else {
        ClientError::Request(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_validation() {
        // Valid URLs
        assert!(CarePointsClient::new(ServerConfig::new("https://example.com")).is_ok());
        assert!(CarePointsClient::new(ServerConfig::new("http://localhost:8080")).is_ok());

        // Invalid URLs
        assert!(CarePointsClient::new(ServerConfig::new("")).is_err());
        assert!(CarePointsClient::new(ServerConfig::new("not-a-url")).is_err());
        assert!(CarePointsClient::new(ServerConfig::new("ftp://example.com")).is_err());
    }

    #[test]
    fn url_normalization() {
        let client = CarePointsClient::new(ServerConfig::new("https://example.com///"))
            .expect("valid url");

        assert_eq!(client.url(), "https://example.com");
        assert!(!client.url().ends_with('/'));
    }
}
