//! HTTP gateway to the matching service.
//!
//! This crate provides:
//! - GatewayConfig: where the service lives
//! - HttpGateway: `reqwest` implementation of `match_state::MatchingGateway`

pub use core_types::{BASE_URL_ENV, DEFAULT_BASE_URL};

use core_types::{Preferences, Project};
use match_state::MatchingGateway;
use reqwest::StatusCode;
use thiserror::Error;
use tracing::debug;

/// Errors from gateway operations.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{endpoint} returned {status}")]
    Status { endpoint: String, status: StatusCode },

    #[error("could not decode response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        source: serde_json::Error,
    },

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

/// Result type for gateway operations.
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Configuration for the matching service connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Base URL without trailing slash (default: http://localhost:5000)
    pub base_url: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl GatewayConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Read the base URL from `CARBON_MATCH_BASE_URL`, falling back to the
    /// default.
    pub fn from_env() -> Self {
        Self::from_setting(std::env::var(BASE_URL_ENV).ok())
    }

    fn from_setting(base_url: Option<String>) -> Self {
        base_url
            .filter(|url| !url.trim().is_empty())
            .map(Self::new)
            .unwrap_or_default()
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

/// `reqwest` client for the matching service.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    config: GatewayConfig,
    client: reqwest::Client,
}

impl HttpGateway {
    /// Create a gateway, checking that the base URL is usable.
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let url = reqwest::Url::parse(&config.base_url)
            .map_err(|e| GatewayError::InvalidBaseUrl(format!("{}: {e}", config.base_url)))?;
        if url.cannot_be_a_base() {
            return Err(GatewayError::InvalidBaseUrl(config.base_url));
        }

        Ok(Self {
            config,
            client: reqwest::Client::new(),
        })
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    async fn decode(endpoint: String, response: reqwest::Response) -> Result<Vec<Project>> {
        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status { endpoint, status });
        }

        let body = response.bytes().await?;
        let projects: Vec<Project> = serde_json::from_slice(&body)
            .map_err(|source| GatewayError::Decode {
                endpoint: endpoint.clone(),
                source,
            })?;

        debug!(%endpoint, count = projects.len(), "decoded projects");
        Ok(projects)
    }
}

impl MatchingGateway for HttpGateway {
    type Error = GatewayError;

    async fn fetch_projects(&self) -> Result<Vec<Project>> {
        let url = self.config.endpoint("projects");
        debug!(%url, "fetching projects");

        let response = self.client.get(&url).send().await?;
        Self::decode(url, response).await
    }

    async fn match_projects(&self, criteria: &Preferences) -> Result<Vec<Project>> {
        let url = self.config.endpoint("match");
        debug!(%url, "submitting preferences");

        let response = self.client.post(&url).json(criteria).send().await?;
        Self::decode(url, response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_config_default() {
        let config = GatewayConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000");
    }

    #[test]
    fn test_gateway_config_trims_trailing_slash() {
        let config = GatewayConfig::new("http://match.internal:8080/api/");
        assert_eq!(config.base_url, "http://match.internal:8080/api");
        assert_eq!(config.endpoint("projects"), "http://match.internal:8080/api/projects");
    }

    #[test]
    fn test_gateway_config_from_setting() {
        let config = GatewayConfig::from_setting(Some("http://matcher:9000/".to_string()));
        assert_eq!(config.base_url, "http://matcher:9000");

        assert_eq!(GatewayConfig::from_setting(None), GatewayConfig::default());
        assert_eq!(GatewayConfig::from_setting(Some("  ".to_string())), GatewayConfig::default());
    }

    #[test]
    fn test_gateway_rejects_bad_base_url() {
        let err = HttpGateway::new(GatewayConfig::new("not a url")).unwrap_err();
        assert!(matches!(err, GatewayError::InvalidBaseUrl(_)));

        let err = HttpGateway::new(GatewayConfig::new("mailto:someone@example.com")).unwrap_err();
        assert!(matches!(err, GatewayError::InvalidBaseUrl(_)));
    }

    #[test]
    fn test_gateway_creation() {
        let gateway = HttpGateway::new(GatewayConfig::default()).unwrap();
        assert_eq!(gateway.config().base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_status_error_message() {
        let err = GatewayError::Status {
            endpoint: "http://localhost:5000/match".to_string(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
        };
        assert_eq!(
            err.to_string(),
            "http://localhost:5000/match returned 500 Internal Server Error"
        );
    }
}
