//! Browser gateway to the matching service.

use core_types::{DEFAULT_BASE_URL, Preferences, Project};
use gloo_net::http::{Request, Response};
use match_state::MatchingGateway;

/// `gloo-net` implementation of the matching gateway.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowserGateway {
    base_url: String,
}

impl Default for BrowserGateway {
    /// Uses `CARBON_MATCH_BASE_URL` as seen at build time.
    fn default() -> Self {
        Self::new(option_env!("CARBON_MATCH_BASE_URL").unwrap_or(DEFAULT_BASE_URL))
    }
}

impl BrowserGateway {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn decode(url: &str, response: Response) -> Result<Vec<Project>, gloo_net::Error> {
        if !response.ok() {
            return Err(gloo_net::Error::GlooError(format!(
                "{url} returned {} {}",
                response.status(),
                response.status_text()
            )));
        }
        response.json::<Vec<Project>>().await
    }
}

impl MatchingGateway for BrowserGateway {
    type Error = gloo_net::Error;

    async fn fetch_projects(&self) -> Result<Vec<Project>, Self::Error> {
        let url = format!("{}/projects", self.base_url);
        let response = Request::get(&url).send().await?;
        Self::decode(&url, response).await
    }

    async fn match_projects(&self, criteria: &Preferences) -> Result<Vec<Project>, Self::Error> {
        let url = format!("{}/match", self.base_url);
        let response = Request::post(&url).json(criteria)?.send().await?;
        Self::decode(&url, response).await
    }
}

/// Report a swallowed failure on the developer console.
pub fn log_error(message: &str) {
    web_sys::console::error_1(&message.into());
}
