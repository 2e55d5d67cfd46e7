//! HTTP client for TheMealDB's `filter.php` endpoint.

use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

use crate::types::{FilterResponse, Meal, MealscopeConfig};

/// Everything that can go wrong between issuing the request and holding parsed meals.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Non-2xx response.
    #[error("Failed to fetch: {0}")]
    HttpStatus(u16),

    /// Network failure, timeout, malformed body, or an unusable base URL.
    #[error("{0}")]
    Transport(String),
}

impl FetchError {
    fn transport(err: impl std::fmt::Display) -> Self {
        FetchError::Transport(err.to_string())
    }
}

/// Thin client over a shared `reqwest::Client`. Cheap to clone.
#[derive(Debug, Clone)]
pub struct MealDbClient {
    http: Client,
    base_url: String,
}

impl MealDbClient {
    pub fn new(config: &MealscopeConfig) -> Result<Self, FetchError> {
        // Browsers own the user agent and timeouts under wasm.
        #[cfg(not(target_arch = "wasm32"))]
        let builder = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.request_timeout);
        #[cfg(target_arch = "wasm32")]
        let builder = Client::builder();
        let http = builder.build().map_err(FetchError::transport)?;

        Ok(Self { http, base_url: config.api_base_url.trim_end_matches('/').to_string() })
    }

    /// Build `{base}/filter.php?c=<category>` with the category form-encoded.
    pub fn filter_url(&self, category: &str) -> Result<Url, FetchError> {
        Url::parse_with_params(&format!("{}/filter.php", self.base_url), &[("c", category)])
            .map_err(FetchError::transport)
    }

    /// Fetch meal summaries for a category (or any free-text term the API accepts).
    pub async fn fetch_by_category(&self, category: &str) -> Result<Vec<Meal>, FetchError> {
        let url = self.filter_url(category)?;
        debug!(url = url.as_str(), "Fetching meals");

        let response = self.http.get(url).send().await.map_err(|e| {
            warn!(category, error = %e, "Meal request failed");
            FetchError::transport(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(category, status = status.as_u16(), "Meal request returned error status");
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        let body: FilterResponse = response.json().await.map_err(|e| {
            warn!(category, error = %e, "Malformed meal response");
            FetchError::transport(e)
        })?;

        let meals = body.into_meals();
        debug!(category, count = meals.len(), "Fetched meals");
        Ok(meals)
    }
}
