use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::application::{AuthService, ListingService, NamespaceService, PreferencesService};
use crate::domain::{DomainError, Me, Namespace, PaginatedResult, QueryParams, UserPreferences};

pub const DEFAULT_BASE_URL: &str = "https://galaxy.ansible.com";
const LISTING_PATH: &str = "/api/internal/ui/repos-and-collections/";
const NAMESPACES_PATH: &str = "/api/v1/namespaces/";
const ME_PATH: &str = "/api/internal/me/";
const PREFERENCES_PATH: &str = "/api/internal/preferences/";

#[derive(Deserialize)]
struct NamespaceList {
    results: Vec<Namespace>,
}

/// HTTP client for the Galaxy REST API.
///
/// Implements every service port of the author page. Configure through the
/// environment:
///
/// ```text
/// GALAXY_BASE_URL=https://galaxy.ansible.com
/// GALAXY_API_TOKEN=0123abcd...
/// ```
///
/// Without a token, `me` reports an anonymous visitor and preference calls
/// are rejected by the server.
pub struct GalaxyApiClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl GalaxyApiClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        let base: String = base_url.into();
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
            base_url: base.trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.is_empty()),
        }
    }

    /// | Variable           | Default                      |
    /// |--------------------|------------------------------|
    /// | `GALAXY_BASE_URL`  | `https://galaxy.ansible.com` |
    /// | `GALAXY_API_TOKEN` | unset (anonymous)            |
    pub fn from_env() -> Self {
        let base =
            std::env::var("GALAXY_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let token = std::env::var("GALAXY_API_TOKEN").ok();
        Self::new(base, token)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.header("Authorization", format!("Token {}", token)),
            None => request,
        }
    }

    async fn read_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, DomainError> {
        let response = self
            .authorize(request)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| DomainError::http(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("Galaxy API returned {status}: {body}");
            return Err(DomainError::http(format!("Galaxy API returned {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DomainError::http(format!("failed to read response: {e}")))?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl ListingService for GalaxyApiClient {
    async fn query(&self, params: &QueryParams) -> Result<PaginatedResult, DomainError> {
        let query: Vec<(&str, &str)> = params.iter().collect();
        debug!("GET {} {:?}", LISTING_PATH, query);
        self.read_json(self.client.get(self.url(LISTING_PATH)).query(&query))
            .await
    }
}

#[async_trait]
impl NamespaceService for GalaxyApiClient {
    async fn find_by_name(&self, name: &str) -> Result<Option<Namespace>, DomainError> {
        let list: NamespaceList = self
            .read_json(
                self.client
                    .get(self.url(NAMESPACES_PATH))
                    .query(&[("name", name)]),
            )
            .await?;
        Ok(list.results.into_iter().find(|ns| ns.name == name))
    }
}

#[async_trait]
impl AuthService for GalaxyApiClient {
    async fn me(&self) -> Result<Me, DomainError> {
        self.read_json(self.client.get(self.url(ME_PATH))).await
    }
}

#[async_trait]
impl PreferencesService for GalaxyApiClient {
    async fn get(&self) -> Result<UserPreferences, DomainError> {
        self.read_json(self.client.get(self.url(PREFERENCES_PATH)))
            .await
    }

    async fn save(&self, preferences: &UserPreferences) -> Result<UserPreferences, DomainError> {
        self.read_json(self.client.put(self.url(PREFERENCES_PATH)).json(preferences))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_trimmed() {
        let client = GalaxyApiClient::new("http://localhost:8000/", None);

        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(
            client.url(LISTING_PATH),
            "http://localhost:8000/api/internal/ui/repos-and-collections/"
        );
    }

    #[test]
    fn test_empty_token_is_anonymous() {
        let client = GalaxyApiClient::new(DEFAULT_BASE_URL, Some(String::new()));
        assert!(client.token.is_none());
    }
}
