use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use crate::{
    AuthService, AuthorPageServices, GalaxyApiClient, InMemoryGalaxy, ListingService,
    NamespaceService, PreferencesService, RecordingNavigator, ResolveAuthorRouteUseCase,
};

pub struct ContainerConfig {
    /// Galaxy server root. Falls back to `GALAXY_BASE_URL`, then the public server.
    pub base_url: Option<String>,
    /// API token. Falls back to `GALAXY_API_TOKEN`.
    pub token: Option<String>,
    /// Serve everything from a JSON fixture instead of the network.
    pub fixture: Option<PathBuf>,
}

pub struct Container {
    listing: Arc<dyn ListingService>,
    namespaces: Arc<dyn NamespaceService>,
    auth: Arc<dyn AuthService>,
    preferences: Arc<dyn PreferencesService>,
    navigator: Arc<RecordingNavigator>,
    source: String,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Result<Self> {
        let navigator = Arc::new(RecordingNavigator::new());

        if let Some(path) = config.fixture.as_deref() {
            debug!("Using fixture backend {}", path.display());
            let galaxy = Arc::new(InMemoryGalaxy::load(path)?);
            return Ok(Self {
                listing: galaxy.clone(),
                namespaces: galaxy.clone(),
                auth: galaxy.clone(),
                preferences: galaxy,
                navigator,
                source: format!("fixture {}", path.display()),
            });
        }

        let client = match config.base_url {
            Some(base_url) => {
                let token = config
                    .token
                    .or_else(|| std::env::var("GALAXY_API_TOKEN").ok());
                GalaxyApiClient::new(base_url, token)
            }
            None => {
                let client = GalaxyApiClient::from_env();
                match config.token {
                    Some(token) => GalaxyApiClient::new(client.base_url(), Some(token)),
                    None => client,
                }
            }
        };
        debug!("Using Galaxy API at {}", client.base_url());
        let source = client.base_url().to_string();
        let client = Arc::new(client);

        Ok(Self {
            listing: client.clone(),
            namespaces: client.clone(),
            auth: client.clone(),
            preferences: client,
            navigator,
            source,
        })
    }

    pub fn resolve_use_case(&self) -> ResolveAuthorRouteUseCase {
        ResolveAuthorRouteUseCase::new(self.namespaces.clone(), self.listing.clone())
    }

    pub fn page_services(&self) -> AuthorPageServices {
        AuthorPageServices::new(
            self.listing.clone(),
            self.auth.clone(),
            self.preferences.clone(),
            self.navigator.clone(),
        )
    }

    pub fn navigator(&self) -> &RecordingNavigator {
        &self.navigator
    }

    /// Where data is served from, for display.
    pub fn source(&self) -> &str {
        &self.source
    }
}
