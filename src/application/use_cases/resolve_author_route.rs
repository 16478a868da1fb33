use std::sync::Arc;

use tracing::{debug, info};

use crate::application::{ListingService, NamespaceService};
use crate::domain::{DomainError, Namespace, Page, PaginatedResult, QueryState};

/// Data available when the author page is entered.
#[derive(Debug, Clone)]
pub struct RouteData {
    pub namespace: Option<Namespace>,
    pub content: PaginatedResult,
}

impl RouteData {
    pub fn new(namespace: Option<Namespace>, content: PaginatedResult) -> Self {
        Self { namespace, content }
    }

    pub fn not_found() -> Self {
        Self {
            namespace: None,
            content: PaginatedResult::new(Page::default(), Page::default()),
        }
    }
}

/// Looks up a namespace by name and loads the first page of its packages
/// with the default query.
pub struct ResolveAuthorRouteUseCase {
    namespaces: Arc<dyn NamespaceService>,
    listing: Arc<dyn ListingService>,
}

impl ResolveAuthorRouteUseCase {
    pub fn new(namespaces: Arc<dyn NamespaceService>, listing: Arc<dyn ListingService>) -> Self {
        Self {
            namespaces,
            listing,
        }
    }

    pub async fn execute(&self, namespace_name: &str) -> Result<RouteData, DomainError> {
        let Some(namespace) = self.namespaces.find_by_name(namespace_name).await? else {
            info!("Namespace not found: {}", namespace_name);
            return Ok(RouteData::not_found());
        };

        let params = QueryState::default().to_query_params(&namespace.name);
        debug!("Loading initial content for {} ({} params)", namespace.name, params.len());
        let content = self.listing.query(&params).await?;

        Ok(RouteData::new(Some(namespace), content))
    }
}
