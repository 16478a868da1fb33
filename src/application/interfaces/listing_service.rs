use async_trait::async_trait;

use crate::domain::{DomainError, PaginatedResult, QueryParams};

/// Combined repositories-and-collections listing.
#[async_trait]
pub trait ListingService: Send + Sync {
    /// Runs one listing query. `params` carries the filter fields plus the
    /// reserved `namespace`, `order`, `page_size` and `page` keys.
    async fn query(&self, params: &QueryParams) -> Result<PaginatedResult, DomainError>;
}
