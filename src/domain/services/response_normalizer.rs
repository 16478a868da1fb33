use crate::domain::{DomainError, ListingPage, PaginatedResult};

/// Splits the combined listing response into per-kind lists and counts.
///
/// Order and membership of both lists are exactly what the backend sent.
pub fn normalize_response(response: PaginatedResult) -> Result<ListingPage, DomainError> {
    let repository = response
        .repository
        .ok_or_else(|| DomainError::malformed("listing response has no 'repository' result"))?;
    let collection = response
        .collection
        .ok_or_else(|| DomainError::malformed("listing response has no 'collection' result"))?;

    Ok(ListingPage {
        repositories: repository.results,
        collections: collection.results,
        repository_count: repository.count,
        collection_count: collection.count,
    })
}
