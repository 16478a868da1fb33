use serde::{Deserialize, Serialize};

use super::{CollectionItem, RepositoryItem};

/// One page of a single item kind, with the total match count across all pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub results: Vec<T>,
    pub count: u64,
}

impl<T> Page<T> {
    pub fn new(results: Vec<T>, count: u64) -> Self {
        Self { results, count }
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            results: Vec::new(),
            count: 0,
        }
    }
}

/// Mixed listing response as sent by the combined repos-and-collections endpoint.
///
/// Both sub-results are required; they are optional here only so that a
/// missing key can be reported as a malformed response instead of a generic
/// decode failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResult {
    #[serde(default)]
    pub repository: Option<Page<RepositoryItem>>,
    #[serde(default)]
    pub collection: Option<Page<CollectionItem>>,
}

impl PaginatedResult {
    pub fn new(repository: Page<RepositoryItem>, collection: Page<CollectionItem>) -> Self {
        Self {
            repository: Some(repository),
            collection: Some(collection),
        }
    }
}

/// Normalized listing ready for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingPage {
    pub repositories: Vec<RepositoryItem>,
    pub collections: Vec<CollectionItem>,
    pub repository_count: u64,
    pub collection_count: u64,
}

impl ListingPage {
    /// Total matching items across both kinds; drives pagination.
    pub fn total_items(&self) -> u64 {
        self.repository_count + self.collection_count
    }

    /// Count shown next to the filter bar. Always equals [`Self::total_items`].
    pub fn results_count(&self) -> u64 {
        self.total_items()
    }

    pub fn is_empty(&self) -> bool {
        self.total_items() == 0
    }
}
