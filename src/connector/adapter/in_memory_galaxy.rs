use std::cmp::Ordering;
use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::debug;

use crate::application::{AuthService, ListingService, NamespaceService, PreferencesService};
use crate::domain::{
    CollectionItem, DomainError, Me, Namespace, Page, PaginatedResult, QueryParams,
    RepositoryItem, UserPreferences, DEFAULT_PAGE_SIZE, DEFAULT_SORT, NAMESPACE_PARAM,
    ORDER_PARAM, PAGE_PARAM, PAGE_SIZE_PARAM,
};

/// Snapshot of a Galaxy server, as stored in a fixture file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GalaxyFixture {
    #[serde(default)]
    pub namespaces: Vec<Namespace>,
    #[serde(default)]
    pub repositories: Vec<RepositoryItem>,
    #[serde(default)]
    pub collections: Vec<CollectionItem>,
    #[serde(default)]
    pub me: Me,
    #[serde(default)]
    pub preferences: UserPreferences,
}

/// Fixture-backed Galaxy server answering every service port in memory.
///
/// Listings filter on `namespace`, `name` (every token must appear in the
/// item name, case-insensitive) and `type` (`collection` or `repository`),
/// then order both kinds together and cut one page from the merged list.
pub struct InMemoryGalaxy {
    namespaces: Vec<Namespace>,
    repositories: Vec<RepositoryItem>,
    collections: Vec<CollectionItem>,
    me: Me,
    preferences: Mutex<UserPreferences>,
}

enum Entry<'a> {
    Repository(&'a RepositoryItem),
    Collection(&'a CollectionItem),
}

impl Entry<'_> {
    fn name(&self) -> &str {
        match self {
            Entry::Repository(r) => &r.name,
            Entry::Collection(c) => &c.name,
        }
    }

    fn download_count(&self) -> u64 {
        match self {
            Entry::Repository(r) => r.download_count,
            Entry::Collection(c) => c.download_count,
        }
    }
}

impl InMemoryGalaxy {
    pub fn new(fixture: GalaxyFixture) -> Self {
        Self {
            namespaces: fixture.namespaces,
            repositories: fixture.repositories,
            collections: fixture.collections,
            me: fixture.me,
            preferences: Mutex::new(fixture.preferences),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        let fixture: GalaxyFixture = serde_json::from_str(json)?;
        Ok(Self::new(fixture))
    }

    pub fn load(path: &Path) -> Result<Self, DomainError> {
        let json = std::fs::read_to_string(path)?;
        debug!("Loaded Galaxy fixture from {}", path.display());
        Self::from_json(&json)
    }

    fn matches_name(name: &str, filter: Option<&str>) -> bool {
        let Some(filter) = filter else {
            return true;
        };
        let name = name.to_lowercase();
        filter
            .split_whitespace()
            .all(|token| name.contains(&token.to_lowercase()))
    }

    fn compare(order: &str, a: &Entry<'_>, b: &Entry<'_>) -> Ordering {
        let (field, descending) = match order.strip_prefix('-') {
            Some(field) => (field, true),
            None => (order, false),
        };
        let ordering = match field {
            "download_count" => a
                .download_count()
                .cmp(&b.download_count())
                .then_with(|| a.name().cmp(b.name())),
            _ => a.name().cmp(b.name()),
        };
        if descending {
            ordering.reverse()
        } else {
            ordering
        }
    }

    fn parse_number(params: &QueryParams, key: &str, default: u32) -> Result<u32, DomainError> {
        match params.get(key) {
            Some(value) => value
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| DomainError::invalid_input(format!("invalid {}: {}", key, value))),
            None => Ok(default),
        }
    }
}

#[async_trait]
impl ListingService for InMemoryGalaxy {
    async fn query(&self, params: &QueryParams) -> Result<PaginatedResult, DomainError> {
        let namespace = params.get(NAMESPACE_PARAM);
        let name = params.get("name");
        let kind = params.get("type");
        let order = params.get(ORDER_PARAM).unwrap_or(DEFAULT_SORT);
        let page_size = Self::parse_number(params, PAGE_SIZE_PARAM, DEFAULT_PAGE_SIZE)? as usize;
        let page = Self::parse_number(params, PAGE_PARAM, 1)? as usize;

        let in_namespace = |ns: Option<&str>| namespace.map_or(true, |wanted| ns == Some(wanted));

        let mut entries: Vec<Entry<'_>> = Vec::new();
        if kind.map_or(true, |k| k == "repository") {
            entries.extend(
                self.repositories
                    .iter()
                    .filter(|r| in_namespace(r.namespace_name()) && Self::matches_name(&r.name, name))
                    .map(Entry::Repository),
            );
        }
        if kind.map_or(true, |k| k == "collection") {
            entries.extend(
                self.collections
                    .iter()
                    .filter(|c| in_namespace(c.namespace_name()) && Self::matches_name(&c.name, name))
                    .map(Entry::Collection),
            );
        }
        entries.sort_by(|a, b| Self::compare(order, a, b));

        let repository_count = entries
            .iter()
            .filter(|e| matches!(e, Entry::Repository(_)))
            .count() as u64;
        let collection_count = entries.len() as u64 - repository_count;

        let mut repositories = Vec::new();
        let mut collections = Vec::new();
        for entry in entries.into_iter().skip((page - 1) * page_size).take(page_size) {
            match entry {
                Entry::Repository(r) => repositories.push(r.clone()),
                Entry::Collection(c) => collections.push(c.clone()),
            }
        }

        debug!(
            "In-memory listing: {} repositories, {} collections on page {}",
            repositories.len(),
            collections.len(),
            page
        );

        Ok(PaginatedResult::new(
            Page::new(repositories, repository_count),
            Page::new(collections, collection_count),
        ))
    }
}

#[async_trait]
impl NamespaceService for InMemoryGalaxy {
    async fn find_by_name(&self, name: &str) -> Result<Option<Namespace>, DomainError> {
        Ok(self.namespaces.iter().find(|ns| ns.name == name).cloned())
    }
}

#[async_trait]
impl AuthService for InMemoryGalaxy {
    async fn me(&self) -> Result<Me, DomainError> {
        Ok(self.me.clone())
    }
}

#[async_trait]
impl PreferencesService for InMemoryGalaxy {
    async fn get(&self) -> Result<UserPreferences, DomainError> {
        if !self.me.authenticated {
            return Err(DomainError::unauthenticated("anonymous visitors have no preferences"));
        }
        Ok(self.preferences.lock().await.clone())
    }

    async fn save(&self, preferences: &UserPreferences) -> Result<UserPreferences, DomainError> {
        if !self.me.authenticated {
            return Err(DomainError::unauthenticated("anonymous visitors have no preferences"));
        }
        let mut stored = self.preferences.lock().await;
        *stored = preferences.clone();
        Ok(stored.clone())
    }
}
