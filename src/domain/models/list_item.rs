use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Legacy repository (role) entry as returned by the listing API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryItem {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub download_count: u64,
    #[serde(default)]
    pub commit_created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub summary_fields: RepositorySummary,
    /// Display-only fields filled in by the item enricher.
    #[serde(default, skip_deserializing)]
    pub display: Option<RepositoryDisplay>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepositorySummary {
    #[serde(default)]
    pub namespace: Option<NamespaceRef>,
    #[serde(default)]
    pub latest_import: Option<LatestImport>,
    #[serde(default)]
    pub content_objects: Option<Vec<ContentObject>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceRef {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatestImport {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub finished: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentObject {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryDisplay {
    pub icon_class: Option<String>,
    pub tooltip: Option<String>,
    pub last_import: String,
    pub last_import_state: String,
    pub last_commit: String,
}

/// Collection entry as returned by the listing API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionItem {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub download_count: u64,
    #[serde(default)]
    pub summary_fields: CollectionSummary,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionSummary {
    #[serde(default)]
    pub namespace: Option<NamespaceRef>,
}

impl RepositoryItem {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            format: None,
            description: None,
            download_count: 0,
            commit_created: None,
            summary_fields: RepositorySummary::default(),
            display: None,
        }
    }

    pub fn namespace_name(&self) -> Option<&str> {
        self.summary_fields
            .namespace
            .as_ref()
            .map(|ns| ns.name.as_str())
    }

    pub fn has_description(&self) -> bool {
        self.description.as_deref().is_some_and(|d| !d.is_empty())
    }
}

impl CollectionItem {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            download_count: 0,
            summary_fields: CollectionSummary::default(),
        }
    }

    pub fn namespace_name(&self) -> Option<&str> {
        self.summary_fields
            .namespace
            .as_ref()
            .map(|ns| ns.name.as_str())
    }
}

/// Either kind of listed package, as handed to the item-click navigation.
#[derive(Debug, Clone, Copy)]
pub enum ListItem<'a> {
    Repository(&'a RepositoryItem),
    Collection(&'a CollectionItem),
}

impl ListItem<'_> {
    pub fn name(&self) -> &str {
        match self {
            ListItem::Repository(item) => &item.name,
            ListItem::Collection(item) => &item.name,
        }
    }

    pub fn namespace_name(&self) -> Option<&str> {
        match self {
            ListItem::Repository(item) => item.namespace_name(),
            ListItem::Collection(item) => item.namespace_name(),
        }
    }
}
