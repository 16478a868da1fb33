use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A publishing author or organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Namespace {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub is_vendor: bool,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub summary_fields: NamespaceSummary,
    /// Derived per-type counts for the page header. Never sent by the API.
    #[serde(default, skip_deserializing)]
    pub content_counts: Vec<ContentCount>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NamespaceSummary {
    /// Raw count keyed by content type name, e.g. `role`, `lookup_plugin`.
    #[serde(default)]
    pub content_counts: BTreeMap<String, u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentCount {
    pub title: String,
    pub count: u64,
    pub icon_class: String,
}

/// Breadcrumb title and icon rendered above the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageHeader {
    pub section: String,
    pub section_path: String,
    pub title: String,
    pub icon_class: String,
}

impl PageHeader {
    /// Semicolon separated breadcrumb string, `Section;/path;Title`.
    pub fn breadcrumb(&self) -> String {
        format!("{};{};{}", self.section, self.section_path, self.title)
    }
}

impl Namespace {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            is_vendor: false,
            avatar_url: None,
            description: None,
            summary_fields: NamespaceSummary::default(),
            content_counts: Vec::new(),
        }
    }

    pub fn with_vendor(mut self, is_vendor: bool) -> Self {
        self.is_vendor = is_vendor;
        self
    }

    pub fn with_count(mut self, content_type: impl Into<String>, count: u64) -> Self {
        self.summary_fields
            .content_counts
            .insert(content_type.into(), count);
        self
    }

    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }
}
