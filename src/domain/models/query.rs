use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const DEFAULT_SORT: &str = "name";

/// Reserved query keys merged into every listing request.
pub const NAMESPACE_PARAM: &str = "namespace";
pub const ORDER_PARAM: &str = "order";
pub const PAGE_SIZE_PARAM: &str = "page_size";
pub const PAGE_PARAM: &str = "page";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterType {
    Text,
    Select,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub id: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterField {
    pub id: String,
    pub title: String,
    pub placeholder: String,
    pub filter_type: FilterType,
    #[serde(default)]
    pub options: Vec<FilterOption>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortType {
    Alpha,
    Numeric,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortField {
    pub id: String,
    pub title: String,
    pub sort_type: SortType,
}

/// Filter and sort fields offered by the author page toolbar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolbarConfig {
    pub filter_fields: Vec<FilterField>,
    pub sort_fields: Vec<SortField>,
}

impl ToolbarConfig {
    pub fn author_page() -> Self {
        Self {
            filter_fields: vec![
                FilterField {
                    id: "name".to_string(),
                    title: "Name".to_string(),
                    placeholder: "Filter by Name...".to_string(),
                    filter_type: FilterType::Text,
                    options: Vec::new(),
                },
                FilterField {
                    id: "type".to_string(),
                    title: "Type".to_string(),
                    placeholder: "Filter by Collection or Role...".to_string(),
                    filter_type: FilterType::Select,
                    options: vec![
                        FilterOption {
                            id: "collection".to_string(),
                            value: "Collection".to_string(),
                        },
                        FilterOption {
                            id: "repository".to_string(),
                            value: "Role".to_string(),
                        },
                    ],
                },
            ],
            sort_fields: vec![
                SortField {
                    id: "name".to_string(),
                    title: "Name".to_string(),
                    sort_type: SortType::Alpha,
                },
                SortField {
                    id: "download_count".to_string(),
                    title: "Downloads".to_string(),
                    sort_type: SortType::Numeric,
                },
            ],
        }
    }

    pub fn filter_field(&self, id: &str) -> Option<&FilterField> {
        self.filter_fields.iter().find(|f| f.id == id)
    }

    pub fn sort_field(&self, id: &str) -> Option<&SortField> {
        self.sort_fields.iter().find(|f| f.id == id)
    }
}

/// A filter as entered in the toolbar. For select fields `value` is the option id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedFilter {
    pub field_id: String,
    pub filter_type: FilterType,
    pub value: String,
}

impl AppliedFilter {
    pub fn text(field_id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field_id: field_id.into(),
            filter_type: FilterType::Text,
            value: value.into(),
        }
    }

    pub fn select(field_id: impl Into<String>, option_id: impl Into<String>) -> Self {
        Self {
            field_id: field_id.into(),
            filter_type: FilterType::Select,
            value: option_id.into(),
        }
    }
}

/// Outgoing listing query, ordered by key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Result of applying toolbar filters: the next state plus the tokenized
/// filter chips to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChange {
    pub state: QueryState,
    pub applied: Vec<AppliedFilter>,
}

/// Filter, sort and pagination state of the listing.
///
/// Every update returns a new state. Updates that would not change anything
/// return `None` so that the caller can skip the fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryState {
    filters: BTreeMap<String, String>,
    sort_key: String,
    page_number: u32,
    page_size: u32,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            filters: BTreeMap::new(),
            sort_key: DEFAULT_SORT.to_string(),
            page_number: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filters(&self) -> &BTreeMap<String, String> {
        &self.filters
    }

    pub fn sort_key(&self) -> &str {
        &self.sort_key
    }

    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn is_ascending(&self) -> bool {
        !self.sort_key.starts_with('-')
    }

    /// Rebuilds the filter map from the toolbar's applied filters.
    ///
    /// Text values are split into whitespace separated tokens, each becoming its
    /// own applied filter; tokens on the same field are joined back with a
    /// single space. Select values overwrite earlier selections on the field.
    pub fn apply_filters(&self, raw: &[AppliedFilter]) -> FilterChange {
        let mut applied = Vec::new();
        for filter in raw {
            match filter.filter_type {
                FilterType::Text => {
                    applied.extend(
                        filter
                            .value
                            .split_whitespace()
                            .map(|token| AppliedFilter::text(filter.field_id.clone(), token)),
                    );
                }
                FilterType::Select => applied.push(filter.clone()),
            }
        }

        let mut filters: BTreeMap<String, String> = BTreeMap::new();
        for filter in &applied {
            let value = filter.value.trim();
            match filter.filter_type {
                FilterType::Select => {
                    filters.insert(filter.field_id.clone(), value.to_string());
                }
                FilterType::Text => {
                    filters
                        .entry(filter.field_id.clone())
                        .and_modify(|existing| {
                            existing.push(' ');
                            existing.push_str(value);
                        })
                        .or_insert_with(|| value.to_string());
                }
            }
        }

        FilterChange {
            state: Self {
                filters,
                page_number: 1,
                ..self.clone()
            },
            applied,
        }
    }

    /// Sort key is `field_id` ascending or `-field_id` descending.
    pub fn apply_sort(&self, field_id: &str, ascending: bool) -> Self {
        let sort_key = if ascending {
            field_id.to_string()
        } else {
            format!("-{}", field_id)
        };
        Self {
            sort_key,
            page_number: 1,
            ..self.clone()
        }
    }

    pub fn set_page_size(&self, page_size: u32) -> Option<Self> {
        if page_size == 0 || page_size == self.page_size {
            return None;
        }
        Some(Self {
            page_size,
            page_number: 1,
            ..self.clone()
        })
    }

    pub fn set_page_number(&self, page_number: u32) -> Option<Self> {
        if page_number == 0 || page_number == self.page_number {
            return None;
        }
        Some(Self {
            page_number,
            ..self.clone()
        })
    }

    /// Filter map merged with the reserved `namespace`, `order`, `page_size`
    /// and `page` keys.
    pub fn to_query_params(&self, namespace: &str) -> QueryParams {
        let mut params = QueryParams::new();
        for (key, value) in &self.filters {
            params.insert(key.clone(), value.clone());
        }
        params.insert(NAMESPACE_PARAM, namespace);
        params.insert(ORDER_PARAM, self.sort_key.clone());
        params.insert(PAGE_SIZE_PARAM, self.page_size.to_string());
        params.insert(PAGE_PARAM, self.page_number.to_string());
        params
    }
}
