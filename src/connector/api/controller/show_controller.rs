use anyhow::Result;
use futures_util::future::join;
use tracing::warn;

use crate::cli::{OutputFormat, PackageKind};
use crate::{AppliedFilter, AuthorPageUseCase, AuthorView, FetchOutcome};

use super::super::Container;
use super::{not_found_message, open_author_page};

pub struct ShowRequest {
    pub namespace: String,
    pub name: Option<String>,
    pub kind: Option<PackageKind>,
    pub sort: Option<String>,
    pub descending: bool,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub format: OutputFormat,
}

pub struct ShowController<'a> {
    container: &'a Container,
}

impl<'a> ShowController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn show(&self, request: ShowRequest) -> Result<String> {
        let Some(page) = open_author_page(self.container, &request.namespace).await? else {
            return Ok(not_found_message(self.container, &request.namespace));
        };

        let (follow, applied) = join(page.sync_follow_state(), apply_request(&page, &request)).await;
        if let Err(e) = follow {
            warn!("Could not load follow state: {}", e);
        }
        applied?;

        let view = page.view();
        Ok(match request.format {
            OutputFormat::Json => serde_json::to_string_pretty(&view)?,
            OutputFormat::Text => format_view(&view),
        })
    }
}

/// Replays the requested toolbar and pagination changes as the page would
/// receive them from the UI, one event at a time.
async fn apply_request(page: &AuthorPageUseCase, request: &ShowRequest) -> Result<Vec<FetchOutcome>> {
    let mut outcomes = Vec::new();

    let mut filters = Vec::new();
    if let Some(name) = &request.name {
        filters.push(AppliedFilter::text("name", name.clone()));
    }
    if let Some(kind) = request.kind {
        filters.push(AppliedFilter::select("type", kind.as_str()));
    }
    if !filters.is_empty() {
        outcomes.push(page.filter_changed(&filters).await?);
    }

    if request.sort.is_some() || request.descending {
        let field = request.sort.as_deref().unwrap_or("name");
        outcomes.push(page.sort_changed(field, !request.descending).await?);
    }
    if let Some(size) = request.page_size {
        outcomes.push(page.page_size_changed(size).await?);
    }
    if let Some(number) = request.page {
        outcomes.push(page.page_number_changed(number).await?);
    }

    Ok(outcomes)
}

fn format_view(view: &AuthorView) -> String {
    let mut output = format!(
        "{} / {}\n",
        view.header.section, view.header.title
    );

    if !view.namespace.content_counts.is_empty() {
        let counts: Vec<_> = view
            .namespace
            .content_counts
            .iter()
            .map(|c| format!("{} {}", c.title, c.count))
            .collect();
        output.push_str(&format!("Content: {}\n", counts.join(", ")));
    }

    if view.follow.available {
        output.push_str(&format!("Follow button: {}\n", view.follow.label));
    } else {
        output.push_str("Follow button: sign in to follow\n");
    }

    if !view.query.filters().is_empty() {
        let filters: Vec<_> = view
            .query
            .filters()
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect();
        output.push_str(&format!("Filters: {}\n", filters.join(", ")));
    }

    let page_size = u64::from(view.pagination.page_size.max(1));
    let page_count = view.pagination.total_items.div_ceil(page_size).max(1);
    output.push_str(&format!(
        "{} results ({} roles, {} collections), sorted by {}, page {} of {}\n\n",
        view.results_count,
        view.listing.repository_count,
        view.listing.collection_count,
        view.query.sort_key(),
        view.pagination.page_number,
        page_count
    ));

    if view.listing.repositories.is_empty() && view.listing.collections.is_empty() {
        output.push_str("No repositories match your search.\n");
        return output;
    }

    if !view.listing.collections.is_empty() {
        output.push_str("Collections:\n");
        for collection in &view.listing.collections {
            output.push_str(&format!(
                "  {} (downloads: {})\n",
                collection.name, collection.download_count
            ));
            if let Some(description) = collection.description.as_deref().filter(|d| !d.is_empty()) {
                output.push_str(&format!("    {}\n", description));
            }
        }
        output.push('\n');
    }

    if !view.listing.repositories.is_empty() {
        output.push_str("Roles:\n");
        for repo in &view.listing.repositories {
            let tooltip = repo
                .display
                .as_ref()
                .and_then(|d| d.tooltip.as_deref())
                .unwrap_or("Unknown");
            output.push_str(&format!(
                "  {} [{}] (downloads: {})\n",
                repo.name, tooltip, repo.download_count
            ));
            if let Some(description) = repo.description.as_deref().filter(|d| !d.is_empty()) {
                output.push_str(&format!("    {}\n", description));
            }
            if let Some(display) = &repo.display {
                output.push_str(&format!(
                    "    Last import: {} ({}), last commit: {}\n",
                    display.last_import, display.last_import_state, display.last_commit
                ));
            }
        }
    }

    output
}
