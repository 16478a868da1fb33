use anyhow::Result;
use tracing::debug;

use crate::{AppliedFilter, AuthorView, DomainError, ListItem};

use super::super::Container;
use super::{not_found_message, open_author_page};

pub struct OpenController<'a> {
    container: &'a Container,
}

impl<'a> OpenController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    /// Finds `item` among the author's packages and returns its detail page path.
    ///
    /// The name filter matches substrings, so the exact match may sit on a
    /// later page; pages are walked until the filtered total is exhausted.
    pub async fn open(&self, namespace: String, item: String) -> Result<String> {
        let Some(page) = open_author_page(self.container, &namespace).await? else {
            return Ok(not_found_message(self.container, &namespace));
        };

        page.filter_changed(&[AppliedFilter::text("name", item.clone())])
            .await?;

        loop {
            let view = page.view();
            if let Some(found) = find_exact(&view, &item) {
                return Ok(page.open_item(found));
            }
            if !has_next_page(&view) {
                break;
            }
            let next = view.pagination.page_number + 1;
            debug!("'{}' not on page {}, trying page {}", item, next - 1, next);
            page.page_number_changed(next).await?;
        }

        Err(DomainError::not_found(format!("'{}' has no package named '{}'", namespace, item)).into())
    }
}

fn find_exact<'v>(view: &'v AuthorView, item: &str) -> Option<ListItem<'v>> {
    view.listing
        .collections
        .iter()
        .find(|c| c.name == item)
        .map(ListItem::Collection)
        .or_else(|| {
            view.listing
                .repositories
                .iter()
                .find(|r| r.name == item)
                .map(ListItem::Repository)
        })
}

fn has_next_page(view: &AuthorView) -> bool {
    let seen = u64::from(view.pagination.page_number) * u64::from(view.pagination.page_size);
    let listed = view.listing.repositories.len() + view.listing.collections.len();
    listed > 0 && seen < view.pagination.total_items
}
