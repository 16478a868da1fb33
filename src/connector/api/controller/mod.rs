pub mod follow_controller;
pub mod open_controller;
pub mod show_controller;

pub use follow_controller::FollowController;
pub use open_controller::OpenController;
pub use show_controller::{ShowController, ShowRequest};

use anyhow::Result;

use crate::{AuthorPageUseCase, OpenOutcome};

use super::Container;

/// Resolves the author route and opens the page controller on it.
/// `None` means the author does not exist and a not-found redirect was emitted.
pub(crate) async fn open_author_page(
    container: &Container,
    namespace: &str,
) -> Result<Option<std::sync::Arc<AuthorPageUseCase>>> {
    let route = container.resolve_use_case().execute(namespace).await?;
    match AuthorPageUseCase::open(container.page_services(), route)? {
        OpenOutcome::Ready(page) => Ok(Some(page)),
        OpenOutcome::NotFound => Ok(None),
    }
}

pub(crate) fn not_found_message(container: &Container, namespace: &str) -> String {
    format!(
        "Author '{}' not found (redirected to {}).",
        namespace,
        container.navigator().last().unwrap_or_default()
    )
}
