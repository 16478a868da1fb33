use anyhow::{bail, Result};

use super::super::Container;
use super::{not_found_message, open_author_page};

pub struct FollowController<'a> {
    container: &'a Container,
}

impl<'a> FollowController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn follow(&self, namespace: String) -> Result<String> {
        let Some(page) = open_author_page(self.container, &namespace).await? else {
            return Ok(not_found_message(self.container, &namespace));
        };

        let status = page.sync_follow_state().await?;
        if !status.available {
            bail!("You must be signed in to follow '{}'", namespace);
        }

        let state = page.toggle_follow().await?;
        Ok(if state.is_following() {
            format!("You are now following {}.", namespace)
        } else {
            format!("You are no longer following {}.", namespace)
        })
    }
}
