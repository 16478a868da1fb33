use anyhow::Result;

use crate::Commands;

use super::container::Container;
use super::controller::{FollowController, OpenController, ShowController, ShowRequest};

pub struct Router<'a> {
    show_controller: ShowController<'a>,
    follow_controller: FollowController<'a>,
    open_controller: OpenController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            show_controller: ShowController::new(container),
            follow_controller: FollowController::new(container),
            open_controller: OpenController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Show {
                namespace,
                name,
                kind,
                sort,
                desc,
                page,
                page_size,
                format,
            } => {
                self.show_controller
                    .show(ShowRequest {
                        namespace,
                        name,
                        kind,
                        sort,
                        descending: desc,
                        page,
                        page_size,
                        format,
                    })
                    .await
            }
            Commands::Follow { namespace } => self.follow_controller.follow(namespace).await,
            Commands::Open { namespace, item } => self.open_controller.open(namespace, item).await,
        }
    }
}
