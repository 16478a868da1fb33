use async_trait::async_trait;

use crate::domain::{DomainError, Namespace};

#[async_trait]
pub trait NamespaceService: Send + Sync {
    async fn find_by_name(&self, name: &str) -> Result<Option<Namespace>, DomainError>;
}
