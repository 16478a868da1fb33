use async_trait::async_trait;

use crate::domain::{DomainError, Me};

/// Identity of the current visitor.
#[async_trait]
pub trait AuthService: Send + Sync {
    async fn me(&self) -> Result<Me, DomainError>;
}
