use async_trait::async_trait;

use crate::domain::{DomainError, UserPreferences};

/// Persistence for the signed-in user's preferences.
#[async_trait]
pub trait PreferencesService: Send + Sync {
    async fn get(&self) -> Result<UserPreferences, DomainError>;

    /// Stores the whole preferences object and returns the server's canonical copy.
    async fn save(&self, preferences: &UserPreferences) -> Result<UserPreferences, DomainError>;
}
