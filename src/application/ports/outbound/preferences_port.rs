use async_trait::async_trait;

use super::LookupError;
use crate::domain::entities::PlayerPreferences;
use crate::domain::value_objects::PlayerId;

/// Persistent store of per-player preferences
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PreferencesRepositoryPort: Send + Sync {
    /// Fetch the full preference record; `Ok(None)` if the player has none stored
    async fn get_user_preferences(
        &self,
        player: PlayerId,
    ) -> Result<Option<PlayerPreferences>, LookupError>;
}
